//! # keymac Testkit
//!
//! Testing utilities for keymac.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Reference vectors**: HMAC-SHA256 cases with expected hex and base64 output
//! - **Generators**: Proptest strategies for keys, messages and encoding modes
//! - **Fixtures**: A ready-made authenticator with known users
//!
//! ## Reference Vectors
//!
//! ```rust
//! use keymac_core::{compute_mac, EncodingMode};
//! use keymac_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     let mac = compute_mac(&vector.key, &vector.message, EncodingMode::Hex);
//!     assert_eq!(mac.as_str(), vector.hex, "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use keymac_testkit::generators::MacParams;
//!
//! proptest! {
//!     #[test]
//!     fn mac_is_deterministic(params: MacParams) {
//!         let a = keymac_core::compute_mac(&params.key, &params.message, params.mode);
//!         let b = keymac_core::compute_mac(&params.key, &params.message, params.mode);
//!         prop_assert_eq!(a, b);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use keymac_testkit::fixtures::AuthFixture;
//!
//! let fixture = AuthFixture::new();
//! let issued = fixture.issue("peter", 1);
//! let signature = fixture.sign(&issued);
//! fixture.authenticator.verify(&issued, signature.as_str()).unwrap();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_user_fixture, AuthFixture};
pub use generators::MacParams;
pub use vectors::{all_vectors, verify_all_vectors, MacVector};
