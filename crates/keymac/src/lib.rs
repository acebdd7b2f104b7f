//! # keymac
//!
//! HMAC-SHA256 challenge-response authentication.
//!
//! ## Overview
//!
//! The engine in [`core`] computes keyed digests and renders them as hex or
//! base64. This crate builds the login exchange on top of it:
//!
//! - **Challenge**: a JSON document with a random nonce, a timestamp and the
//!   session it belongs to
//! - **Signature**: HMAC-SHA256 of the challenge text under a shared secret
//! - **Authenticator**: issues challenges and verifies signatures against a
//!   [`SecretProvider`]
//!
//! ## Usage
//!
//! ```rust
//! use keymac::{sign_challenge, AuthConfig, Authenticator, StaticSecrets};
//!
//! let secrets = StaticSecrets::new().with("peter", "secret1");
//! let config = AuthConfig::default();
//! let encoding = config.encoding;
//! let auth = Authenticator::new(config, secrets).unwrap();
//!
//! // Server sends `issued.json()` to the client...
//! let issued = auth.issue("peter", "user", 1).unwrap();
//!
//! // ...which signs it with the shared secret.
//! let signature = sign_challenge(b"secret1", issued.json(), encoding);
//!
//! auth.verify(&issued, signature.as_str()).unwrap();
//! ```
//!
//! ## Re-exports
//!
//! - `keymac::core` - the MAC engine (`compute_mac`, `MacDigest`, ...)

pub mod authenticator;
pub mod challenge;
pub mod config;
pub mod error;

pub use keymac_core as core;

pub use authenticator::{sign_challenge, Authenticator, IssuedChallenge, SecretProvider, StaticSecrets};
pub use challenge::{format_iso8601, iso8601_utc_timestamp, random_ascii_string, Challenge};
pub use config::AuthConfig;
pub use error::{AuthError, Result};

// Re-export commonly used core types
pub use keymac_core::{
    compute_mac, compute_mac_into, compute_mac_status, verify_mac, EncodedMac, EncodingMode,
    MacDigest, MacError, MacStatus,
};
