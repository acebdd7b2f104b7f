//! # keymac Core
//!
//! The MAC engine: a keyed HMAC-SHA256 computation rendered as hex or base64.
//!
//! This crate contains no I/O and no shared state. Every call owns its own
//! working registers, so the engine can be used from any number of threads.
//!
//! ## Layers
//!
//! - [`sha256`] - the SHA-256 hash primitive (64-byte blocks, 32-byte digest)
//! - [`hmac`] - the HMAC construction over SHA-256
//! - [`encoding`] - hex and base64 rendering of a [`MacDigest`]
//! - [`mac`] - the public entry points, including the status-code boundary
//!
//! ## Usage
//!
//! ```rust
//! use keymac_core::{compute_mac, EncodingMode};
//!
//! let mac = compute_mac(b"key", b"The quick brown fox jumps over the lazy dog", EncodingMode::Hex);
//! assert_eq!(
//!     mac.as_str(),
//!     "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
//! );
//! ```

pub mod encoding;
pub mod error;
pub mod hmac;
pub mod mac;
pub mod sha256;
pub mod types;

pub use encoding::{decode_digest, encode_digest, encode_digest_into, to_hex, EncodedMac};
pub use error::MacError;
pub use hmac::{hmac_sha256, HmacSha256};
pub use mac::{compute_mac, compute_mac_into, compute_mac_status, verify_mac, MacStatus};
pub use sha256::{sha256, Sha256};
pub use types::{EncodingMode, MacDigest};
