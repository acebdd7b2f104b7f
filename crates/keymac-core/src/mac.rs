//! Public entry points of the MAC engine.
//!
//! [`compute_mac`] returns an owned encoding and cannot fail.
//! [`compute_mac_into`] writes into caller storage and reports the required
//! capacity when it is too small. [`compute_mac_status`] keeps the plain
//! status-code contract (in/out length, numeric mode selector) for callers
//! that cannot take a `Result`.

use tracing::warn;

use crate::encoding::{decode_digest, encode_digest, encode_digest_into, EncodedMac};
use crate::error::MacError;
use crate::hmac::hmac_sha256;
use crate::types::EncodingMode;

/// Outcome of [`compute_mac_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MacStatus {
    Success = 0,
    /// Destination too small; the required size was written to `out_len`.
    InsufficientBuffer = 1,
    /// The numeric mode selector names no encoding.
    UnsupportedMode = 2,
}

impl MacStatus {
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub const fn is_success(self) -> bool {
        matches!(self, MacStatus::Success)
    }
}

/// HMAC-SHA256 of `message` under `key`, rendered in `mode`.
pub fn compute_mac(key: &[u8], message: &[u8], mode: EncodingMode) -> EncodedMac {
    encode_digest(&hmac_sha256(key, message), mode)
}

/// HMAC-SHA256 of `message` under `key`, rendered into `out`.
///
/// Returns the number of bytes written (64 for hex, 44 for base64). When
/// `out` is smaller than that, returns `InsufficientBuffer` carrying the
/// required size and leaves `out` untouched.
pub fn compute_mac_into(
    key: &[u8],
    message: &[u8],
    out: &mut [u8],
    mode: EncodingMode,
) -> Result<usize, MacError> {
    let required = mode.required_len();
    if out.len() < required {
        return Err(MacError::InsufficientBuffer {
            required,
            provided: out.len(),
        });
    }
    encode_digest_into(&hmac_sha256(key, message), mode, out)
}

/// Status-code form of [`compute_mac_into`].
///
/// On input `*out_len` is the usable capacity of `out` (clamped to
/// `out.len()`). On success it becomes the number of bytes written; on
/// `InsufficientBuffer` it becomes the number of bytes required. It is left
/// unchanged for `UnsupportedMode`. Never panics and never writes partial
/// output.
pub fn compute_mac_status(
    key: &[u8],
    message: &[u8],
    out: &mut [u8],
    out_len: &mut usize,
    mode: u32,
) -> MacStatus {
    let mode = match EncodingMode::from_raw(mode) {
        Ok(mode) => mode,
        Err(err) => {
            warn!(%err, "rejected MAC request");
            return MacStatus::UnsupportedMode;
        }
    };

    let capacity = (*out_len).min(out.len());
    match compute_mac_into(key, message, &mut out[..capacity], mode) {
        Ok(written) => {
            *out_len = written;
            MacStatus::Success
        }
        Err(err) => {
            *out_len = err.required_len().unwrap_or_else(|| mode.required_len());
            MacStatus::InsufficientBuffer
        }
    }
}

/// Check an encoded MAC produced by a peer.
///
/// Returns `Ok(false)` for a well-formed value that does not match, and an
/// error only when `encoded` cannot be decoded in `mode`. The comparison
/// runs in constant time.
pub fn verify_mac(
    key: &[u8],
    message: &[u8],
    encoded: &str,
    mode: EncodingMode,
) -> Result<bool, MacError> {
    let candidate = decode_digest(encoded, mode)?;
    Ok(hmac_sha256(key, message).verify(candidate.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FOX_KEY: &[u8] = b"key";
    const FOX_MSG: &[u8] = b"The quick brown fox jumps over the lazy dog";
    const FOX_HEX: &str = "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8";
    const FOX_B64: &str = "97yD9DBThCSxMpjmqm+xQ+9NWaFJRhdZl0edvC0aPNg=";

    #[test]
    fn test_compute_mac_known_vector() {
        assert_eq!(compute_mac(FOX_KEY, FOX_MSG, EncodingMode::Hex).as_str(), FOX_HEX);
        assert_eq!(compute_mac(FOX_KEY, FOX_MSG, EncodingMode::Base64).as_str(), FOX_B64);
    }

    #[test]
    fn test_compute_mac_into_zero_capacity() {
        let mut empty: [u8; 0] = [];
        assert_eq!(
            compute_mac_into(FOX_KEY, FOX_MSG, &mut empty, EncodingMode::Hex),
            Err(MacError::InsufficientBuffer {
                required: 64,
                provided: 0
            })
        );
        assert_eq!(
            compute_mac_into(FOX_KEY, FOX_MSG, &mut empty, EncodingMode::Base64),
            Err(MacError::InsufficientBuffer {
                required: 44,
                provided: 0
            })
        );
    }

    #[test]
    fn test_status_success_reports_written_len() {
        let mut buf = [0u8; 128];
        let mut len = buf.len();
        let status = compute_mac_status(FOX_KEY, FOX_MSG, &mut buf, &mut len, 0);
        assert_eq!(status, MacStatus::Success);
        assert_eq!(len, 64);
        assert_eq!(&buf[..len], FOX_HEX.as_bytes());

        let mut len = buf.len();
        let status = compute_mac_status(FOX_KEY, FOX_MSG, &mut buf, &mut len, 1);
        assert!(status.is_success());
        assert_eq!(len, 44);
        assert_eq!(&buf[..len], FOX_B64.as_bytes());
    }

    #[test]
    fn test_status_zero_len_reports_required_size() {
        for (raw, required) in [(0u32, 64usize), (1, 44)] {
            let mut buf = [0u8; 128];
            let mut len = 0;
            let status = compute_mac_status(FOX_KEY, FOX_MSG, &mut buf, &mut len, raw);
            assert_eq!(status, MacStatus::InsufficientBuffer);
            assert_eq!(status.code(), 1);
            assert_eq!(len, required);
            assert!(buf.iter().all(|&b| b == 0), "no bytes may be written");
        }
    }

    #[test]
    fn test_status_out_len_larger_than_buffer_is_clamped() {
        let mut buf = [0u8; 10];
        let mut len = 1000;
        let status = compute_mac_status(FOX_KEY, FOX_MSG, &mut buf, &mut len, 1);
        assert_eq!(status, MacStatus::InsufficientBuffer);
        assert_eq!(len, 44);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_status_unsupported_mode() {
        let mut buf = [0u8; 128];
        let mut len = buf.len();
        let status = compute_mac_status(FOX_KEY, FOX_MSG, &mut buf, &mut len, 9);
        assert_eq!(status, MacStatus::UnsupportedMode);
        assert_eq!(status.code(), 2);
        assert_eq!(len, 128);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_verify_mac() {
        assert!(verify_mac(FOX_KEY, FOX_MSG, FOX_HEX, EncodingMode::Hex).unwrap());
        assert!(verify_mac(FOX_KEY, FOX_MSG, FOX_B64, EncodingMode::Base64).unwrap());
        assert!(!verify_mac(b"other", FOX_MSG, FOX_HEX, EncodingMode::Hex).unwrap());
        assert!(verify_mac(FOX_KEY, FOX_MSG, FOX_B64, EncodingMode::Hex).is_err());
    }

    fn differing_bits(a: &[u8], b: &[u8]) -> u32 {
        a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
    }

    proptest! {
        #[test]
        fn test_single_bit_flip_avalanche(
            key in prop::collection::vec(any::<u8>(), 0..80),
            message in prop::collection::vec(any::<u8>(), 1..200),
            bit in any::<prop::sample::Index>(),
        ) {
            let bit = bit.index(message.len() * 8);
            let mut flipped = message.clone();
            flipped[bit / 8] ^= 1 << (bit % 8);

            let a = hmac_sha256(&key, &message);
            let b = hmac_sha256(&key, &flipped);
            // Expected ~128 of 256; anything below 64 would be far outside chance.
            prop_assert!(differing_bits(a.as_bytes(), b.as_bytes()) >= 64);
        }

        #[test]
        fn test_encodings_agree(
            key in prop::collection::vec(any::<u8>(), 0..80),
            message in prop::collection::vec(any::<u8>(), 0..200),
        ) {
            let hex = compute_mac(&key, &message, EncodingMode::Hex);
            let b64 = compute_mac(&key, &message, EncodingMode::Base64);
            prop_assert_eq!(hex.digest().unwrap(), b64.digest().unwrap());
        }
    }
}
