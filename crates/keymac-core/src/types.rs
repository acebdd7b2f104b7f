//! Strong type definitions for the MAC engine.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use subtle::ConstantTimeEq;

use crate::error::MacError;

/// Length of an HMAC-SHA256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Output rendering for a MAC digest.
///
/// This is a closed set: every variant has an encoder, so an unsupported
/// mode can only arise from a raw numeric selector (see [`EncodingMode::from_raw`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingMode {
    /// 64 lowercase hexadecimal characters.
    Hex,
    /// 44 characters of standard base64 with `=` padding.
    Base64,
}

impl EncodingMode {
    /// Number of output bytes this mode produces for a 32-byte digest.
    pub const fn required_len(self) -> usize {
        match self {
            EncodingMode::Hex => DIGEST_LEN * 2,
            EncodingMode::Base64 => ((DIGEST_LEN + 2) / 3) * 4,
        }
    }

    /// Numeric selector used at the status-code boundary.
    pub const fn as_raw(self) -> u32 {
        match self {
            EncodingMode::Hex => 0,
            EncodingMode::Base64 => 1,
        }
    }

    /// Parse a numeric selector.
    pub fn from_raw(raw: u32) -> Result<Self, MacError> {
        match raw {
            0 => Ok(EncodingMode::Hex),
            1 => Ok(EncodingMode::Base64),
            other => Err(MacError::UnsupportedMode(other)),
        }
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingMode::Hex => f.write_str("hex"),
            EncodingMode::Base64 => f.write_str("base64"),
        }
    }
}

impl TryFrom<u32> for EncodingMode {
    type Error = MacError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

/// A 32-byte HMAC-SHA256 value.
///
/// Equality through `==` is ordinary byte equality. Use [`MacDigest::verify`]
/// when comparing against an untrusted candidate.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacDigest(pub [u8; DIGEST_LEN]);

impl MacDigest {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Convert to a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != DIGEST_LEN {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; DIGEST_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Convert to padded standard base64.
    pub fn to_base64(&self) -> String {
        base64::encode(self.0)
    }

    /// Constant-time comparison against candidate bytes.
    ///
    /// A candidate of the wrong length is rejected without comparing contents.
    pub fn verify(&self, candidate: &[u8]) -> bool {
        if candidate.len() != DIGEST_LEN {
            return false;
        }
        self.0[..].ct_eq(candidate).into()
    }

    /// The zero digest (sentinel value).
    pub const ZERO: Self = Self([0u8; DIGEST_LEN]);
}

impl fmt::Debug for MacDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacDigest({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for MacDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for MacDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for MacDigest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for MacDigest {
    type Error = MacError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; DIGEST_LEN] = slice
            .try_into()
            .map_err(|_| MacError::InvalidDigestLength(slice.len()))?;
        Ok(Self(arr))
    }
}

impl Serialize for MacDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for MacDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_len() {
        assert_eq!(EncodingMode::Hex.required_len(), 64);
        assert_eq!(EncodingMode::Base64.required_len(), 44);
    }

    #[test]
    fn test_mode_raw_selector() {
        for mode in [EncodingMode::Hex, EncodingMode::Base64] {
            assert_eq!(EncodingMode::from_raw(mode.as_raw()).unwrap(), mode);
        }
        assert_eq!(
            EncodingMode::try_from(2u32),
            Err(MacError::UnsupportedMode(2))
        );
    }

    #[test]
    fn test_mode_serde_names() {
        let json = serde_json::to_string(&EncodingMode::Base64).unwrap();
        assert_eq!(json, "\"base64\"");
        let mode: EncodingMode = serde_json::from_str("\"hex\"").unwrap();
        assert_eq!(mode, EncodingMode::Hex);
    }

    #[test]
    fn test_digest_hex_roundtrip() {
        let digest = MacDigest::from_bytes([0x42; 32]);
        let recovered = MacDigest::from_hex(&digest.to_hex()).unwrap();
        assert_eq!(digest, recovered);
        assert!(MacDigest::from_hex("abcd").is_err());
    }

    #[test]
    fn test_digest_debug() {
        let digest = MacDigest::from_bytes([0xcd; 32]);
        assert_eq!(format!("{:?}", digest), "MacDigest(cdcdcdcdcdcdcdcd)");
    }

    #[test]
    fn test_verify() {
        let digest = MacDigest::from_bytes([0x11; 32]);
        assert!(digest.verify(&[0x11; 32]));

        let mut tampered = [0x11; 32];
        tampered[31] ^= 1;
        assert!(!digest.verify(&tampered));
        assert!(!digest.verify(&[0x11; 31]));
        assert!(!digest.verify(&[]));
    }

    #[test]
    fn test_try_from_slice() {
        let bytes = [7u8; 32];
        assert_eq!(MacDigest::try_from(&bytes[..]).unwrap().0, bytes);
        assert_eq!(
            MacDigest::try_from(&bytes[..5]),
            Err(MacError::InvalidDigestLength(5))
        );
    }

    #[test]
    fn test_digest_serde_as_hex() {
        let digest = MacDigest::from_bytes([0xab; 32]);
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", "ab".repeat(32)));
        let back: MacDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }
}
