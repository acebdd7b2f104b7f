//! Textual rendering of MAC digests.
//!
//! Hex output is lowercase with no prefix or separators (64 bytes for a
//! digest). Base64 output uses the standard alphabet with `=` padding
//! (44 bytes for a digest). Both decoders are exact inverses.

use std::fmt;

use crate::error::MacError;
use crate::types::{EncodingMode, MacDigest};

/// An owned, encoded MAC value together with the mode that produced it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EncodedMac {
    mode: EncodingMode,
    text: String,
}

impl EncodedMac {
    /// The encoding that produced this value.
    pub fn mode(&self) -> EncodingMode {
        self.mode
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Decode back into the raw digest.
    pub fn digest(&self) -> Result<MacDigest, MacError> {
        decode_digest(&self.text, self.mode)
    }
}

impl fmt::Debug for EncodedMac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedMac({}:{})", self.mode, self.text)
    }
}

impl fmt::Display for EncodedMac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for EncodedMac {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Lowercase hex rendering of arbitrary bytes.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Render a digest in the requested mode.
pub fn encode_digest(digest: &MacDigest, mode: EncodingMode) -> EncodedMac {
    let text = match mode {
        EncodingMode::Hex => digest.to_hex(),
        EncodingMode::Base64 => digest.to_base64(),
    };
    debug_assert_eq!(text.len(), mode.required_len());
    EncodedMac { mode, text }
}

/// Render a digest into caller storage.
///
/// The only failure is `InsufficientBuffer`, and the capacity check happens
/// before anything is written, so on failure the buffer is untouched.
pub fn encode_digest_into(
    digest: &MacDigest,
    mode: EncodingMode,
    out: &mut [u8],
) -> Result<usize, MacError> {
    let required = mode.required_len();
    if out.len() < required {
        return Err(MacError::InsufficientBuffer {
            required,
            provided: out.len(),
        });
    }

    match mode {
        EncodingMode::Hex => {
            out[..required].copy_from_slice(digest.to_hex().as_bytes());
        }
        EncodingMode::Base64 => {
            let written = base64::encode_config_slice(digest.as_bytes(), base64::STANDARD, out);
            debug_assert_eq!(written, required);
        }
    }
    Ok(required)
}

/// Parse an encoded digest back into its 32 bytes.
pub fn decode_digest(text: &str, mode: EncodingMode) -> Result<MacDigest, MacError> {
    let bytes = match mode {
        EncodingMode::Hex => hex::decode(text).map_err(|e| MacError::InvalidEncoding {
            mode,
            reason: e.to_string(),
        })?,
        EncodingMode::Base64 => base64::decode(text).map_err(|e| MacError::InvalidEncoding {
            mode,
            reason: e.to_string(),
        })?,
    };
    MacDigest::try_from(bytes.as_slice())
}
