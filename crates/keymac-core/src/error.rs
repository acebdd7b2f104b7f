//! Error types for the keymac core engine.

use thiserror::Error;

use crate::types::EncodingMode;

/// Errors reported by the MAC engine.
///
/// The hash and HMAC computations themselves are total; every variant here
/// comes from the output side (buffer sizing, mode selection, decoding).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacError {
    #[error("output buffer too small: {required} bytes required, {provided} provided")]
    InsufficientBuffer { required: usize, provided: usize },

    #[error("unsupported encoding mode: {0}")]
    UnsupportedMode(u32),

    #[error("invalid {mode} encoding: {reason}")]
    InvalidEncoding { mode: EncodingMode, reason: String },

    #[error("decoded digest has {0} bytes, expected 32")]
    InvalidDigestLength(usize),
}

impl MacError {
    /// The capacity a caller needs to retry with, if this error carries one.
    pub fn required_len(&self) -> Option<usize> {
        match self {
            MacError::InsufficientBuffer { required, .. } => Some(*required),
            _ => None,
        }
    }

    /// Whether retrying with a larger buffer can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, MacError::InsufficientBuffer { .. })
    }
}
