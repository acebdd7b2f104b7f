//! Error types for challenge-response authentication.

use keymac_core::MacError;
use thiserror::Error;

/// Errors that can occur while issuing or verifying a challenge.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The MAC engine rejected the input (typically a malformed signature).
    #[error("mac error: {0}")]
    Mac(#[from] MacError),

    /// The challenge document could not be serialized.
    #[error("challenge encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// No secret is registered for this authid.
    #[error("unknown authid: {0}")]
    UnknownAuthId(String),

    /// The signature decoded but does not match.
    #[error("signature mismatch for authid {authid}")]
    SignatureMismatch { authid: String },

    /// The challenge is older than the configured limit.
    #[error("challenge expired: issued {age_ms} ms ago, limit {max_ms} ms")]
    ChallengeExpired { age_ms: i64, max_ms: i64 },

    /// Configuration rejected by [`AuthConfig::validate`](crate::AuthConfig::validate).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;
