//! Configuration for the challenge-response layer.

use keymac_core::EncodingMode;
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result};

/// Configuration for an [`Authenticator`](crate::Authenticator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Encoding the peer uses for its signature.
    pub encoding: EncodingMode,
    /// Length of the random nonce placed in each challenge.
    pub nonce_len: usize,
    /// Reject signatures for challenges older than this. `None` disables the check.
    pub max_challenge_age_ms: Option<i64>,
    /// Value of the `authmethod` field in issued challenges.
    pub auth_method: String,
    /// Value of the `authprovider` field in issued challenges.
    pub auth_provider: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            encoding: EncodingMode::Base64,
            nonce_len: 16,
            max_challenge_age_ms: Some(60_000),
            auth_method: "hmac-sha256".to_string(),
            auth_provider: "static".to_string(),
        }
    }
}

impl AuthConfig {
    /// Check the configuration for values that would produce unusable challenges.
    pub fn validate(&self) -> Result<()> {
        if self.nonce_len == 0 {
            return Err(AuthError::InvalidConfig("nonce_len must be at least 1".into()));
        }
        if matches!(self.max_challenge_age_ms, Some(ms) if ms < 0) {
            return Err(AuthError::InvalidConfig(
                "max_challenge_age_ms must not be negative".into(),
            ));
        }
        Ok(())
    }
}
