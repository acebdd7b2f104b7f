//! Server and client sides of the challenge-response exchange.
//!
//! The server issues a [`Challenge`], keeps the [`IssuedChallenge`], and
//! later checks the client's signature with [`Authenticator::verify`]. The
//! client signs the exact challenge text it received with [`sign_challenge`].

use std::collections::HashMap;

use chrono::Utc;
use keymac_core::{compute_mac, verify_mac, EncodedMac, EncodingMode};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::challenge::{format_iso8601, random_ascii_string, Challenge};
use crate::config::AuthConfig;
use crate::error::{AuthError, Result};

/// Source of per-authid shared secrets.
pub trait SecretProvider: Send + Sync {
    /// Look up the secret for `authid`, or `None` if it is unknown.
    fn secret(&self, authid: &str) -> Option<Zeroizing<Vec<u8>>>;
}

/// A fixed in-memory table of secrets.
#[derive(Default)]
pub struct StaticSecrets {
    secrets: HashMap<String, Zeroizing<Vec<u8>>>,
}

impl StaticSecrets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the secret for `authid`.
    pub fn insert(&mut self, authid: impl Into<String>, secret: impl Into<Vec<u8>>) {
        self.secrets
            .insert(authid.into(), Zeroizing::new(secret.into()));
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, authid: impl Into<String>, secret: impl Into<Vec<u8>>) -> Self {
        self.insert(authid, secret);
        self
    }

    pub fn remove(&mut self, authid: &str) -> bool {
        self.secrets.remove(authid).is_some()
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

impl SecretProvider for StaticSecrets {
    fn secret(&self, authid: &str) -> Option<Zeroizing<Vec<u8>>> {
        self.secrets.get(authid).cloned()
    }
}

/// A challenge the server has sent and is waiting on.
#[derive(Debug, Clone)]
pub struct IssuedChallenge {
    challenge: Challenge,
    json: String,
    issued_at_ms: i64,
}

impl IssuedChallenge {
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// The exact text sent to the client and covered by its signature.
    pub fn json(&self) -> &str {
        &self.json
    }

    /// Issue time in milliseconds since the Unix epoch.
    pub fn issued_at_ms(&self) -> i64 {
        self.issued_at_ms
    }

    pub fn authid(&self) -> &str {
        &self.challenge.authid
    }
}

/// Client side: sign the challenge text exactly as received.
pub fn sign_challenge(secret: &[u8], challenge_json: &str, mode: EncodingMode) -> EncodedMac {
    compute_mac(secret, challenge_json.as_bytes(), mode)
}

/// Server side of the exchange.
pub struct Authenticator<P: SecretProvider> {
    config: AuthConfig,
    secrets: P,
}

impl<P: SecretProvider> Authenticator<P> {
    /// Create an authenticator; fails if `config` does not validate.
    pub fn new(config: AuthConfig, secrets: P) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, secrets })
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn secrets(&self) -> &P {
        &self.secrets
    }

    /// Build a fresh challenge for `authid`.
    ///
    /// Fails with `UnknownAuthId` before generating anything if no secret is
    /// registered.
    pub fn issue(&self, authid: &str, authrole: &str, session: u64) -> Result<IssuedChallenge> {
        if self.secrets.secret(authid).is_none() {
            warn!(authid, "challenge requested for unknown authid");
            return Err(AuthError::UnknownAuthId(authid.to_string()));
        }

        let now = Utc::now();
        let challenge = Challenge {
            authid: authid.to_string(),
            authrole: authrole.to_string(),
            authmethod: self.config.auth_method.clone(),
            authprovider: self.config.auth_provider.clone(),
            nonce: random_ascii_string(self.config.nonce_len, None),
            timestamp: format_iso8601(&now),
            session,
        };
        let json = challenge.to_json()?;

        debug!(authid, session, "issued challenge");
        Ok(IssuedChallenge {
            challenge,
            json,
            issued_at_ms: now.timestamp_millis(),
        })
    }

    /// Check a client's signature against an issued challenge.
    pub fn verify(&self, issued: &IssuedChallenge, signature: &str) -> Result<()> {
        self.verify_at(issued, signature, Utc::now().timestamp_millis())
    }

    /// [`verify`](Self::verify) with an explicit current time in milliseconds.
    pub fn verify_at(&self, issued: &IssuedChallenge, signature: &str, now_ms: i64) -> Result<()> {
        let authid = issued.authid();

        if let Some(max_ms) = self.config.max_challenge_age_ms {
            let age_ms = now_ms.saturating_sub(issued.issued_at_ms);
            if age_ms > max_ms {
                warn!(authid, age_ms, max_ms, "challenge expired");
                return Err(AuthError::ChallengeExpired { age_ms, max_ms });
            }
        }

        let secret = self
            .secrets
            .secret(authid)
            .ok_or_else(|| AuthError::UnknownAuthId(authid.to_string()))?;

        let matches = verify_mac(
            &secret,
            issued.json.as_bytes(),
            signature.trim(),
            self.config.encoding,
        )
        .map_err(|e| {
            warn!(authid, error = %e, "malformed signature");
            e
        })?;

        if !matches {
            warn!(authid, "signature mismatch");
            return Err(AuthError::SignatureMismatch {
                authid: authid.to_string(),
            });
        }

        debug!(authid, session = issued.challenge.session, "signature accepted");
        Ok(())
    }
}
