//! Test fixtures and helpers.
//!
//! Common setup code for challenge-response tests.

use keymac::{
    sign_challenge, AuthConfig, Authenticator, EncodedMac, IssuedChallenge, StaticSecrets,
};

/// An authenticator with a known set of users, plus the client-side secrets.
pub struct AuthFixture {
    pub authenticator: Authenticator<StaticSecrets>,
    users: Vec<(String, Vec<u8>)>,
}

impl AuthFixture {
    /// Create a fixture with the default configuration and one user, `peter`.
    pub fn new() -> Self {
        Self::with_config(AuthConfig::default(), &[("peter", &b"secret1"[..])])
    }

    /// Create a fixture with a custom configuration and user table.
    ///
    /// Panics if `config` does not validate.
    pub fn with_config(config: AuthConfig, users: &[(&str, &[u8])]) -> Self {
        let mut secrets = StaticSecrets::new();
        for (authid, secret) in users {
            secrets.insert(*authid, secret.to_vec());
        }
        Self {
            authenticator: Authenticator::new(config, secrets)
                .expect("fixture config must be valid"),
            users: users
                .iter()
                .map(|(id, secret)| (id.to_string(), secret.to_vec()))
                .collect(),
        }
    }

    /// The client-side copy of a user's secret.
    pub fn secret(&self, authid: &str) -> Option<&[u8]> {
        self.users
            .iter()
            .find(|(id, _)| id == authid)
            .map(|(_, secret)| secret.as_slice())
    }

    /// Issue a challenge for `authid` with role `user`.
    pub fn issue(&self, authid: &str, session: u64) -> IssuedChallenge {
        self.authenticator
            .issue(authid, "user", session)
            .expect("authid must be registered in the fixture")
    }

    /// Sign an issued challenge the way an honest client would.
    pub fn sign(&self, issued: &IssuedChallenge) -> EncodedMac {
        let secret = self
            .secret(issued.authid())
            .expect("authid must be registered in the fixture");
        sign_challenge(secret, issued.json(), self.authenticator.config().encoding)
    }
}

impl Default for AuthFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Build users `user0`, `user1`, ... with distinct secrets.
pub fn multi_user_fixture(count: usize) -> AuthFixture {
    let users: Vec<(String, Vec<u8>)> = (0..count)
        .map(|i| (format!("user{}", i), format!("secret-{}", i).into_bytes()))
        .collect();
    let borrowed: Vec<(&str, &[u8])> = users
        .iter()
        .map(|(id, secret)| (id.as_str(), secret.as_slice()))
        .collect();
    AuthFixture::with_config(AuthConfig::default(), &borrowed)
}
