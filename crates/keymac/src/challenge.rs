//! Challenge documents and the helpers that fill them in.
//!
//! A challenge is a small JSON object. Its exact serialized bytes are what
//! both sides feed into HMAC-SHA256, so the JSON string travels alongside
//! the parsed struct and is never re-serialized before verification.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// First and last printable, non-space ASCII characters.
const PRINTABLE_FIRST: u8 = b'!';
const PRINTABLE_LAST: u8 = b'~';

/// Generate `len` random printable ASCII characters.
///
/// With a seed the output is reproducible; without one the thread RNG is used.
pub fn random_ascii_string(len: usize, seed: Option<u64>) -> String {
    match seed {
        Some(seed) => sample_printable(&mut StdRng::seed_from_u64(seed), len),
        None => sample_printable(&mut rand::thread_rng(), len),
    }
}

fn sample_printable<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| rng.gen_range(PRINTABLE_FIRST..=PRINTABLE_LAST) as char)
        .collect()
}

/// Current UTC time as `YYYY-MM-DDThh:mm:ss.sssZ`.
pub fn iso8601_utc_timestamp() -> String {
    format_iso8601(&Utc::now())
}

/// Format a UTC instant as `YYYY-MM-DDThh:mm:ss.sssZ`.
pub fn format_iso8601(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// The document a server sends and a client signs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub authid: String,
    pub authrole: String,
    pub authmethod: String,
    pub authprovider: String,
    pub nonce: String,
    pub timestamp: String,
    pub session: u64,
}

impl Challenge {
    /// Serialize to the JSON text that gets signed.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a challenge received from a server.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
