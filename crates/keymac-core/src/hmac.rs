//! HMAC (RFC 2104) over SHA-256.
//!
//! Keys longer than one block are hashed first; the result, or the short
//! key itself, is zero-padded to a full block before being mixed with the
//! inner and outer pads.

use zeroize::Zeroize;

use crate::sha256::{sha256, Sha256, BLOCK_LEN};
use crate::types::MacDigest;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Incremental HMAC-SHA256.
///
/// The inner hash is primed with `K ^ ipad` at construction; only the
/// outer pad block is retained, and it is wiped on drop.
#[derive(Clone)]
pub struct HmacSha256 {
    inner: Sha256,
    outer_pad: [u8; BLOCK_LEN],
}

impl HmacSha256 {
    /// Key the MAC. Any key length is accepted, including zero.
    pub fn new(key: &[u8]) -> Self {
        let mut block = [0u8; BLOCK_LEN];
        if key.len() > BLOCK_LEN {
            let mut hashed = sha256(key);
            block[..hashed.len()].copy_from_slice(&hashed);
            hashed.zeroize();
        } else {
            block[..key.len()].copy_from_slice(key);
        }

        let mut inner_pad = [0u8; BLOCK_LEN];
        let mut outer_pad = [0u8; BLOCK_LEN];
        for ((k, ip), op) in block.iter().zip(&mut inner_pad).zip(&mut outer_pad) {
            *ip = k ^ IPAD;
            *op = k ^ OPAD;
        }
        block.zeroize();

        let mut inner = Sha256::new();
        inner.update(&inner_pad);
        inner_pad.zeroize();

        Self { inner, outer_pad }
    }

    /// Absorb message bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Complete the inner hash and run the outer pass.
    pub fn finalize(self) -> MacDigest {
        let inner_digest = self.inner.clone().finalize();

        let mut outer = Sha256::new();
        outer.update(&self.outer_pad);
        outer.update(&inner_digest);
        MacDigest::from_bytes(outer.finalize())
    }
}

impl Drop for HmacSha256 {
    fn drop(&mut self) {
        self.outer_pad.zeroize();
    }
}

/// One-shot HMAC-SHA256 of `message` under `key`.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> MacDigest {
    let mut mac = HmacSha256::new(key);
    mac.update(message);
    mac.finalize()
}
