//! Proptest generators for property-based testing.

use proptest::prelude::*;

use keymac_core::{EncodingMode, MacDigest};

/// Block size of the underlying hash; keys longer than this are pre-hashed.
pub const BLOCK_LEN: usize = 64;

/// Generate a key of any length up to `max_len`.
pub fn key(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a key whose length sits on or next to the block boundary.
pub fn boundary_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        Just(BLOCK_LEN - 1),
        Just(BLOCK_LEN),
        Just(BLOCK_LEN + 1),
        Just(2 * BLOCK_LEN),
    ]
    .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

/// Generate message bytes of specified max length.
pub fn message(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate an EncodingMode.
pub fn encoding_mode() -> impl Strategy<Value = EncodingMode> {
    prop_oneof![Just(EncodingMode::Hex), Just(EncodingMode::Base64)]
}

/// Generate a random MacDigest.
pub fn digest() -> impl Strategy<Value = MacDigest> {
    any::<[u8; 32]>().prop_map(MacDigest::from_bytes)
}

/// Generate a raw mode selector outside the defined encodings.
pub fn unsupported_mode() -> impl Strategy<Value = u32> {
    2u32..=u32::MAX
}

/// Parameters for a single MAC computation.
#[derive(Debug, Clone)]
pub struct MacParams {
    pub key: Vec<u8>,
    pub message: Vec<u8>,
    pub mode: EncodingMode,
}

impl Arbitrary for MacParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            prop_oneof![key(150), boundary_key()],
            message(500),
            encoding_mode(),
        )
            .prop_map(|(key, message, mode)| MacParams { key, message, mode })
            .boxed()
    }
}
