//! Keccak-256 Hash Function
//!
//! Streaming hasher on top of the sponge. `digest` finalizes a copy of the
//! sponge, so the session can keep absorbing afterwards.

use super::config::SpongeConfig;
use super::padding::MultiRatePadding;
use super::sponge::Sponge;
use super::{KECCAK256_DIGEST_LEN, KECCAK256_RATE};
use crate::error::KeccakError;

/// Keccak-256 hash (Ethereum's version)
///
/// Returns 32-byte hash
pub fn keccak256(input: &[u8]) -> [u8; KECCAK256_DIGEST_LEN] {
    let mut hasher = Keccak256::new();
    hasher.update(input);
    hasher.digest()
}

/// Keccak-256 hash as 64 lowercase hex characters
pub fn keccak256_hex(input: &[u8]) -> String {
    hex::encode(keccak256(input))
}

/// Parse a 64-character hex digest (as produced by `hexdigest`)
pub fn parse_hex_digest(digest: &str) -> Result<[u8; KECCAK256_DIGEST_LEN], KeccakError> {
    let bytes = hex::decode(digest)?;
    let actual = bytes.len();
    bytes
        .try_into()
        .map_err(|_| KeccakError::InvalidDigestLength {
            expected: KECCAK256_DIGEST_LEN,
            actual,
        })
}

/// Incremental Keccak-256 hasher
#[derive(Clone, Debug)]
pub struct Keccak256 {
    sponge: Sponge,
}

impl Keccak256 {
    /// Digest size in bytes
    pub const DIGEST_LEN: usize = Self::CONFIG.output_bytes();

    /// Block size (rate) in bytes
    pub const BLOCK_LEN: usize = KECCAK256_RATE;

    /// Sponge parameters
    pub const CONFIG: SpongeConfig = SpongeConfig::KECCAK_256;

    /// Create new hasher
    pub fn new() -> Self {
        Keccak256 {
            sponge: Sponge::with_output(
                Self::CONFIG.rate_bytes(),
                Self::DIGEST_LEN,
                MultiRatePadding,
            ),
        }
    }

    /// Absorb additional input. Can be called multiple times.
    pub fn update(&mut self, input: &[u8]) {
        self.sponge.absorb(input);
    }

    /// Hash of everything absorbed so far.
    ///
    /// Leaves the session untouched: further `update` calls continue from
    /// the same point.
    pub fn digest(&self) -> [u8; KECCAK256_DIGEST_LEN] {
        let mut last = self.sponge.clone();
        last.absorb_final();

        let mut out = [0u8; KECCAK256_DIGEST_LEN];
        last.squeeze_into(&mut out);
        out
    }

    /// Lowercase hex rendering of [`digest`](Self::digest)
    pub fn hexdigest(&self) -> String {
        hex::encode(self.digest())
    }

    /// Reset hasher to initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Keccak256 {
    fn default() -> Self {
        Self::new()
    }
}
