//! Keccak-256: Ethereum's Hash Function
//!
//! This library computes the pre-NIST Keccak-256 digest used throughout
//! Ethereum. It is built bottom-up from the Keccak-f[1600] permutation:
//!
//! ```text
//! bytes -> Keccak256::update -> Sponge::absorb -> SpongeState (XOR) -> keccak_f
//!       -> Keccak256::digest -> clone sponge, pad, absorb final block, squeeze 32 bytes
//! ```
//!
//! ## Architecture
//!
//! 1. **Lane operations**: 64-bit rotation and byte/lane conversion
//! 2. **Permutation**: 24 rounds of θ, ρ, π, χ, ι over a 5x5 lane matrix
//! 3. **Sponge state**: 1600 bits split into rate (1088) and capacity (512)
//! 4. **Sponge**: buffered absorb, multi-rate padding, squeeze
//! 5. **Hash facade**: streaming `update` / `digest` / `hexdigest`
//!
//! ## Usage
//!
//! ```
//! use keccak256_sponge::{keccak256_hex, Keccak256};
//!
//! let mut hasher = Keccak256::new();
//! hasher.update(b"foo");
//! hasher.update(b"bar");
//! assert_eq!(hasher.hexdigest(), keccak256_hex(b"foobar"));
//!
//! // digest() does not consume the session
//! hasher.update(b"baz");
//! assert_eq!(hasher.hexdigest(), keccak256_hex(b"foobarbaz"));
//! ```
//!
//! The padding uses the `0x01 .. 0x80` multi-rate rule. NIST SHA3-256 pads
//! with `0x06` as its first padding byte instead, so the two are different
//! functions.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod keccak;

pub use error::KeccakError;
pub use keccak::{
    keccak256, keccak256_hex, keccak_f, parse_hex_digest, Keccak256, KeccakF1600, Lanes,
    MultiRatePadding, PaddingRule, Permutation, Sponge, SpongeConfig, SpongeState,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
