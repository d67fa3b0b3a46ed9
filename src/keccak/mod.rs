//! Keccak-256 over Keccak-f[1600]
//!
//! Implements Keccak-256 (Ethereum's hash function) with a lane-wise
//! state representation.
//!
//! ## Architecture
//!
//! - State: 25 lanes × 64 bits, addressed as `lanes[x][y]`
//! - Byte order: lane (x, y) occupies bytes `8*(5*y + x) .. 8*(5*y + x) + 8`, little-endian
//! - 24 rounds of θ, ρ, π, χ, ι steps
//! - Sponge with rate 1088 bits, capacity 512 bits
//!
//! ## Specification
//!
//! Keccak-f[1600] as in the Keccak reference; padding is the pre-NIST
//! Keccak multi-rate rule (`0x01 .. 0x80`), not FIPS 202's `0x06`.

pub mod constants;
pub mod lane;
pub mod theta;
pub mod rho_pi;
pub mod chi;
pub mod iota;
pub mod round;
pub mod state;
pub mod padding;
pub mod config;
pub mod sponge;
pub mod hash;

pub use config::SpongeConfig;
pub use hash::{keccak256, keccak256_hex, parse_hex_digest, Keccak256};
pub use padding::{MultiRatePadding, PaddingRule};
pub use round::{keccak_f, KeccakF1600, Permutation};
pub use sponge::Sponge;
pub use state::SpongeState;

/// 5x5 matrix of 64-bit lanes, indexed `[x][y]`
pub type Lanes = [[u64; 5]; 5];

/// Number of bytes in Keccak state
pub const STATE_BYTES: usize = 200;

/// Number of lanes (5x5)
pub const LANES: usize = 25;

/// Bytes per lane
pub const LANE_BYTES: usize = 8;

/// Bits per lane
pub const LANE_BITS: u32 = u64::BITS;

/// Number of rounds: 12 + 2·log2(lane width), i.e. 24 for 64-bit lanes
pub const ROUNDS: usize = 12 + 2 * LANE_BITS.trailing_zeros() as usize;

/// Rate for Keccak-256 (in bytes)
pub const KECCAK256_RATE: usize = 136; // 1088 bits

/// Capacity for Keccak-256 (in bytes)
pub const KECCAK256_CAPACITY: usize = 64; // 512 bits

/// Digest length for Keccak-256 (in bytes)
pub const KECCAK256_DIGEST_LEN: usize = SpongeConfig::KECCAK_256.output_bytes();
