//! Lane Operations
//!
//! Stateless bit helpers shared by the permutation and the sponge state.

use super::{LANE_BITS, LANE_BYTES};

/// Rotate a 64-bit lane left by `amount` bits.
///
/// `amount` must be in `0..=64`; amounts of 0 and 64 return the lane unchanged.
#[inline(always)]
pub fn rotate_left(value: u64, amount: u32) -> u64 {
    debug_assert!(amount <= LANE_BITS, "rotation amount {} out of range", amount);
    value.rotate_left(amount)
}

/// Number of bytes needed to hold `bits` bits (ceiling division by 8)
#[inline]
pub const fn bits_to_bytes(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Read a lane from up to 8 little-endian bytes; missing high bytes are zero.
pub fn bytes_to_lane(bytes: &[u8]) -> u64 {
    assert!(
        bytes.len() <= LANE_BYTES,
        "lane holds {} bytes, got {}",
        LANE_BYTES,
        bytes.len()
    );
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Serialize a lane as 8 little-endian bytes
#[inline]
pub fn lane_to_bytes(lane: u64) -> [u8; LANE_BYTES] {
    lane.to_le_bytes()
}
