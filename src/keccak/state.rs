//! Keccak Sponge State
//!
//! The 1600-bit state as a 5x5 matrix of 64-bit lanes, split into a rate
//! prefix that is exchanged with the outside world and a capacity suffix
//! that only the permutation touches.
//!
//! Byte ordering: bytes[8*(5*y + x) .. 8*(5*y + x) + 8] = Lane[x][y], little-endian.

use super::lane::{bytes_to_lane, lane_to_bytes};
use super::round::Permutation;
use super::{Lanes, LANE_BYTES, STATE_BYTES};

/// Keccak state plus the size of its rate region
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpongeState {
    lanes: Lanes,
    rate_bytes: usize,
}

impl SpongeState {
    /// Zero state with a rate of `rate_bytes` bytes
    pub fn new(rate_bytes: usize) -> Self {
        assert!(
            rate_bytes > 0 && rate_bytes < STATE_BYTES,
            "rate must be between 1 and {} bytes, got {}",
            STATE_BYTES - 1,
            rate_bytes
        );
        SpongeState {
            lanes: [[0; 5]; 5],
            rate_bytes,
        }
    }

    /// Rate in bytes
    pub fn rate_bytes(&self) -> usize {
        self.rate_bytes
    }

    /// Capacity in bytes
    pub fn capacity_bytes(&self) -> usize {
        STATE_BYTES - self.rate_bytes
    }

    /// Lane matrix, indexed `[x][y]`
    pub fn lanes(&self) -> &Lanes {
        &self.lanes
    }

    /// Get lane (x, y)
    pub fn lane(&self, x: usize, y: usize) -> u64 {
        self.lanes[x][y]
    }

    /// Set lane (x, y)
    pub fn set_lane(&mut self, x: usize, y: usize, value: u64) {
        self.lanes[x][y] = value;
    }

    /// Get lane offset in byte serialization
    pub fn lane_offset(x: usize, y: usize) -> usize {
        LANE_BYTES * (5 * y + x)
    }

    /// Run permutation `P` over the whole state
    pub fn permute<P: Permutation>(&mut self) {
        P::permute(&mut self.lanes);
    }

    /// XOR one rate-sized block into the state.
    ///
    /// The block is zero-extended over the capacity, so capacity lanes are
    /// left unchanged.
    pub fn absorb(&mut self, block: &[u8]) {
        assert_eq!(
            block.len(),
            self.rate_bytes,
            "absorbed block must be exactly one rate ({} bytes)",
            self.rate_bytes
        );

        for (i, chunk) in block.chunks(LANE_BYTES).enumerate() {
            // i = 5*y + x: rows outer, columns inner
            self.lanes[i % 5][i / 5] ^= bytes_to_lane(chunk);
        }
    }

    /// Rate prefix of the serialized state
    pub fn squeeze(&self) -> Vec<u8> {
        self.to_bytes()[..self.rate_bytes].to_vec()
    }

    /// Serialize the full state (rate and capacity)
    pub fn to_bytes(&self) -> [u8; STATE_BYTES] {
        let mut out = [0u8; STATE_BYTES];
        for y in 0..5 {
            for x in 0..5 {
                let offset = Self::lane_offset(x, y);
                out[offset..offset + LANE_BYTES]
                    .copy_from_slice(&lane_to_bytes(self.lanes[x][y]));
            }
        }
        out
    }

    /// Overwrite the full state from its serialization
    pub fn set_bytes(&mut self, bytes: &[u8; STATE_BYTES]) {
        for y in 0..5 {
            for x in 0..5 {
                let offset = Self::lane_offset(x, y);
                self.lanes[x][y] = bytes_to_lane(&bytes[offset..offset + LANE_BYTES]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keccak::KECCAK256_RATE;

    #[test]
    fn test_zero_state() {
        let state = SpongeState::new(KECCAK256_RATE);
        assert_eq!(state.to_bytes(), [0u8; STATE_BYTES]);
        assert_eq!(state.capacity_bytes(), 64);
    }

    #[test]
    fn test_lane_access() {
        let mut state = SpongeState::new(KECCAK256_RATE);

        // Set lane (1, 2) to some value
        state.set_lane(1, 2, 0x123456789ABCDEF0);

        // Read back
        assert_eq!(state.lane(1, 2), 0x123456789ABCDEF0);

        // Other lanes should be zero
        assert_eq!(state.lane(0, 0), 0);
        assert_eq!(state.lane(2, 1), 0);
    }

    #[test]
    fn test_byte_order_is_row_major() {
        let mut state = SpongeState::new(KECCAK256_RATE);
        state.set_lane(1, 0, 0x0807060504030201);
        state.set_lane(0, 1, 0xFF);

        let bytes = state.to_bytes();
        // (1, 0) is the second lane
        assert_eq!(&bytes[8..16], &[1, 2, 3, 4, 5, 6, 7, 8]);
        // (0, 1) is the sixth lane, not the second
        assert_eq!(bytes[40], 0xFF);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut input = [0u8; STATE_BYTES];
        for (i, b) in input.iter_mut().enumerate() {
            *b = (i % 256) as u8;
        }

        let mut state = SpongeState::new(KECCAK256_RATE);
        state.set_bytes(&input);
        assert_eq!(state.to_bytes(), input);
        assert_eq!(state.lane(0, 0), 0x0706050403020100);
    }

    #[test]
    fn test_absorb_xors_rate_only() {
        let mut state = SpongeState::new(KECCAK256_RATE);
        let mut capacity = [0u8; STATE_BYTES];
        capacity[KECCAK256_RATE..].fill(0x5A);
        state.set_bytes(&capacity);

        let block = [0xFFu8; KECCAK256_RATE];
        state.absorb(&block);
        state.absorb(&block);
        let bytes = state.to_bytes();

        // XOR twice cancels, capacity never touched
        assert_eq!(bytes, capacity);

        state.absorb(&block);
        assert!(state.to_bytes()[..KECCAK256_RATE].iter().all(|&b| b == 0xFF));
        assert!(state.to_bytes()[KECCAK256_RATE..].iter().all(|&b| b == 0x5A));
    }

    #[test]
    fn test_squeeze_returns_rate_prefix() {
        let mut input = [0u8; STATE_BYTES];
        for (i, b) in input.iter_mut().enumerate() {
            *b = i as u8;
        }
        let mut state = SpongeState::new(KECCAK256_RATE);
        state.set_bytes(&input);

        assert_eq!(state.squeeze(), input[..KECCAK256_RATE].to_vec());
    }

    #[test]
    fn test_unaligned_rate() {
        // A rate that ends mid-lane still maps bytes in order
        let mut state = SpongeState::new(12);
        state.absorb(&[1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0]);
        assert_eq!(state.lane(0, 0), 1);
        assert_eq!(state.lane(1, 0), 2);
        assert_eq!(state.squeeze(), vec![1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "exactly one rate")]
    fn test_absorb_wrong_length() {
        let mut state = SpongeState::new(KECCAK256_RATE);
        state.absorb(&[0u8; KECCAK256_RATE - 1]);
    }

    #[test]
    #[should_panic(expected = "rate must be between")]
    fn test_rate_covering_whole_state() {
        SpongeState::new(STATE_BYTES);
    }
}
