//! Multi-Rate Padding
//!
//! Keccak-256 pads with `0x01 || 0x00* || 0x80`, collapsing to a single
//! `0x81` when only one byte is left in the block. FIPS 202 SHA3-256 uses
//! `0x06` instead of `0x01`, which is the only difference between the two.

/// Produces the bytes appended to the final partial block.
pub trait PaddingRule {
    /// Padding for a buffer holding `used_bytes` of an `align_bytes` block.
    ///
    /// `used_bytes + pad.len()` is always a non-zero multiple of `align_bytes`.
    fn pad(&self, used_bytes: usize, align_bytes: usize) -> Vec<u8>;
}

/// Keccak (pre-NIST) multi-rate padding, as used by Ethereum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiRatePadding;

impl MultiRatePadding {
    /// First padding byte
    pub const DELIM: u8 = 0x01;

    /// Bit set in the last byte of the padded block
    pub const END: u8 = 0x80;
}

impl PaddingRule for MultiRatePadding {
    fn pad(&self, used_bytes: usize, align_bytes: usize) -> Vec<u8> {
        assert!(
            used_bytes <= align_bytes,
            "buffer holds {} bytes, more than one {}-byte block",
            used_bytes,
            align_bytes
        );

        // A full buffer gets a whole block of padding
        let pad_len = match align_bytes - used_bytes {
            0 => align_bytes,
            n => n,
        };

        if pad_len == 1 {
            return vec![Self::DELIM | Self::END];
        }

        let mut pad = vec![0u8; pad_len];
        pad[0] = Self::DELIM;
        pad[pad_len - 1] = Self::END;
        pad
    }
}
