//! Error Types
//!
//! Hashing itself is total: any byte sequence can be absorbed and digested.
//! The only fallible operations are building a sponge from a custom
//! [`SpongeConfig`](crate::SpongeConfig) and parsing a hex digest back into
//! bytes.

/// Errors raised while configuring a sponge or decoding a digest.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KeccakError {
    /// The rate does not cover a whole number of bytes.
    #[error("rate of {rate_bits} bits is not a multiple of 8")]
    RateNotByteAligned {
        /// Requested rate in bits.
        rate_bits: usize,
    },
    /// Rate and capacity do not add up to the 1600-bit permutation width.
    #[error("rate ({rate_bits}) + capacity ({capacity_bits}) must equal 1600 bits")]
    InvalidWidth {
        /// Requested rate in bits.
        rate_bits: usize,
        /// Requested capacity in bits.
        capacity_bits: usize,
    },
    /// Either the rate or the capacity region would be empty.
    #[error("rate ({rate_bits}) and capacity ({capacity_bits}) must both be non-zero")]
    EmptyRegion {
        /// Requested rate in bits.
        rate_bits: usize,
        /// Requested capacity in bits.
        capacity_bits: usize,
    },
    /// The output length is zero or not a whole number of bytes.
    #[error("output length of {output_bits} bits must be a positive multiple of 8")]
    InvalidOutputLength {
        /// Requested output length in bits.
        output_bits: usize,
    },
    /// The digest string is not valid hexadecimal.
    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    /// The decoded digest has the wrong number of bytes.
    #[error("digest must be {expected} bytes, got {actual}")]
    InvalidDigestLength {
        /// Expected digest length in bytes.
        expected: usize,
        /// Decoded length in bytes.
        actual: usize,
    },
}
