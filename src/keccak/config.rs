//! Sponge Parameters
//!
//! Rate, capacity and output length of a Keccak-f[1600] sponge. The padding
//! rule is chosen by the sponge's type parameter.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lane::bits_to_bytes;
use super::STATE_BYTES;
use crate::error::KeccakError;

/// Rate, capacity and output length, in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpongeConfig {
    /// Bits absorbed / squeezed per permutation call
    pub rate_bits: usize,
    /// Bits never exposed directly
    pub capacity_bits: usize,
    /// Digest length
    pub output_bits: usize,
}

impl SpongeConfig {
    /// Keccak-256: rate 1088, capacity 512, 256-bit digest
    pub const KECCAK_256: SpongeConfig = SpongeConfig {
        rate_bits: 1088,
        capacity_bits: 512,
        output_bits: 256,
    };

    /// Build and validate a configuration
    pub fn new(
        rate_bits: usize,
        capacity_bits: usize,
        output_bits: usize,
    ) -> Result<Self, KeccakError> {
        let config = SpongeConfig {
            rate_bits,
            capacity_bits,
            output_bits,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the parameters against the 1600-bit permutation
    pub fn validate(&self) -> Result<(), KeccakError> {
        let result = self.check();
        if let Err(err) = &result {
            debug!(config = ?self, %err, "rejected sponge config");
        }
        result
    }

    fn check(&self) -> Result<(), KeccakError> {
        let &SpongeConfig {
            rate_bits,
            capacity_bits,
            output_bits,
        } = self;

        if rate_bits == 0 || capacity_bits == 0 {
            return Err(KeccakError::EmptyRegion {
                rate_bits,
                capacity_bits,
            });
        }
        if rate_bits + capacity_bits != STATE_BYTES * 8 {
            return Err(KeccakError::InvalidWidth {
                rate_bits,
                capacity_bits,
            });
        }
        if rate_bits % 8 != 0 {
            return Err(KeccakError::RateNotByteAligned { rate_bits });
        }
        if output_bits == 0 || output_bits % 8 != 0 {
            return Err(KeccakError::InvalidOutputLength { output_bits });
        }
        Ok(())
    }

    /// Rate in bytes
    pub const fn rate_bytes(&self) -> usize {
        bits_to_bytes(self.rate_bits)
    }

    /// Permutation width in bits
    pub const fn width_bits(&self) -> usize {
        self.rate_bits + self.capacity_bits
    }

    /// Digest length in bytes
    pub const fn output_bytes(&self) -> usize {
        bits_to_bytes(self.output_bits)
    }
}

impl Default for SpongeConfig {
    fn default() -> Self {
        Self::KECCAK_256
    }
}
