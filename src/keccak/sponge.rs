//! Sponge Construction
//!
//! Buffered absorb, padding of the final block, and squeeze over a
//! [`SpongeState`]. Finalizing is destructive, so callers that want to keep
//! absorbing finalize a clone instead.

use std::marker::PhantomData;

use tracing::trace;

use super::config::SpongeConfig;
use super::padding::{MultiRatePadding, PaddingRule};
use super::round::{KeccakF1600, Permutation};
use super::state::SpongeState;
use super::STATE_BYTES;
use crate::error::KeccakError;

/// Sponge over Keccak-f[1600] with padding rule `P` and permutation `F`
#[derive(Clone, Debug)]
pub struct Sponge<P = MultiRatePadding, F = KeccakF1600> {
    state: SpongeState,
    /// Pending input, always shorter than one rate block between calls
    buffer: Vec<u8>,
    /// Bytes produced by [`finalize`](Self::finalize)
    output_bytes: usize,
    padding: P,
    permutation: PhantomData<F>,
}

impl<P: PaddingRule, F: Permutation> Sponge<P, F> {
    /// Create an empty sponge with a rate of `rate_bytes`.
    ///
    /// The output length defaults to half the capacity, 32 bytes for the
    /// Keccak-256 rate.
    pub fn new(rate_bytes: usize, padding: P) -> Self {
        let output_bytes = STATE_BYTES.saturating_sub(rate_bytes) / 2;
        Self::with_output(rate_bytes, output_bytes, padding)
    }

    /// Create an empty sponge with an explicit output length
    pub fn with_output(rate_bytes: usize, output_bytes: usize, padding: P) -> Self {
        Sponge {
            state: SpongeState::new(rate_bytes),
            buffer: Vec::with_capacity(rate_bytes),
            output_bytes,
            padding,
            permutation: PhantomData,
        }
    }

    /// Create an empty sponge from validated parameters
    pub fn from_config(config: &SpongeConfig, padding: P) -> Result<Self, KeccakError> {
        config.validate()?;
        debug_assert_eq!(config.width_bits(), STATE_BYTES * 8);
        Ok(Self::with_output(
            config.rate_bytes(),
            config.output_bytes(),
            padding,
        ))
    }

    /// Rate in bytes
    pub fn rate_bytes(&self) -> usize {
        self.state.rate_bytes()
    }

    /// Output length in bytes
    pub fn output_bytes(&self) -> usize {
        self.output_bytes
    }

    /// Number of input bytes waiting for a full block
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Current permutation state
    pub fn state(&self) -> &SpongeState {
        &self.state
    }

    /// XOR exactly one rate block into the state and permute
    pub fn absorb_block(&mut self, block: &[u8]) {
        self.state.absorb(block);
        self.state.permute::<F>();
    }

    /// Absorb input. Can be called multiple times, including with empty input.
    pub fn absorb(&mut self, mut data: &[u8]) {
        let rate = self.rate_bytes();
        let mut blocks = 0usize;

        // Top up a partially filled buffer first
        if !self.buffer.is_empty() {
            let take = (rate - self.buffer.len()).min(data.len());
            self.buffer.extend_from_slice(&data[..take]);
            data = &data[take..];

            if self.buffer.len() < rate {
                return;
            }
            self.flush_buffer();
            blocks += 1;
        }

        // Full blocks straight from the input
        let mut chunks = data.chunks_exact(rate);
        for block in &mut chunks {
            self.absorb_block(block);
            blocks += 1;
        }
        self.buffer.extend_from_slice(chunks.remainder());

        if blocks > 0 {
            trace!(blocks, buffered = self.buffer.len(), "absorbed rate blocks");
        }
    }

    /// Pad the buffered tail into one last block and absorb it.
    ///
    /// The sponge is not meant to absorb more input afterwards.
    pub fn absorb_final(&mut self) {
        let rate = self.rate_bytes();
        let pad = self.padding.pad(self.buffer.len(), rate);
        trace!(buffered = self.buffer.len(), pad_len = pad.len(), "absorbing final block");

        self.buffer.extend_from_slice(&pad);
        assert_eq!(
            self.buffer.len(),
            rate,
            "padding must complete exactly one {}-byte block",
            rate
        );
        self.flush_buffer();
    }

    /// Pad, absorb and squeeze [`output_bytes`](Self::output_bytes) bytes
    pub fn finalize(&mut self) -> Vec<u8> {
        self.absorb_final();
        self.squeeze(self.output_bytes)
    }

    /// Absorb the full buffer as one block, keeping its allocation
    fn flush_buffer(&mut self) {
        let mut block = std::mem::take(&mut self.buffer);
        self.absorb_block(&block);
        block.clear();
        self.buffer = block;
    }

    /// Read one rate block of output, then permute
    pub fn squeeze_once(&mut self) -> Vec<u8> {
        let block = self.state.squeeze();
        self.state.permute::<F>();
        block
    }

    /// Fill `output` with squeezed bytes
    pub fn squeeze_into(&mut self, output: &mut [u8]) {
        let rate = self.rate_bytes();
        for chunk in output.chunks_mut(rate) {
            let block = self.squeeze_once();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
        trace!(len = output.len(), blocks = output.len().div_ceil(rate), "squeezed");
    }

    /// Squeeze exactly `length` bytes
    pub fn squeeze(&mut self, length: usize) -> Vec<u8> {
        let mut output = vec![0u8; length];
        self.squeeze_into(&mut output);
        output
    }
}
