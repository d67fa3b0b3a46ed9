//! Keccak Complete Round
//!
//! Combines θ, ρ, π, χ, ι steps into a single round and drives the
//! 24-round Keccak-f[1600] permutation.

use super::chi::chi;
use super::iota::iota;
use super::rho_pi::rho_pi;
use super::theta::theta;
use super::{Lanes, ROUNDS};

/// Apply one Keccak round
#[inline(always)]
fn keccak_round(a: &mut Lanes, round: usize) {
    theta(a);
    let b = rho_pi(a);
    *a = chi(&b);
    iota(a, round);
}

/// Apply all 24 rounds (Keccak-f[1600] permutation) in place
pub fn keccak_f(a: &mut Lanes) {
    for round in 0..ROUNDS {
        keccak_round(a, round);
    }
}

/// A fixed permutation over the 5x5 lane matrix, driven by the sponge.
pub trait Permutation {
    /// Permute the lanes in place.
    fn permute(lanes: &mut Lanes);
}

/// Keccak-f[1600] with 24 rounds
#[derive(Debug, Clone, Copy, Default)]
pub struct KeccakF1600;

impl Permutation for KeccakF1600 {
    #[inline]
    fn permute(lanes: &mut Lanes) {
        keccak_f(lanes);
    }
}
