//! Keccak ι (Iota) Step
//!
//! XOR round constant into lane[0][0]

use super::constants::KECCAK_RC;
use super::Lanes;

/// Apply iota step in place
#[inline(always)]
pub fn iota(a: &mut Lanes, round: usize) {
    a[0][0] ^= KECCAK_RC[round];
}
