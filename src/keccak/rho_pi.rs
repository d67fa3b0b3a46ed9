//! Keccak ρ (Rho) and π (Pi) Steps
//!
//! ρ: Rotate each lane by fixed offset
//! π: Permute lane positions, (x, y) -> (y, 2x + 3y mod 5)
//!
//! Both are applied in one pass into a fresh matrix.

use super::constants::{pi_target, rho_offset};
use super::lane::rotate_left;
use super::Lanes;

/// Combined rho and pi steps
pub fn rho_pi(a: &Lanes) -> Lanes {
    let mut b: Lanes = [[0; 5]; 5];

    for x in 0..5 {
        for y in 0..5 {
            let (nx, ny) = pi_target(x, y);
            b[nx][ny] = rotate_left(a[x][y], rho_offset(x, y));
        }
    }

    b
}
