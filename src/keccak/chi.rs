//! Keccak χ (Chi) Step
//!
//! Non-linear mixing: A'[x,y] = B[x,y] XOR ((NOT B[x+1,y]) AND B[x+2,y])

use super::Lanes;

/// Apply chi step to the rho/pi output `b`
pub fn chi(b: &Lanes) -> Lanes {
    let mut a: Lanes = [[0; 5]; 5];

    for y in 0..5 {
        for x in 0..5 {
            a[x][y] = b[x][y] ^ (!b[(x + 1) % 5][y] & b[(x + 2) % 5][y]);
        }
    }

    a
}
