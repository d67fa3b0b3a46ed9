//! Keccak θ (Theta) Step
//!
//! XOR each lane with parity of columns.

use super::lane::rotate_left;
use super::Lanes;

/// Compute column parity C[x] = A[x,0] XOR A[x,1] XOR A[x,2] XOR A[x,3] XOR A[x,4]
#[inline(always)]
fn column_parity(a: &Lanes) -> [u64; 5] {
    let mut c = [0u64; 5];
    for (cx, column) in c.iter_mut().zip(a.iter()) {
        *cx = column.iter().fold(0, |acc, lane| acc ^ lane);
    }
    c
}

/// Apply theta step in place: A[x,y] ^= C[x-1] XOR ROT1(C[x+1])
pub fn theta(a: &mut Lanes) {
    let c = column_parity(a);

    for (x, column) in a.iter_mut().enumerate() {
        let d = c[(x + 4) % 5] ^ rotate_left(c[(x + 1) % 5], 1);
        for lane in column.iter_mut() {
            *lane ^= d;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theta_zero_state() {
        let mut a: Lanes = [[0; 5]; 5];
        theta(&mut a);

        // Theta of zero state is zero
        assert_eq!(a, [[0; 5]; 5]);
    }

    #[test]
    fn test_theta_single_bit() {
        let mut a: Lanes = [[0; 5]; 5];
        a[0][0] = 1;
        theta(&mut a);

        // C[0] = 1 spreads to column 1 unrotated and to column 4 rotated by one
        assert_eq!(a[0], [1, 0, 0, 0, 0]);
        assert_eq!(a[1], [1; 5]);
        assert_eq!(a[2], [0; 5]);
        assert_eq!(a[3], [0; 5]);
        assert_eq!(a[4], [2; 5]);
    }

    #[test]
    fn test_theta_even_column_cancels() {
        // Two equal lanes in one column give zero parity, so nothing spreads
        let mut a: Lanes = [[0; 5]; 5];
        a[2][1] = 0x123456789ABCDEF0;
        a[2][3] = 0x123456789ABCDEF0;
        let before = a;
        theta(&mut a);
        assert_eq!(a, before);
    }

    #[test]
    fn test_column_parity() {
        let mut a: Lanes = [[0; 5]; 5];
        a[3] = [1, 2, 4, 8, 16];
        assert_eq!(column_parity(&a), [0, 0, 0, 31, 0]);
    }
}
