//! Keccak Constants
//!
//! Round constants and rotation offsets for Keccak-f[1600].

use super::ROUNDS;

/// Round constants (24 rounds), XORed into lane (0, 0) by ι
pub const KECCAK_RC: [u64; ROUNDS] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808a,
    0x8000000080008000, 0x000000000000808b, 0x0000000080000001,
    0x8000000080008081, 0x8000000000008009, 0x000000000000008a,
    0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
    0x000000008000808b, 0x800000000000008b, 0x8000000000008089,
    0x8000000000008003, 0x8000000000008002, 0x8000000000000080,
    0x000000000000800a, 0x800000008000000a, 0x8000000080008081,
    0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

/// Rotation offsets for ρ step
/// ROTATION_OFFSETS[y][x] gives the rotation for lane (x, y)
pub const ROTATION_OFFSETS: [[u32; 5]; 5] = [
    [ 0,  1, 62, 28, 27],
    [36, 44,  6, 55, 20],
    [ 3, 10, 43, 25, 39],
    [41, 45, 15, 21,  8],
    [18,  2, 61, 56, 14],
];

/// Get rotation offset for lane (x, y)
#[inline(always)]
pub fn rho_offset(x: usize, y: usize) -> u32 {
    ROTATION_OFFSETS[y][x]
}

/// π destination of lane (x, y): (y, 2x + 3y mod 5)
#[inline(always)]
pub const fn pi_target(x: usize, y: usize) -> (usize, usize) {
    (y, (2 * x + 3 * y) % 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_constants() {
        assert_eq!(KECCAK_RC.len(), 24);
        assert_eq!(KECCAK_RC[0], 1);
        assert_eq!(KECCAK_RC[23], 0x8000000080008008);
    }

    #[test]
    fn test_rho_offsets() {
        // Lane (0, 0) is never rotated
        assert_eq!(rho_offset(0, 0), 0);
        assert_eq!(rho_offset(1, 0), 1);
        assert_eq!(rho_offset(0, 1), 36);
        assert_eq!(rho_offset(4, 4), 14);
    }

    #[test]
    fn test_rho_offsets_distinct_mod_64() {
        let mut seen = [false; 64];
        for row in ROTATION_OFFSETS.iter() {
            for &r in row {
                assert!(r < 64);
                assert!(!seen[r as usize], "offset {} repeated", r);
                seen[r as usize] = true;
            }
        }
    }

    #[test]
    fn test_pi_is_bijection() {
        let mut hit = [[false; 5]; 5];
        for x in 0..5 {
            for y in 0..5 {
                let (nx, ny) = pi_target(x, y);
                assert!(!hit[nx][ny], "({}, {}) targeted twice", nx, ny);
                hit[nx][ny] = true;
            }
        }
        // (1, 0) -> (0, 2*1 + 3*0 mod 5) = (0, 2)
        assert_eq!(pi_target(1, 0), (0, 2));
    }
}
