//! Arithmetic in the prime field GF(257).
//!
//! 257 is the smallest prime above 256, so every byte value is a field
//! element and no wider field is ever needed. Elements are stored as `u16`
//! and widened to `u32` for multiplication (256 × 256 fits easily).

use crate::error::ArithmeticError;

/// The field modulus.
pub const PRIME: u16 = 257;

/// Reduce an arbitrary integer into `[0, PRIME)`.
#[inline]
pub fn reduce(v: i64) -> u16 {
    v.rem_euclid(PRIME as i64) as u16
}

#[inline]
pub fn add(a: u16, b: u16) -> u16 {
    ((a as u32 + b as u32) % PRIME as u32) as u16
}

#[inline]
pub fn sub(a: u16, b: u16) -> u16 {
    ((a as u32 + PRIME as u32 - (b % PRIME) as u32) % PRIME as u32) as u16
}

#[inline]
pub fn mul(a: u16, b: u16) -> u16 {
    ((a as u32 * b as u32) % PRIME as u32) as u16
}

/// `base^exp mod PRIME` by square-and-multiply.
pub fn pow_mod(base: u16, mut exp: u32) -> u16 {
    let mut acc = 1u16;
    let mut b = base % PRIME;
    while exp > 0 {
        if exp & 1 != 0 {
            acc = mul(acc, b);
        }
        b = mul(b, b);
        exp >>= 1;
    }
    acc
}

/// Multiplicative inverse via Fermat's little theorem: `a^(p − 2)`.
///
/// Fails when `a ≡ 0 (mod p)`.
pub fn modinv(a: u16) -> Result<u16, ArithmeticError> {
    if a % PRIME == 0 {
        return Err(ArithmeticError::NotInvertible { value: a });
    }
    Ok(pow_mod(a, PRIME as u32 - 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_roundtrip_for_every_nonzero_element() {
        for a in 1..PRIME {
            let inv = modinv(a).unwrap();
            assert!((1..PRIME).contains(&inv));
            assert_eq!(mul(a, inv), 1, "modinv failed for {a}");
        }
    }

    #[test]
    fn zero_has_no_inverse() {
        assert_eq!(modinv(0), Err(ArithmeticError::NotInvertible { value: 0 }));
        assert_eq!(
            modinv(PRIME),
            Err(ArithmeticError::NotInvertible { value: PRIME })
        );
    }

    #[test]
    fn pow_mod_small_cases() {
        assert_eq!(pow_mod(0, 0), 1);
        assert_eq!(pow_mod(2, 8), 256);
        assert_eq!(pow_mod(2, 9), 255); // 512 − 257
        assert_eq!(pow_mod(3, 256), 1); // Fermat
        assert_eq!(pow_mod(256, 2), 1); // 256 ≡ −1
    }

    #[test]
    fn reduce_handles_negatives() {
        assert_eq!(reduce(-1), 256);
        assert_eq!(reduce(-257), 0);
        assert_eq!(reduce(514), 0);
        assert_eq!(reduce(300), 43);
    }

    #[test]
    fn sub_wraps() {
        assert_eq!(sub(0, 1), 256);
        assert_eq!(sub(5, 5), 0);
        assert_eq!(add(sub(3, 10), 10), 3);
    }
}
