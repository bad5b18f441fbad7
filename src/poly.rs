//! Random polynomials over GF(257) with a fixed constant term.

use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::field::{self, PRIME};

/// Coefficients `[a0, a1, …, a(k−1)]` of `a0 + a1·x + … + a(k−1)·x^(k−1)`.
///
/// `a0` is the secret byte, so the coefficients are wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Polynomial {
    coeffs: Vec<u16>,
}

impl Polynomial {
    /// Build a degree `k − 1` polynomial whose value at zero is `secret`.
    ///
    /// The remaining `k − 1` coefficients are drawn uniformly from the
    /// field. `k` must be at least 1.
    pub fn build<R: RngCore + CryptoRng>(secret: u8, k: u16, rng: &mut R) -> Self {
        debug_assert!(k >= 1, "threshold must be at least 1");
        let mut coeffs = Vec::with_capacity(k as usize);
        coeffs.push(secret as u16);
        for _ in 1..k {
            coeffs.push(random_element(rng));
        }
        Self { coeffs }
    }

    /// Wrap explicit coefficients, reducing each into the field.
    pub fn from_coefficients(coeffs: &[u16]) -> Self {
        Self {
            coeffs: coeffs.iter().map(|&c| c % PRIME).collect(),
        }
    }

    pub fn coefficients(&self) -> &[u16] {
        &self.coeffs
    }

    /// Evaluate at `x` using Horner's method.
    pub fn evaluate(&self, x: u16) -> u16 {
        self.coeffs
            .iter()
            .rev()
            .fold(0u16, |acc, &c| field::add(field::mul(acc, x), c))
    }
}

/// Uniform field element by rejection sampling 9-bit draws (no modulo bias).
fn random_element<R: RngCore + CryptoRng>(rng: &mut R) -> u16 {
    loop {
        let v = (rng.next_u32() >> 23) as u16;
        if v < PRIME {
            return v;
        }
    }
}
