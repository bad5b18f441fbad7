//! Shamir Secret Sharing of a single byte over GF(257).
//!
//! - One fresh polynomial per byte; the secret byte is its constant term.
//! - Participants receive sequential indices `x = 1..=n`, never `x = 0`.
//! - Recovery is Lagrange interpolation at `x = 0`.

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::ArithmeticError;
use crate::field;
use crate::poly::Polynomial;

/// One evaluation `(x, y)` of a per-byte polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct SharePoint {
    pub x: u16,
    pub y: u16,
}

/// Split `byte` into `n` points, any `k` of which recover it.
///
/// The caller guarantees `1 <= k <= n <= 256`.
pub fn split_byte<R: RngCore + CryptoRng>(
    byte: u8,
    n: u16,
    k: u16,
    rng: &mut R,
) -> Vec<SharePoint> {
    debug_assert!(k >= 1 && k <= n && n < field::PRIME);
    let poly = Polynomial::build(byte, k, rng);
    (1..=n)
        .map(|x| SharePoint {
            x,
            y: poly.evaluate(x),
        })
        .collect()
}

/// Interpolate `points` at `x = 0`.
///
/// Every point takes part; nothing checks that there are at least `k` of
/// them. Too few points give a wrong value, not an error. Two points with
/// the same `x` make a denominator zero and fail.
pub fn recover_byte(points: &[SharePoint]) -> Result<u16, ArithmeticError> {
    let mut acc = 0u16;
    for (i, pi) in points.iter().enumerate() {
        let mut li = 1u16;
        for (j, pj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let num = field::sub(0, pj.x);
            let den = field::modinv(field::sub(pi.x, pj.x))?;
            li = field::mul(li, field::mul(num, den));
        }
        acc = field::add(acc, field::mul(pi.y, li));
    }
    Ok(acc)
}
