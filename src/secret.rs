//! Byte-wise sharing of a whole ASCII secret.
//!
//! Participant `i` receives the `i`-th point of every byte's split, in byte
//! order, so each [`Share`] carries one `y` per secret byte.

use rand_core::{CryptoRng, OsRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{DecodingError, EncodingError};
use crate::field::PRIME;
use crate::share::Share;
use crate::sss::{self, SharePoint};

/// Smallest share count and threshold accepted by [`encode_secret`].
pub const MIN_SHARES: u16 = 2;

/// Largest share count: one index per non-zero field element.
pub const MAX_SHARES: u16 = PRIME - 1;

/// Split an ASCII `secret` into `n` shares with threshold `k`, using the OS
/// random number generator.
pub fn encode_secret(secret: &str, n: u16, k: u16) -> Result<Vec<Share>, EncodingError> {
    encode_secret_with_rng(secret, n, k, &mut OsRng)
}

/// [`encode_secret`] with an explicit generator.
pub fn encode_secret_with_rng<R: RngCore + CryptoRng>(
    secret: &str,
    n: u16,
    k: u16,
    rng: &mut R,
) -> Result<Vec<Share>, EncodingError> {
    if !(MIN_SHARES..=MAX_SHARES).contains(&n) {
        return Err(EncodingError::InvalidShareCount { n });
    }
    if !(MIN_SHARES..=n).contains(&k) {
        return Err(EncodingError::InvalidThreshold { k, n });
    }
    if secret.is_empty() {
        return Err(EncodingError::EmptySecret);
    }
    if let Some(position) = secret.bytes().position(|b| !b.is_ascii()) {
        return Err(EncodingError::NonAscii { position });
    }

    let mut shares: Vec<Share> = (1..=n)
        .map(|x| Share::with_capacity(x, secret.len()))
        .collect();
    for byte in secret.bytes() {
        for (share, point) in shares.iter_mut().zip(sss::split_byte(byte, n, k, rng)) {
            share.push(point.y);
        }
    }

    debug!(n, k, len = secret.len(), "split secret");
    Ok(shares)
}

/// Reconstruct the secret from `shares`.
///
/// Run [`validate`](crate::validate) first; this only rejects what would
/// make recovery impossible. Fewer than `k` shares are not detected unless
/// the garbage they produce happens to fall outside ASCII.
pub fn decode_secret(shares: &[Share]) -> Result<Zeroizing<String>, DecodingError> {
    let first = shares.first().ok_or(DecodingError::NoShares)?;
    let len = first.len();
    if let Some(other) = shares.iter().find(|s| s.len() != len) {
        return Err(DecodingError::LengthMismatch {
            expected: len,
            got: other.len(),
        });
    }

    let mut secret = Zeroizing::new(String::with_capacity(len));
    let mut points: Zeroizing<Vec<SharePoint>> =
        Zeroizing::new(Vec::with_capacity(shares.len()));
    for position in 0..len {
        points.clear();
        points.extend(shares.iter().map(|s| SharePoint {
            x: s.x(),
            y: s.y()[position],
        }));
        let value = sss::recover_byte(&points)
            .map_err(|source| DecodingError::Arithmetic { position, source })?;
        match u8::try_from(value) {
            Ok(b) if b.is_ascii() => secret.push(b as char),
            _ => return Err(DecodingError::NotAscii { position, value }),
        }
    }

    debug!(shares = shares.len(), len, "recovered secret");
    Ok(secret)
}
