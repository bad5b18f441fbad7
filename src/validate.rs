//! Structural checks on a collected share set before recovery.
//!
//! Passing these checks does not mean recovery will succeed. The original
//! threshold `k` is not recorded in the shares, so a set with fewer than `k`
//! members cannot be told apart from a complete one, and shares from two
//! different splits that happen to use distinct indices look consistent.

use std::collections::HashSet;

use tracing::debug;

use crate::error::ValidationError;
use crate::secret::MIN_SHARES;
use crate::share::Share;

/// Check that `shares` has at least two members of equal length with
/// pairwise-distinct indices.
pub fn validate(shares: &[Share]) -> Result<(), ValidationError> {
    if shares.len() < MIN_SHARES as usize {
        debug!(count = shares.len(), "share set rejected: too few shares");
        return Err(ValidationError::TooFewShares {
            count: shares.len(),
        });
    }

    let len = shares[0].len();
    if shares.iter().any(|s| s.len() != len) {
        debug!("share set rejected: length mismatch");
        return Err(ValidationError::LengthMismatch);
    }

    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        if !seen.insert(share.x()) {
            debug!(x = share.x(), "share set rejected: duplicate index");
            return Err(ValidationError::DuplicateIndex { x: share.x() });
        }
    }

    Ok(())
}
