//! Error types for splitting, recovering, parsing and validating shares.
//!
//! Each stage of the pipeline has its own enum so callers can tell an input
//! contract violation apart from a malformed token or an arithmetic failure.

use thiserror::Error;

/// Failures of GF(257) arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// `value` reduces to zero modulo the prime and has no inverse.
    #[error("{value} has no multiplicative inverse modulo 257")]
    NotInvertible { value: u16 },
}

/// Rejected arguments to [`encode_secret`](crate::encode_secret).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("secret is empty")]
    EmptySecret,

    /// The secret contains a character outside the ASCII range.
    #[error("secret is not ASCII (first offending character at byte {position})")]
    NonAscii { position: usize },

    #[error("share count {n} out of range (2-256)")]
    InvalidShareCount { n: u16 },

    #[error("threshold {k} out of range (2-{n})")]
    InvalidThreshold { k: u16, n: u16 },
}

/// Failures while reconstructing a secret from shares.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    #[error("no shares provided")]
    NoShares,

    #[error("shares have different lengths ({expected} vs {got} bytes)")]
    LengthMismatch { expected: usize, got: usize },

    #[error("interpolation failed at byte {position}: {source}")]
    Arithmetic {
        position: usize,
        #[source]
        source: ArithmeticError,
    },

    /// The interpolated value is not an ASCII byte, which usually means the
    /// shares came from different splits or there were fewer than `k`.
    #[error("recovered value {value} at byte {position} is not ASCII")]
    NotAscii { position: usize, value: u16 },
}

/// Reasons a `x:base64` token could not be parsed into a share.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseShareError {
    #[error("expected exactly one ':' separator")]
    MissingSeparator,

    #[error("share index {0:?} is not a decimal integer")]
    InvalidIndex(String),

    #[error("share index must be at least 1")]
    ZeroIndex,

    #[error("share index {0} is outside the field (max 256)")]
    IndexOutOfRange(u32),

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("share payload is empty")]
    EmptyPayload,

    #[error("share payload is {0} bytes, expected a multiple of 2")]
    OddPayload(usize),

    #[error("value {value} at position {position} is outside the field")]
    ValueOutOfRange { position: usize, value: u16 },
}

/// Structural defects in a collected share set.
///
/// The display strings are the human-readable reasons shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("At least 2 shares needed.")]
    TooFewShares { count: usize },

    #[error("Shares length mismatch.")]
    LengthMismatch,

    #[error("Duplicate share indices.")]
    DuplicateIndex { x: u16 },
}
