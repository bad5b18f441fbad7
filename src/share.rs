//! Share representation and its text token.
//!
//! ## Token format
//!
//! ```text
//! <x>:<base64(y_1 ‖ y_2 ‖ … ‖ y_m)>
//! ```
//!
//! | Field   | Encoding                                              |
//! |---------|-------------------------------------------------------|
//! | x       | decimal participant index, 1–256                      |
//! | y_i     | field element for secret byte `i`, u16 big-endian     |
//! | payload | standard base64 with padding                          |
//!
//! Two bytes per value are needed because `y` can be 256.
//!
//! Example: `1:AFIAXA==` is participant 1 holding `y = [82, 92]`.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::ParseShareError;
use crate::field::PRIME;
use crate::sss::SharePoint;

/// Bytes per encoded `y` value.
const Y_WIDTH: usize = 2;

/// Everything one participant holds: their index and one `y` per secret byte.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Share {
    x: u16,
    y: Vec<u16>,
}

impl Share {
    /// Build a share from raw parts.
    ///
    /// No range checks: `x` should be in `1..=256` and every `y` below 257.
    pub fn new(x: u16, y: Vec<u16>) -> Self {
        Self { x, y }
    }

    pub(crate) fn with_capacity(x: u16, len: usize) -> Self {
        Self {
            x,
            y: Vec::with_capacity(len),
        }
    }

    pub(crate) fn push(&mut self, y: u16) {
        self.y.push(y);
    }

    /// Participant index.
    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn y(&self) -> &[u16] {
        &self.y
    }

    /// Number of secret bytes covered.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// The share as `(x, y)` points in byte order.
    pub fn points(&self) -> impl Iterator<Item = SharePoint> + '_ {
        self.y.iter().map(move |&y| SharePoint { x: self.x, y })
    }

    /// Encode as `x:base64`.
    pub fn to_token(&self) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(self.y.len() * Y_WIDTH));
        for y in &self.y {
            payload.extend_from_slice(&y.to_be_bytes());
        }
        format!("{}:{}", self.x, B64.encode(payload.as_slice()))
    }

    /// Parse an `x:base64` token. Surrounding whitespace is ignored.
    pub fn from_token(token: &str) -> Result<Self, ParseShareError> {
        let mut parts = token.trim().split(':');
        let (Some(x_str), Some(payload), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseShareError::MissingSeparator);
        };

        let x = parse_index(x_str)?;

        let bytes = Zeroizing::new(B64.decode(payload)?);
        if bytes.is_empty() {
            return Err(ParseShareError::EmptyPayload);
        }
        if bytes.len() % Y_WIDTH != 0 {
            return Err(ParseShareError::OddPayload(bytes.len()));
        }

        let mut y = Vec::with_capacity(bytes.len() / Y_WIDTH);
        for (position, chunk) in bytes.chunks_exact(Y_WIDTH).enumerate() {
            let value = u16::from_be_bytes([chunk[0], chunk[1]]);
            if value >= PRIME {
                y.zeroize();
                return Err(ParseShareError::ValueOutOfRange { position, value });
            }
            y.push(value);
        }

        Ok(Self { x, y })
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_token())
    }
}

impl FromStr for Share {
    type Err = ParseShareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

// y values are share material; keep them out of logs.
impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("x", &self.x)
            .field("len", &self.y.len())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse the decimal index before the separator into `1..PRIME`.
fn parse_index(s: &str) -> Result<u16, ParseShareError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseShareError::InvalidIndex(s.to_string()));
    }
    let x: u32 = s
        .parse()
        .map_err(|_| ParseShareError::InvalidIndex(s.to_string()))?;
    if x == 0 {
        return Err(ParseShareError::ZeroIndex);
    }
    if x >= PRIME as u32 {
        return Err(ParseShareError::IndexOutOfRange(x));
    }
    Ok(x as u16)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
