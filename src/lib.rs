//! Shamir Secret Sharing for ASCII secrets over GF(257).
//!
//! Each byte of the secret gets its own random polynomial of degree `k − 1`
//! whose constant term is the byte. Participant `x` (1..=n) receives the
//! polynomial's value at `x` for every byte. Any `k` shares recover the
//! secret by Lagrange interpolation at zero; fewer reveal nothing about it.
//!
//! ```
//! use blob_sss::{decode_secret, encode_secret, validate, Share};
//!
//! let shares = encode_secret("Hi", 5, 3).unwrap();
//! let tokens: Vec<String> = shares.iter().map(Share::to_token).collect();
//!
//! let collected: Vec<Share> = tokens[1..4]
//!     .iter()
//!     .map(|t| Share::from_token(t).unwrap())
//!     .collect();
//! validate(&collected).unwrap();
//! assert_eq!(decode_secret(&collected).unwrap().as_str(), "Hi");
//! ```

pub mod error;
pub mod field;
pub mod poly;
pub mod secret;
pub mod share;
pub mod sss;
pub mod validate;

pub use error::{ArithmeticError, DecodingError, EncodingError, ParseShareError, ValidationError};
pub use secret::{decode_secret, encode_secret, encode_secret_with_rng, MAX_SHARES, MIN_SHARES};
pub use share::Share;
pub use sss::SharePoint;
pub use validate::validate;
