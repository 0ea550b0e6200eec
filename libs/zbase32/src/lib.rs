//! # opaque-zbase32
//!
//! Human-oriented base-32 encoding (z-base32) for opaque identifiers.
//!
//! The alphabet orders symbols so the most easily distinguished characters
//! carry the most common bit patterns:
//!
//! ```text
//! ybndrfg8ejkmcpqxot1uwisza345h769
//! ```
//!
//! Input bytes are packed MSB-first into 5-bit symbols. `N` bytes encode to
//! `ceil(8 * N / 5)` symbols and `M` symbols decode to `floor(5 * M / 8)`
//! bytes; the padding bits of a final partial symbol never surface as an
//! extra byte.
//!
//! ```
//! let encoded = opaque_zbase32::encode("hello");
//! assert_eq!(encoded, "pb1sa5dx");
//! assert_eq!(opaque_zbase32::decode(&encoded).unwrap(), b"hello");
//! ```

mod codec;
mod error;

pub use codec::{decode, decoded_len, encode, encoded_len, ALPHABET};
pub use error::DecodeError;
