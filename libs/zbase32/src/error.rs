//! Error types for z-base32 decoding.

use thiserror::Error;

/// Errors that can occur when decoding z-base32 text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character outside the z-base32 alphabet.
    #[error("unknown z-base32 symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: char, position: usize },
}

impl DecodeError {
    /// Returns true if this error reports a symbol outside the alphabet.
    pub fn is_unknown_symbol(&self) -> bool {
        matches!(self, DecodeError::UnknownSymbol { .. })
    }

    /// Returns the character position the error refers to.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::UnknownSymbol { position, .. } => *position,
        }
    }
}
