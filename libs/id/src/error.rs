//! Error types for building, parsing, and reading identifiers.

use thiserror::Error;

use crate::PropertyKind;

/// Errors that can occur when building or reading identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// `build()` was called before any property was added.
    #[error("identifier cannot be built without at least one property")]
    Unbuildable,

    /// A scalar (or other encoded form) does not describe an identifier.
    #[error("malformed scalar: {0}")]
    MalformedScalar(#[from] ScalarError),

    /// A property was read as a kind it does not hold.
    #[error("property '{name}' holds {actual}, not {expected}")]
    PropertyTypeMismatch {
        name: String,
        expected: PropertyKind,
        actual: PropertyKind,
    },
}

impl IdentifierError {
    /// Returns true if this error came from building without properties.
    pub fn is_unbuildable(&self) -> bool {
        matches!(self, IdentifierError::Unbuildable)
    }

    /// Returns true if this error indicates an unparseable encoded form.
    pub fn is_malformed(&self) -> bool {
        matches!(self, IdentifierError::MalformedScalar(_))
    }

    /// Returns true if this error indicates a property kind mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, IdentifierError::PropertyTypeMismatch { .. })
    }
}

/// Structural failures behind [`IdentifierError::MalformedScalar`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScalarError {
    /// The scalar contains a character outside the z-base32 alphabet.
    #[error(transparent)]
    Symbol(#[from] opaque_zbase32::DecodeError),

    /// The Base64 form could not be decoded.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not UTF-8 text.
    #[error("decoded text is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The canonical text has no `/` introducing the sector path.
    #[error("canonical text missing path separator")]
    MissingPath,

    /// A query pair has no `=` between name and value.
    #[error("property pair '{pair}' missing '=' separator")]
    MissingValue { pair: String },

    /// A `%` escape is truncated or not hexadecimal.
    #[error("invalid percent escape at offset {offset}")]
    InvalidEscape { offset: usize },

    /// The canonical text carries no properties.
    #[error("identifier has no properties")]
    NoProperties,
}
