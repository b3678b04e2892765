//! Error types for classification.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

use crate::category::Category;
use crate::kind::Kind;

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unsupported type error from the printed form of the value.
    #[must_use]
    pub fn unsupported_type(repr: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedType(repr.into()))
    }

    /// Creates an unsupported kind error.
    #[must_use]
    pub fn unsupported_kind(kind: Kind) -> Self {
        Self::new(ErrorKind::UnsupportedKind(kind))
    }

    /// Creates an invalid category tag error.
    #[must_use]
    pub fn invalid_tag(tag: u8) -> Self {
        Self::new(ErrorKind::InvalidTag(tag))
    }

    /// The category paired with this error, always [`Category::Invalid`].
    #[must_use]
    pub const fn category(&self) -> Category {
        Category::Invalid
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The value carries no type information.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// The value's kind has no representation category.
    #[error("unsupported kind: {0}")]
    UnsupportedKind(Kind),

    /// Numeric tag does not name a category.
    #[error("invalid category tag: {0}")]
    InvalidTag(u8),
}
