//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Catalogue misses are not errors: resolvers report them as `Option::None`
/// and the ledger coerces them to defaults. The one exception is name-based
/// insertion, which surfaces [`DomainError::InvalidItemName`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item name has no catalogue entry.
    #[error("invalid item name: {0}")]
    InvalidItemName(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The record store rejected an operation.
    #[error("record store failure: {0}")]
    Store(String),
}

impl DomainError {
    pub fn invalid_item_name(name: impl Into<String>) -> Self {
        Self::InvalidItemName(name.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
