//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The only request-level failure the point-of-sale flow recognizes is a
/// malformed ingestion payload. Transport and framework failures belong to
/// the adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A payload failed validation (not an object, or a field missing or falsy).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Shorthand for a required field that was absent or falsy.
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("`{field}` is required"))
    }
}
