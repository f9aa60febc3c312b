//! # Domain Errors
//!
//! Validation failures raised while constructing domain values.

use thiserror::Error;

/// Error type for domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Cart identifier is not a well-formed UUID.
    #[error("invalid cart id: {0}")]
    InvalidCartId(String),

    /// Locality code is empty or malformed.
    #[error("invalid locality code: {0}")]
    InvalidLocalityCode(String),

    /// Monetary amount is negative.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

/// Result type for domain validation.
pub type DomainResult<T> = Result<T, DomainError>;
