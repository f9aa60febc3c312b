//! # Application Errors
//!
//! Error types for the shipping quote use case.
//!
//! # Error Hierarchy
//!
//! ```text
//! ShippingError
//! ├── AuthenticationFailed(CarrierError) - Carrier login failed
//! ├── EmptyCart                          - Cart has no line items
//! ├── Repository(RepositoryError)        - Cart lines could not be read
//! └── Internal(String)                   - Anything else
//! ```
//!
//! Per-shop carrier failures never surface here; they are folded into the
//! shop's quote and reported as [`PartialQuoteFailure`].
//!
//! # Examples
//!
//! ```
//! use shipping_quote::application::error::ShippingError;
//! use shipping_quote::domain::value_objects::CartId;
//!
//! let err = ShippingError::empty_cart(CartId::new_v4());
//! assert_eq!(err.code(), "EMPTY_CART");
//! ```

pub use crate::domain::entities::PartialQuoteFailure;
use crate::domain::value_objects::{ArithmeticError, CartId};
use crate::infrastructure::carrier::CarrierError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Error type for the shipping quote use case.
#[derive(Debug, Error)]
pub enum ShippingError {
    /// Carrier login failed; no shop can be quoted.
    #[error("carrier authentication failed: {0}")]
    AuthenticationFailed(CarrierError),

    /// The cart has no line items or does not exist.
    #[error("cart empty or not found")]
    EmptyCart {
        /// Cart that was empty.
        cart_id: CartId,
    },

    /// Cart lines could not be loaded.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Any other failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ShippingError {
    /// Creates an authentication failure.
    #[must_use]
    pub fn authentication_failed(source: CarrierError) -> Self {
        Self::AuthenticationFailed(source)
    }

    /// Creates an empty cart error.
    #[must_use]
    pub fn empty_cart(cart_id: CartId) -> Self {
        Self::EmptyCart { cart_id }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the stable machine-readable code for this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthenticationFailed(_) => "AUTHENTICATION_FAILED",
            Self::EmptyCart { .. } => "EMPTY_CART",
            Self::Repository(_) | Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ArithmeticError> for ShippingError {
    fn from(error: ArithmeticError) -> Self {
        Self::Internal(error.to_string())
    }
}

/// Result type for the shipping quote use case.
pub type ShippingResult<T> = Result<T, ShippingError>;
