//! # Repository Traits
//!
//! Port definitions for reading cart data.
//!
//! The shipping service owns no tables; it only reads the marketplace's
//! cart items joined with products and seller shops.
//!
//! # Examples
//!
//! ```ignore
//! use shipping_quote::infrastructure::persistence::traits::CartLineRepository;
//!
//! async fn units(repo: &impl CartLineRepository, cart_id: &CartId) -> u32 {
//!     let lines = repo.find_by_cart(cart_id).await.unwrap_or_default();
//!     lines.iter().map(|l| l.quantity).sum()
//! }
//! ```

use crate::domain::entities::CartLine;
use crate::domain::value_objects::CartId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),

    /// A row could not be mapped onto a domain value.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Connection(error.to_string())
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                Self::Serialization(error.to_string())
            }
            other => Self::Query(other.to_string()),
        }
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read access to cart lines.
#[async_trait]
pub trait CartLineRepository: Send + Sync + fmt::Debug {
    /// Loads every line of a cart with product and seller shop data.
    ///
    /// Returns an empty vector for unknown carts.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    async fn find_by_cart(&self, cart_id: &CartId) -> RepositoryResult<Vec<CartLine>>;
}
