//! # Identifiers
//!
//! Strongly typed identifiers for carts, seller shops and products.
//!
//! # Examples
//!
//! ```
//! use shipping_quote::domain::value_objects::ids::{CartId, ShopId};
//!
//! let cart = CartId::parse("7f1b6a52-3c39-4c8e-9d0f-2a5e6b1c4d11").unwrap();
//! assert_eq!(cart.to_string(), "7f1b6a52-3c39-4c8e-9d0f-2a5e6b1c4d11");
//!
//! let shop = ShopId::new("shop-a");
//! assert_eq!(shop.as_str(), "shop-a");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Shop id used for cart lines that carry no seller shop.
pub const FALLBACK_SHOP_ID: &str = "default";

/// Identifier of a shopping cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(Uuid);

impl CartId {
    /// Wraps an existing UUID.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generates a random cart id.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a cart id from its textual UUID form.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCartId`] if `raw` is not a UUID.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| DomainError::InvalidCartId(raw.to_string()))
    }

    /// Returns the inner UUID.
    #[inline]
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a seller shop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(String);

impl ShopId {
    /// Creates a shop id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a shop id from an optional column value.
    ///
    /// Missing or blank values map to [`FALLBACK_SHOP_ID`].
    #[must_use]
    pub fn or_fallback(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.trim().is_empty() => Self(id),
            _ => Self(FALLBACK_SHOP_ID.to_string()),
        }
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a product id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
