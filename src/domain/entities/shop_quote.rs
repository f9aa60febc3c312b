//! # Shipping Quotes
//!
//! Per-shop carrier quotes and the cart-level aggregate built from them.

use crate::domain::value_objects::{ArithmeticResult, CartId, LocalityCode, Money, ShopId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shipping cost for one seller shop.
///
/// Always carries a usable cost; when the carrier could not quote, the
/// cost is the fallback rate and `error` says why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopQuote {
    /// Seller shop id.
    pub shop_id: ShopId,
    /// Seller shop display name.
    pub shop_name: String,
    /// Locality the parcels ship from.
    pub origin_city: LocalityCode,
    /// Locality the parcels ship to.
    pub destination_city: LocalityCode,
    /// Shipping cost in whole currency units.
    pub shipping_cost: Money,
    /// Estimated delivery time in days.
    pub estimated_days: u32,
    /// Why the carrier quote was not used, if it was not.
    pub error: Option<String>,
    /// Carrier response body, or `{"error": ...}` when the call failed.
    pub raw_response: Option<serde_json::Value>,
}

impl ShopQuote {
    /// Returns true if the quote came straight from the carrier.
    #[must_use]
    pub fn is_carrier_quoted(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the failure recorded for this shop, if any.
    #[must_use]
    pub fn failure(&self) -> Option<PartialQuoteFailure> {
        self.error.as_ref().map(|detail| PartialQuoteFailure {
            shop_id: self.shop_id.clone(),
            detail: detail.clone(),
        })
    }
}

/// A shop whose carrier quote was replaced by the fallback rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialQuoteFailure {
    /// Shop that fell back.
    pub shop_id: ShopId,
    /// What went wrong.
    pub detail: String,
}

impl fmt::Display for PartialQuoteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quote unavailable for shop {}: {}", self.shop_id, self.detail)
    }
}

/// Shipping quotes for every seller shop in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartShippingQuote {
    cart_id: CartId,
    destination: LocalityCode,
    quotes: Vec<ShopQuote>,
    total_shipping: Money,
}

impl CartShippingQuote {
    /// Builds the aggregate, summing the per-shop costs.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error if the total overflows.
    pub fn new(
        cart_id: CartId,
        destination: LocalityCode,
        quotes: Vec<ShopQuote>,
    ) -> ArithmeticResult<Self> {
        let total_shipping = Money::checked_sum(quotes.iter().map(|q| q.shipping_cost))?;
        Ok(Self {
            cart_id,
            destination,
            quotes,
            total_shipping,
        })
    }

    /// Cart that was quoted.
    #[inline]
    #[must_use]
    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }

    /// Destination locality.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &LocalityCode {
        &self.destination
    }

    /// Per-shop quotes, in the order shops first appear in the cart.
    #[inline]
    #[must_use]
    pub fn quotes(&self) -> &[ShopQuote] {
        &self.quotes
    }

    /// Sum of all per-shop shipping costs.
    #[inline]
    #[must_use]
    pub fn total_shipping(&self) -> Money {
        self.total_shipping
    }

    /// Shops that fell back to the default rate.
    #[must_use]
    pub fn partial_failures(&self) -> Vec<PartialQuoteFailure> {
        self.quotes.iter().filter_map(ShopQuote::failure).collect()
    }

    /// Returns true if every shop was quoted by the carrier.
    #[must_use]
    pub fn is_fully_quoted(&self) -> bool {
        self.quotes.iter().all(ShopQuote::is_carrier_quoted)
    }

    /// Consumes the aggregate, returning its quotes.
    #[must_use]
    pub fn into_quotes(self) -> Vec<ShopQuote> {
        self.quotes
    }
}
