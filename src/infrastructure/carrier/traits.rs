//! # Carrier Adapter Trait
//!
//! Port definition for shipping carrier integrations.
//!
//! A carrier quote is a two-step exchange: authenticate once to obtain a
//! [`CarrierSession`], then request one quote per shipment with it.

use crate::domain::entities::{Piece, ShopGroup};
use crate::domain::value_objects::{LocalityCode, Money, ShopId};
use crate::infrastructure::carrier::error::CarrierResult;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// Authenticated carrier session.
#[derive(Clone, PartialEq, Eq)]
pub struct CarrierSession {
    token: String,
}

impl CarrierSession {
    /// Wraps a bearer token returned by the carrier login.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Returns the bearer token.
    #[inline]
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for CarrierSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarrierSession")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// One shipment to quote: a shop's parcels from its origin to the buyer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentQuoteRequest {
    /// Shop shipping the parcels.
    pub shop_id: ShopId,
    /// Origin locality.
    pub origin: LocalityCode,
    /// Destination locality.
    pub destination: LocalityCode,
    /// Parcels, one per unit.
    pub pieces: Vec<Piece>,
    /// Insured value.
    pub declared_value: Money,
}

impl ShipmentQuoteRequest {
    /// Builds the request for a shop group.
    #[must_use]
    pub fn for_group(group: &ShopGroup, destination: &LocalityCode) -> Self {
        Self {
            shop_id: group.shop_id().clone(),
            origin: group.origin().clone(),
            destination: destination.clone(),
            pieces: group.pieces().to_vec(),
            declared_value: group.declared_value(),
        }
    }

    /// Number of parcels.
    #[inline]
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }
}

/// What the carrier answered to a quote request.
#[derive(Debug, Clone, PartialEq)]
pub struct CarrierQuote {
    /// Shipping cost, if the response carried a usable one.
    pub shipping_cost: Option<Money>,
    /// Delivery estimate in days, if present.
    pub estimated_days: Option<u32>,
    /// Response body as received.
    pub raw_response: Value,
}

/// Port for shipping carrier integrations.
#[async_trait]
pub trait CarrierAdapter: Send + Sync + fmt::Debug {
    /// Returns the carrier name used in logs.
    fn carrier_name(&self) -> &'static str;

    /// Logs in with the configured credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the login call fails or yields no token.
    async fn authenticate(&self) -> CarrierResult<CarrierSession>;

    /// Requests a quote for one shipment.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response is unreadable.
    async fn request_quote(
        &self,
        session: &CarrierSession,
        request: &ShipmentQuoteRequest,
    ) -> CarrierResult<CarrierQuote>;
}
