//! # REST DTOs
//!
//! Request and response bodies of the REST API.
//!
//! Field names follow the storefront client's wire format, which mixes
//! snake_case (`cart_id`) and camelCase (`idCityDestino`, `totalShipping`).
//! Money is serialized as a JSON number (an IEEE-754 double), which is
//! what the storefront reads. Amounts are exact `Decimal`s on the server
//! and `totalShipping` is their exact sum, rounded to a double only when
//! written. Clients should display `totalShipping` instead of adding the
//! per-shop `shippingCost` values themselves.

use crate::application::error::ShippingError;
use crate::domain::entities::{CartShippingQuote, ShopQuote};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Body of `POST /servientrega/quote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuoteShippingRequest {
    /// Cart to quote (UUID).
    pub cart_id: String,
    /// Destination locality code, e.g. "05001".
    #[serde(rename = "idCityDestino")]
    pub id_city_destino: String,
}

/// Shipping quote for one seller shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopQuoteResponse {
    /// Seller shop id.
    pub shop_id: String,
    /// Seller shop display name.
    pub shop_name: String,
    /// Origin locality code.
    pub origin_city: String,
    /// Destination locality code.
    pub destination_city: String,
    /// Shipping cost in whole currency units, written as a double.
    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub shipping_cost: Decimal,
    /// Estimated delivery time in days.
    pub estimated_days: u32,
    /// Why the standard rate was used, if it was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Carrier response as received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<serde_json::Value>,
}

impl From<ShopQuote> for ShopQuoteResponse {
    fn from(quote: ShopQuote) -> Self {
        Self {
            shop_id: quote.shop_id.to_string(),
            shop_name: quote.shop_name,
            origin_city: quote.origin_city.to_string(),
            destination_city: quote.destination_city.to_string(),
            shipping_cost: quote.shipping_cost.get(),
            estimated_days: quote.estimated_days,
            error: quote.error,
            raw_response: quote.raw_response,
        }
    }
}

/// Body of every `POST /servientrega/quote` answer to a valid request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QuoteShippingResponse {
    /// False when the cart could not be quoted at all.
    pub success: bool,
    /// Cart that was quoted.
    pub cart_id: String,
    /// Destination locality code.
    pub destination_city: String,
    /// One entry per seller shop.
    pub quotes: Vec<ShopQuoteResponse>,
    /// Exact sum of all shop shipping costs, written as a double.
    #[serde(rename = "totalShipping", with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub total_shipping: Decimal,
    /// Failure message when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Stable failure code when `success` is false.
    #[serde(rename = "errorCode", default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl QuoteShippingResponse {
    /// Builds the answer for a cart that could not be quoted.
    #[must_use]
    pub fn failure(
        cart_id: impl Into<String>,
        destination: impl Into<String>,
        error: &ShippingError,
    ) -> Self {
        Self {
            success: false,
            cart_id: cart_id.into(),
            destination_city: destination.into(),
            quotes: Vec::new(),
            total_shipping: Decimal::ZERO,
            error: Some(error.to_string()),
            error_code: Some(error.code().to_string()),
        }
    }
}

impl From<CartShippingQuote> for QuoteShippingResponse {
    fn from(quote: CartShippingQuote) -> Self {
        let cart_id = quote.cart_id().to_string();
        let destination_city = quote.destination().to_string();
        let total_shipping = quote.total_shipping().get();
        Self {
            success: true,
            cart_id,
            destination_city,
            quotes: quote
                .into_quotes()
                .into_iter()
                .map(ShopQuoteResponse::from)
                .collect(),
            total_shipping,
            error: None,
            error_code: None,
        }
    }
}

/// Error body for rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    /// Error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
}

impl ErrorResponse {
    /// Creates an error body stamped with the current time.
    #[must_use]
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
}
