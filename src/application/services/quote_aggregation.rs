//! # Shipping Quote Service
//!
//! Orchestrates a cart shipping quote.
//!
//! [`ShippingQuoteService::quote_shipping`] loads the cart, logs in to the
//! carrier, groups lines by seller shop and requests one quote per shop
//! concurrently. A shop whose quote fails gets the fallback rate and the
//! failure text; only an empty cart, a failed login or an unreadable cart
//! abort the whole request.

use crate::application::error::{ShippingError, ShippingResult};
use crate::application::services::origin_resolver::OriginResolver;
use crate::application::services::shop_grouping::{GroupingPolicy, group_by_shop};
use crate::domain::entities::{CartShippingQuote, ShopGroup, ShopQuote};
use crate::domain::value_objects::{CartId, LocalityCode, Money};
use crate::infrastructure::carrier::{
    CarrierAdapter, CarrierQuote, CarrierSession, ShipmentQuoteRequest,
};
use crate::infrastructure::persistence::CartLineRepository;
use futures::future::join_all;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Shipping cost used when the carrier gives no usable quote.
pub const DEFAULT_SHIPPING_COST: u64 = 15_000;

/// Delivery estimate used when the carrier gives none.
pub const DEFAULT_ESTIMATED_DAYS: u32 = 5;

/// Error text for a carrier answer without a usable cost.
pub const FALLBACK_RATE_MESSAGE: &str = "quote unavailable, using standard rate";

/// Configuration for shipping quote aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationConfig {
    /// Cost substituted for shops the carrier could not quote.
    pub default_shipping_cost: Money,
    /// Days reported when the carrier gives no estimate.
    pub default_estimated_days: u32,
    /// Valuation rules for shop grouping.
    pub grouping: GroupingPolicy,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            default_shipping_cost: Money::from_units(DEFAULT_SHIPPING_COST),
            default_estimated_days: DEFAULT_ESTIMATED_DAYS,
            grouping: GroupingPolicy::default(),
        }
    }
}

impl AggregationConfig {
    /// Sets the fallback shipping cost.
    #[must_use]
    pub fn with_default_shipping_cost(mut self, cost: Money) -> Self {
        self.default_shipping_cost = cost;
        self
    }

    /// Sets the fallback delivery estimate.
    #[must_use]
    pub fn with_default_estimated_days(mut self, days: u32) -> Self {
        self.default_estimated_days = days;
        self
    }

    /// Sets the grouping policy.
    #[must_use]
    pub fn with_grouping(mut self, grouping: GroupingPolicy) -> Self {
        self.grouping = grouping;
        self
    }
}

/// Quotes shipping for whole carts.
#[derive(Debug, Clone)]
pub struct ShippingQuoteService {
    cart_lines: Arc<dyn CartLineRepository>,
    carrier: Arc<dyn CarrierAdapter>,
    origin_resolver: Arc<dyn OriginResolver>,
    config: AggregationConfig,
}

impl ShippingQuoteService {
    /// Creates a new service.
    #[must_use]
    pub fn new(
        cart_lines: Arc<dyn CartLineRepository>,
        carrier: Arc<dyn CarrierAdapter>,
        origin_resolver: Arc<dyn OriginResolver>,
        config: AggregationConfig,
    ) -> Self {
        Self {
            cart_lines,
            carrier,
            origin_resolver,
            config,
        }
    }

    /// Quotes shipping for every seller shop in a cart.
    ///
    /// # Errors
    ///
    /// - [`ShippingError::EmptyCart`] if the cart has no lines; the carrier
    ///   is not contacted
    /// - [`ShippingError::AuthenticationFailed`] if the carrier login fails
    /// - [`ShippingError::Repository`] if the cart cannot be read
    /// - [`ShippingError::Internal`] on arithmetic overflow or if grouping
    ///   yields no shops
    #[instrument(skip(self), fields(carrier = self.carrier.carrier_name()))]
    pub async fn quote_shipping(
        &self,
        cart_id: CartId,
        destination: &LocalityCode,
    ) -> ShippingResult<CartShippingQuote> {
        let lines = self.cart_lines.find_by_cart(&cart_id).await?;
        if lines.is_empty() {
            return Err(ShippingError::empty_cart(cart_id));
        }

        let session = self
            .carrier
            .authenticate()
            .await
            .map_err(ShippingError::authentication_failed)?;

        let groups = group_by_shop(
            &lines,
            self.origin_resolver.as_ref(),
            &self.config.grouping,
        )?;
        if groups.is_empty() {
            return Err(ShippingError::internal("cart produced no shop groups"));
        }

        let quotes = join_all(
            groups
                .iter()
                .map(|group| self.quote_group(&session, group, destination)),
        )
        .await;

        let aggregate = CartShippingQuote::new(cart_id, destination.clone(), quotes)?;
        info!(
            shops = aggregate.quotes().len(),
            fallbacks = aggregate.partial_failures().len(),
            total = %aggregate.total_shipping(),
            "cart shipping quoted"
        );
        Ok(aggregate)
    }

    /// Quotes one shop, substituting the fallback rate on failure.
    async fn quote_group(
        &self,
        session: &CarrierSession,
        group: &ShopGroup,
        destination: &LocalityCode,
    ) -> ShopQuote {
        let request = ShipmentQuoteRequest::for_group(group, destination);
        let mut quote = ShopQuote {
            shop_id: group.shop_id().clone(),
            shop_name: group.shop_name().to_string(),
            origin_city: group.origin().clone(),
            destination_city: destination.clone(),
            shipping_cost: self.config.default_shipping_cost,
            estimated_days: self.config.default_estimated_days,
            error: None,
            raw_response: None,
        };

        match self.carrier.request_quote(session, &request).await {
            Ok(CarrierQuote {
                shipping_cost,
                estimated_days,
                raw_response,
            }) => {
                quote.estimated_days = estimated_days.unwrap_or(self.config.default_estimated_days);
                quote.raw_response = Some(raw_response);
                match shipping_cost.filter(Money::is_positive) {
                    Some(cost) => quote.shipping_cost = cost,
                    None => {
                        warn!(
                            shop_id = %group.shop_id(),
                            fallback = %self.config.default_shipping_cost,
                            "carrier returned no usable cost, using standard rate"
                        );
                        quote.error = Some(FALLBACK_RATE_MESSAGE.to_string());
                    }
                }
            }
            Err(error) => {
                warn!(
                    shop_id = %group.shop_id(),
                    retryable = error.is_retryable(),
                    timeout_ms = ?error.timeout_ms(),
                    fallback = %self.config.default_shipping_cost,
                    %error,
                    "carrier quote failed, using standard rate"
                );
                let message = error.to_string();
                quote.raw_response = Some(json!({ "error": message }));
                quote.error = Some(message);
            }
        }

        quote
    }
}
