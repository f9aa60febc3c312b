//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`ShippingQuoteService`]: Concurrent per-shop carrier quoting for a cart
//! - [`group_by_shop`]: Partitions cart lines into shop shipments
//! - [`OriginResolver`]: Strategies for a shop's ship-from locality

pub mod origin_resolver;
pub mod quote_aggregation;
pub mod shop_grouping;

pub use origin_resolver::{
    FixedOriginResolver, MunicipalityCode, MunicipalityOriginResolver, OriginResolver,
};
pub use quote_aggregation::{AggregationConfig, ShippingQuoteService};
pub use shop_grouping::{GroupingPolicy, group_by_shop};
