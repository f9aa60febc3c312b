//! # Shipping Quote
//!
//! Per-seller shipping quotes for artisan marketplace carts.
//!
//! A cart can hold products from many independent shops, and each shop
//! ships its own parcel. The service groups a cart's lines by seller shop,
//! asks the Servientrega carrier for one quote per shop concurrently and
//! returns the per-shop breakdown with a grand total. Shops the carrier
//! cannot quote get a standard rate instead of failing the cart.
//!
//! # Layers
//!
//! - [`domain`]: Value objects and entities (`Money`, `CartLine`, `ShopGroup`, ...)
//! - [`application`]: The quote use case, shop grouping and origin resolution
//! - [`infrastructure`]: Carrier HTTP adapter and cart line repositories
//! - [`api`]: axum REST API
//! - [`config`]: Layered settings
//! - [`telemetry`]: Tracing subscriber setup

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
