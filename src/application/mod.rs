//! # Application Layer
//!
//! Use cases and the services behind them.
//!
//! - [`error`]: Shipping quote error taxonomy
//! - [`services`]: Quote aggregation, shop grouping and origin resolution

pub mod error;
pub mod services;

pub use error::{PartialQuoteFailure, ShippingError, ShippingResult};
pub use services::ShippingQuoteService;
