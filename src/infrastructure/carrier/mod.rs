//! # Carrier Integrations
//!
//! - [`CarrierAdapter`]: Port every carrier integration implements
//! - [`ServientregaAdapter`]: Servientrega corporate quoting API
//! - [`HttpClient`]: Shared JSON-over-HTTP client with error mapping

pub mod error;
pub mod http_client;
pub mod servientrega;
pub mod traits;

pub use error::{CarrierError, CarrierResult};
pub use http_client::HttpClient;
pub use servientrega::{ServientregaAdapter, ServientregaConfig};
pub use traits::{CarrierAdapter, CarrierQuote, CarrierSession, ShipmentQuoteRequest};
