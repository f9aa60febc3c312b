//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! - `POST /servientrega/quote` - Quote shipping for a cart, per seller shop
//! - `GET /health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use shipping_quote::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let router = create_router(Arc::new(AppState::new(quote_service)));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{
    ErrorResponse, HealthResponse, QuoteShippingRequest, QuoteShippingResponse, ShopQuoteResponse,
};
pub use handlers::AppState;
pub use routes::create_router;
