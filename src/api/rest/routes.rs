//! # REST Routes
//!
//! Router configuration for the REST API.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::http::Request;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::LatencyUnit;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates the REST router with all routes and middleware.
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<_>| {
            tracing::info_span!("http_request", method = %req.method(), uri = %req.uri())
        })
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    Router::new()
        .route("/health", get(handlers::health))
        .route("/servientrega/quote", post(handlers::quote_shipping))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(trace)
        .with_state(state)
}
