//! # REST Handlers
//!
//! Request handlers for the shipping quote endpoints.

use crate::api::rest::dto::{
    ErrorResponse, HealthResponse, QuoteShippingRequest, QuoteShippingResponse,
};
use crate::application::services::ShippingQuoteService;
use crate::domain::value_objects::{CartId, LocalityCode};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared state for REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Cart shipping quote use case.
    pub quote_service: Arc<ShippingQuoteService>,
}

impl AppState {
    /// Creates the handler state.
    #[must_use]
    pub fn new(quote_service: Arc<ShippingQuoteService>) -> Self {
        Self { quote_service }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("VALIDATION_ERROR", message)),
    )
}

/// POST /servientrega/quote - Quote shipping for a cart.
///
/// Malformed bodies are rejected with 400. Every well-formed request gets
/// a 200 whose `success` flag tells whether the cart could be quoted.
///
/// # Errors
///
/// Returns 400 with an [`ErrorResponse`] if the body is not valid JSON,
/// `cart_id` is not a UUID, or `idCityDestino` is blank.
pub async fn quote_shipping(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuoteShippingRequest>, JsonRejection>,
) -> Result<Json<QuoteShippingResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| bad_request(rejection.body_text()))?;

    let cart_id = CartId::parse(&request.cart_id).map_err(|e| bad_request(e.to_string()))?;
    let destination =
        LocalityCode::new(&request.id_city_destino).map_err(|e| bad_request(e.to_string()))?;

    info!(%cart_id, %destination, "quoting cart shipping");

    let response = match state
        .quote_service
        .quote_shipping(cart_id, &destination)
        .await
    {
        Ok(quote) => QuoteShippingResponse::from(quote),
        Err(error) => {
            warn!(%cart_id, code = error.code(), %error, "cart shipping quote failed");
            QuoteShippingResponse::failure(cart_id.to_string(), destination.to_string(), &error)
        }
    };

    Ok(Json(response))
}

/// GET /health - Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
