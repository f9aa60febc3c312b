//! # HTTP Client Utilities
//!
//! Shared HTTP client for carrier adapters.
//!
//! Wraps `reqwest` with a per-request timeout, JSON bodies, bearer
//! authentication and mapping of transport failures and HTTP status codes
//! into [`CarrierError`].
//!
//! # Examples
//!
//! ```ignore
//! use shipping_quote::infrastructure::carrier::http_client::HttpClient;
//!
//! let client = HttpClient::new(10_000)?;
//! let body: serde_json::Value = client.post_with_bearer(url, &payload, token).await?;
//! ```

use crate::infrastructure::carrier::error::{CarrierError, CarrierResult};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for carrier adapters.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::InternalError` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> CarrierResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                CarrierError::internal_error(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a POST request with JSON body and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns a transport, status or protocol [`CarrierError`].
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> CarrierResult<T> {
        self.post_with_headers(url, body, HeaderMap::new()).await
    }

    /// Makes a POST request authenticated with a bearer token.
    ///
    /// # Errors
    ///
    /// Returns a transport, status or protocol [`CarrierError`].
    pub async fn post_with_bearer<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        token: &str,
    ) -> CarrierResult<T> {
        self.post_with_headers(url, body, bearer_headers(token)?).await
    }

    /// Makes a POST request with JSON body and custom headers.
    ///
    /// # Errors
    ///
    /// Returns a transport, status or protocol [`CarrierError`].
    pub async fn post_with_headers<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
        headers: HeaderMap,
    ) -> CarrierResult<T> {
        let response = self
            .client
            .post(url)
            .json(body)
            .headers(headers)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> CarrierResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                CarrierError::protocol_error(format!("Failed to parse response: {}", e))
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(map_status_error(status, &error_body))
        }
    }

    fn map_reqwest_error(&self, error: reqwest::Error) -> CarrierError {
        if error.is_timeout() {
            CarrierError::timeout_with_duration("Request timed out", self.timeout_ms)
        } else if error.is_connect() {
            CarrierError::connection(format!("Connection failed: {}", error))
        } else {
            CarrierError::connection(format!("HTTP request failed: {}", error))
        }
    }
}

/// Builds an `Authorization: Bearer` header map.
fn bearer_headers(token: &str) -> CarrierResult<HeaderMap> {
    let value = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| CarrierError::internal_error("carrier token is not a valid header value"))?;
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

fn map_status_error(status: StatusCode, body: &str) -> CarrierError {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            CarrierError::invalid_request(format!("Bad request: {}", body))
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CarrierError::authentication(format!("Authentication failed: {}", body))
        }
        StatusCode::NOT_FOUND => {
            CarrierError::protocol_error(format!("Resource not found: {}", body))
        }
        StatusCode::TOO_MANY_REQUESTS => CarrierError::rate_limited("Rate limit exceeded"),
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => {
            CarrierError::connection(format!("Server error ({}): {}", status, body))
        }
        _ => CarrierError::protocol_error(format!("HTTP error ({}): {}", status, body)),
    }
}
