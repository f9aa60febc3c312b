//! # Servientrega Adapter
//!
//! [`CarrierAdapter`] for the Servientrega corporate quoting API.
//!
//! ## Protocol
//!
//! 1. `POST {auth_url}` with `{login, password, codFacturacion}` returns
//!    `{token}`.
//! 2. `POST {quote_url}` with `Authorization: Bearer {token}` and a
//!    PascalCase payload describing the parcels returns a quote object.
//!    The cost field name varies between deployments: `ValorFlete`,
//!    `valorTotal` or `valor`, checked in that order.
//!
//! Every quote is sent as a pickup-point delivery, paid on credit, with
//! standard delivery time over ground transport and no cash on delivery.

use crate::domain::entities::Piece;
use crate::domain::value_objects::Money;
use crate::infrastructure::carrier::error::{CarrierError, CarrierResult};
use crate::infrastructure::carrier::http_client::HttpClient;
use crate::infrastructure::carrier::traits::{
    CarrierAdapter, CarrierQuote, CarrierSession, ShipmentQuoteRequest,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Default login endpoint.
pub const DEFAULT_AUTH_URL: &str =
    "http://web.servientrega.com:8058/CotizadorCorporativo/api/autenticacion/login";

/// Default quote endpoint.
pub const DEFAULT_QUOTE_URL: &str =
    "http://web.servientrega.com:8058/CotizadorCorporativo/api/cotizacion/cotizar";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Product code: delivery to a pickup point.
const PRODUCT_PICKUP_POINT: u8 = 2;
/// Payment term: credit.
const PAYMENT_CREDIT: u8 = 2;
/// Delivery time: standard.
const DELIVERY_STANDARD: u8 = 1;
/// Transport: ground.
const TRANSPORT_GROUND: u8 = 1;
/// Collection reference sent with every quote.
const COLLECTION_NUMBER: u32 = 123_456;

/// Response fields that may hold the shipping cost, by priority.
const COST_FIELDS: [&str; 3] = ["ValorFlete", "valorTotal", "valor"];

/// Response field holding the delivery estimate in days.
const DELIVERY_DAYS_FIELD: &str = "TiempoEntrega";

/// Connection settings for the Servientrega API.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServientregaConfig {
    /// Login endpoint.
    pub auth_url: String,
    /// Quote endpoint.
    pub quote_url: String,
    /// Account login.
    pub login: String,
    /// Account password.
    pub password: String,
    /// Billing code (`codFacturacion`).
    pub billing_code: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl ServientregaConfig {
    /// Creates a configuration with default endpoints and the given
    /// credentials.
    #[must_use]
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        billing_code: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            billing_code: billing_code.into(),
            ..Default::default()
        }
    }

    /// Points both endpoints at `base_url`, keeping the API paths.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        self.auth_url = format!("{}/CotizadorCorporativo/api/autenticacion/login", base);
        self.quote_url = format!("{}/CotizadorCorporativo/api/cotizacion/cotizar", base);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Returns true if a login is configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.login.is_empty()
    }
}

impl Default for ServientregaConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            login: String::new(),
            password: String::new(),
            billing_code: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl fmt::Debug for ServientregaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServientregaConfig")
            .field("auth_url", &self.auth_url)
            .field("quote_url", &self.quote_url)
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("billing_code", &self.billing_code)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    login: &'a str,
    password: &'a str,
    #[serde(rename = "codFacturacion")]
    billing_code: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// Parcel as the quote API expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServientregaPiece {
    #[serde(with = "rust_decimal::serde::float")]
    peso: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    largo: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    ancho: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    alto: Decimal,
}

impl From<&Piece> for ServientregaPiece {
    fn from(piece: &Piece) -> Self {
        Self {
            peso: piece.weight_kg(),
            largo: piece.length_cm(),
            ancho: piece.width_cm(),
            alto: piece.height_cm(),
        }
    }
}

/// Quote request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServientregaQuoteRequest {
    id_producto: u8,
    numero_piezas: usize,
    piezas: Vec<ServientregaPiece>,
    valor_declarado: Money,
    id_dane_ciudad_origen: String,
    id_dane_ciudad_destino: String,
    envio_con_cobro: bool,
    forma_pago: u8,
    tiempo_entrega: u8,
    medio_transporte: u8,
    num_recaudo: u32,
}

impl From<&ShipmentQuoteRequest> for ServientregaQuoteRequest {
    fn from(request: &ShipmentQuoteRequest) -> Self {
        Self {
            id_producto: PRODUCT_PICKUP_POINT,
            numero_piezas: request.piece_count(),
            piezas: request.pieces.iter().map(ServientregaPiece::from).collect(),
            valor_declarado: request.declared_value,
            id_dane_ciudad_origen: request.origin.carrier_code(),
            id_dane_ciudad_destino: request.destination.carrier_code(),
            envio_con_cobro: false,
            forma_pago: PAYMENT_CREDIT,
            tiempo_entrega: DELIVERY_STANDARD,
            medio_transporte: TRANSPORT_GROUND,
            num_recaudo: COLLECTION_NUMBER,
        }
    }
}

/// Servientrega carrier adapter.
#[derive(Debug, Clone)]
pub struct ServientregaAdapter {
    config: ServientregaConfig,
    http: HttpClient,
}

impl ServientregaAdapter {
    /// Creates an adapter with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::InternalError` if the HTTP client cannot be
    /// built.
    pub fn new(config: ServientregaConfig) -> CarrierResult<Self> {
        let http = HttpClient::new(config.timeout_ms)?;
        Ok(Self { config, http })
    }
}

#[async_trait]
impl CarrierAdapter for ServientregaAdapter {
    fn carrier_name(&self) -> &'static str {
        "servientrega"
    }

    #[instrument(skip(self), fields(url = %self.config.auth_url))]
    async fn authenticate(&self) -> CarrierResult<CarrierSession> {
        let body = LoginRequest {
            login: &self.config.login,
            password: &self.config.password,
            billing_code: &self.config.billing_code,
        };

        let response: LoginResponse = self.http.post(&self.config.auth_url, &body).await?;

        match response.token {
            Some(token) if !token.trim().is_empty() => {
                debug!("carrier session opened");
                Ok(CarrierSession::new(token))
            }
            _ => Err(CarrierError::authentication(
                "no token received from carrier",
            )),
        }
    }

    #[instrument(skip(self, session, request), fields(shop_id = %request.shop_id))]
    async fn request_quote(
        &self,
        session: &CarrierSession,
        request: &ShipmentQuoteRequest,
    ) -> CarrierResult<CarrierQuote> {
        let payload = ServientregaQuoteRequest::from(request);
        debug!(
            origin = %payload.id_dane_ciudad_origen,
            destination = %payload.id_dane_ciudad_destino,
            pieces = payload.numero_piezas,
            timeout_ms = self.http.timeout_ms(),
            "requesting carrier quote"
        );

        let raw: Value = self
            .http
            .post_with_bearer(&self.config.quote_url, &payload, session.token())
            .await?;

        Ok(CarrierQuote {
            shipping_cost: extract_shipping_cost(&raw),
            estimated_days: extract_estimated_days(&raw),
            raw_response: raw,
        })
    }
}

/// Reads the shipping cost from a quote response.
///
/// The first cost field holding a non-empty value decides; later fields
/// are not consulted even if that value turns out unusable. Returns `None`
/// when no field is set or the chosen value is not a positive number.
#[must_use]
pub fn extract_shipping_cost(raw: &Value) -> Option<Money> {
    let value = COST_FIELDS
        .iter()
        .filter_map(|field| raw.get(field))
        .find(|v| is_set(v))?;

    let amount = match value {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .ok(),
        Value::String(s) => leading_decimal(s),
        _ => None,
    }?;

    if amount > Decimal::ZERO {
        Money::new(amount).ok()
    } else {
        None
    }
}

/// Reads the delivery estimate in days from a quote response.
#[must_use]
pub fn extract_estimated_days(raw: &Value) -> Option<u32> {
    match raw.get(DELIVERY_DAYS_FIELD)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.trunc() as u64))
            .and_then(|d| u32::try_from(d).ok()),
        Value::String(s) => {
            let digits: String = s.trim().chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        }
        _ => None,
    }
    .filter(|days| *days > 0)
}

/// Parses the longest numeric prefix of `text`, so `"18500 COP"` reads as
/// 18500. Leading whitespace is skipped and an exponent is honoured.
fn leading_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut pos = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let int_len = digits_from(pos);
    let int_part = &text[pos..pos + int_len];
    pos += int_len;

    let mut frac_part = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_len = digits_from(pos + 1);
        if frac_len > 0 {
            frac_part = &text[pos + 1..pos + 1 + frac_len];
            pos += 1 + frac_len;
        }
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut exponent = String::new();
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        let exp_negative = bytes.get(exp_pos) == Some(&b'-');
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_len = digits_from(exp_pos);
        if exp_len > 0 {
            if exp_negative {
                exponent.push('-');
            }
            exponent.push_str(&text[exp_pos..exp_pos + exp_len]);
        }
    }

    let mut mantissa = String::with_capacity(int_part.len() + frac_part.len() + 3);
    if negative {
        mantissa.push('-');
    }
    mantissa.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        mantissa.push('.');
        mantissa.push_str(frac_part);
    }

    if exponent.is_empty() {
        Decimal::from_str(&mantissa).ok()
    } else {
        Decimal::from_scientific(&format!("{mantissa}e{exponent}")).ok()
    }
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => true,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{LocalityCode, ShopId};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn shipment(pieces: usize) -> ShipmentQuoteRequest {
        ShipmentQuoteRequest {
            shop_id: ShopId::new("shop-a"),
            origin: LocalityCode::default(),
            destination: LocalityCode::new("05001").unwrap(),
            pieces: vec![Piece::default(); pieces],
            declared_value: Money::from_units(30_000),
        }
    }

    fn adapter(server: &MockServer) -> ServientregaAdapter {
        let config = ServientregaConfig::new("user", "pass", "SER1")
            .with_base_url(&server.uri())
            .with_timeout_ms(2_000);
        ServientregaAdapter::new(config).unwrap()
    }

    #[test]
    fn payload_uses_carrier_field_names() {
        let payload = ServientregaQuoteRequest::from(&shipment(2));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["IdProducto"], 2);
        assert_eq!(json["NumeroPiezas"], 2);
        assert_eq!(json["Piezas"].as_array().unwrap().len(), 2);
        assert_eq!(json["Piezas"][0]["Largo"], 20.0);
        assert_eq!(json["Piezas"][0]["Peso"], 1.0);
        assert_eq!(json["ValorDeclarado"], 30_000.0);
        assert_eq!(json["IdDaneCiudadOrigen"], "11001000");
        assert_eq!(json["IdDaneCiudadDestino"], "05001000");
        assert_eq!(json["EnvioConCobro"], false);
        assert_eq!(json["FormaPago"], 2);
        assert_eq!(json["TiempoEntrega"], 1);
        assert_eq!(json["MedioTransporte"], 1);
        assert_eq!(json["NumRecaudo"], 123_456);
    }

    #[test]
    fn cost_field_priority() {
        let raw = json!({"ValorFlete": 12000, "valorTotal": 99999, "valor": 1});
        assert_eq!(extract_shipping_cost(&raw), Some(Money::from_units(12_000)));

        let raw = json!({"ValorFlete": 0, "valorTotal": "18500.5"});
        assert_eq!(
            extract_shipping_cost(&raw),
            Some(Money::new(Decimal::new(185_005, 1)).unwrap())
        );

        let raw = json!({"valor": 7000});
        assert_eq!(extract_shipping_cost(&raw), Some(Money::from_units(7_000)));
    }

    #[test]
    fn cost_string_reads_leading_number() {
        let raw = json!({"ValorFlete": "18500 COP"});
        assert_eq!(extract_shipping_cost(&raw), Some(Money::from_units(18_500)));

        let raw = json!({"valorTotal": " 12500.75abc"});
        assert_eq!(
            extract_shipping_cost(&raw),
            Some(Money::new(Decimal::new(1_250_075, 2)).unwrap())
        );

        let raw = json!({"valor": "1.5e3 pesos"});
        assert_eq!(extract_shipping_cost(&raw), Some(Money::from_units(1_500)));

        assert_eq!(extract_shipping_cost(&json!({"ValorFlete": "COP 18500"})), None);
        assert_eq!(extract_shipping_cost(&json!({"ValorFlete": "-200 COP"})), None);
    }

    #[test]
    fn unusable_cost_is_none() {
        assert_eq!(extract_shipping_cost(&json!({})), None);
        assert_eq!(extract_shipping_cost(&json!({"ValorFlete": "n/a", "valor": 5})), None);
        assert_eq!(extract_shipping_cost(&json!({"valor": -10})), None);
    }

    #[test]
    fn estimated_days_parsing() {
        assert_eq!(extract_estimated_days(&json!({"TiempoEntrega": 3})), Some(3));
        assert_eq!(extract_estimated_days(&json!({"TiempoEntrega": "4 dias"})), Some(4));
        assert_eq!(extract_estimated_days(&json!({"TiempoEntrega": 0})), None);
        assert_eq!(extract_estimated_days(&json!({})), None);
    }

    #[test]
    fn config_debug_redacts_password() {
        let config = ServientregaConfig::new("user", "hunter2", "SER1");
        assert!(!format!("{:?}", config).contains("hunter2"));
        assert!(config.has_credentials());
        assert!(!ServientregaConfig::default().has_credentials());
    }

    #[tokio::test]
    async fn authenticate_returns_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/CotizadorCorporativo/api/autenticacion/login"))
            .and(body_partial_json(json!({
                "login": "user",
                "password": "pass",
                "codFacturacion": "SER1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let session = adapter(&server).authenticate().await.unwrap();
        assert_eq!(session.token(), "jwt-1");
    }

    #[tokio::test]
    async fn authenticate_without_token_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
            .mount(&server)
            .await;

        let err = adapter(&server).authenticate().await.unwrap_err();
        assert!(err.is_authentication());
    }

    #[tokio::test]
    async fn authenticate_rejected_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad login"))
            .mount(&server)
            .await;

        let err = adapter(&server).authenticate().await.unwrap_err();
        assert!(err.is_authentication());
    }

    #[tokio::test]
    async fn request_quote_sends_bearer_and_parses_cost() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/CotizadorCorporativo/api/cotizacion/cotizar"))
            .and(header("authorization", "Bearer jwt-1"))
            .and(body_partial_json(json!({"NumeroPiezas": 3})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ValorFlete": 21000, "TiempoEntrega": 2})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let quote = adapter(&server)
            .request_quote(&CarrierSession::new("jwt-1"), &shipment(3))
            .await
            .unwrap();
        assert_eq!(quote.shipping_cost, Some(Money::from_units(21_000)));
        assert_eq!(quote.estimated_days, Some(2));
        assert_eq!(quote.raw_response["ValorFlete"], 21000);
    }
}
