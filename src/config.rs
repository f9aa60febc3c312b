//! # Configuration
//!
//! Service settings loaded with the `config` crate.
//!
//! Sources, lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. Optional `config/shipping.{toml,yaml,json}`
//! 3. `SHIPPING__<SECTION>__<KEY>` environment variables
//! 4. Legacy deployment variables (`SERVIENTREGA_LOGIN`, `DATABASE_URL`, ...)
//!
//! Environment values are kept as strings and converted during
//! deserialization, so locality codes such as `05001` keep their leading
//! zero.
//!
//! Settings are read once at startup and injected; nothing reads the
//! environment afterwards.

use crate::application::services::{
    AggregationConfig, FixedOriginResolver, GroupingPolicy, MunicipalityCode,
    MunicipalityOriginResolver, OriginResolver,
};
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{LocalityCode, Money};
use crate::infrastructure::carrier::ServientregaConfig;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

/// Default configuration file, without extension.
pub const DEFAULT_CONFIG_FILE: &str = "config/shipping";

/// Prefix of structured environment overrides.
pub const ENV_PREFIX: &str = "SHIPPING";

/// Legacy variables and the keys they override.
const LEGACY_OVERRIDES: [(&str, &str); 6] = [
    ("SERVIENTREGA_AUTH_URL", "carrier.auth_url"),
    ("SERVIENTREGA_QUOTE_URL", "carrier.quote_url"),
    ("SERVIENTREGA_LOGIN", "carrier.login"),
    ("SERVIENTREGA_PASSWORD", "carrier.password"),
    ("SERVIENTREGA_COD_FACTURACION", "carrier.billing_code"),
    ("DATABASE_URL", "database.url"),
];

/// Top-level service settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP listener.
    pub server: ServerSettings,
    /// PostgreSQL connection.
    pub database: DatabaseSettings,
    /// Servientrega API access.
    pub carrier: ServientregaConfig,
    /// Quote valuation and fallback policy.
    pub aggregation: AggregationSettings,
    /// Ship-from locality resolution.
    pub origin: OriginSettings,
    /// Log output.
    pub logging: LoggingSettings,
}

impl Settings {
    /// Loads settings from `.env`, the default config file and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a source is malformed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_from(DEFAULT_CONFIG_FILE, &env)
    }

    /// Loads settings from an optional config file and an explicit
    /// environment map.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a source is malformed or a value has
    /// the wrong type.
    pub fn load_from(
        config_file: &str,
        env: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let structured = env
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<config::Map<String, String>>();

        let mut builder = Config::builder()
            .add_source(File::with_name(config_file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .source(Some(structured)),
            );

        for (variable, key) in LEGACY_OVERRIDES {
            let value = env.get(variable).filter(|v| !v.trim().is_empty()).cloned();
            builder = builder.set_override_option(key, value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Returns the grouping policy.
    #[must_use]
    pub fn grouping_policy(&self) -> GroupingPolicy {
        GroupingPolicy::default()
            .with_min_declared_value(Money::from_units(self.aggregation.min_declared_value))
            .with_default_unit_value(Money::from_units(self.aggregation.default_unit_value))
    }

    /// Returns the aggregation configuration.
    #[must_use]
    pub fn aggregation_config(&self) -> AggregationConfig {
        AggregationConfig::default()
            .with_default_shipping_cost(Money::from_units(self.aggregation.default_shipping_cost))
            .with_default_estimated_days(self.aggregation.default_estimated_days)
            .with_grouping(self.grouping_policy())
    }

    /// Builds the configured origin resolver.
    ///
    /// An empty municipality table selects the fixed resolver.
    ///
    /// # Errors
    ///
    /// Returns a domain error if a configured locality code is malformed.
    pub fn origin_resolver(&self) -> DomainResult<Arc<dyn OriginResolver>> {
        let default_code = LocalityCode::new(&self.origin.default_code)?;
        if self.origin.municipality_codes.is_empty() {
            return Ok(Arc::new(FixedOriginResolver::new(default_code)));
        }
        Ok(Arc::new(MunicipalityOriginResolver::new(
            self.origin.municipality_codes.iter().cloned(),
            default_code,
        )?))
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerSettings {
    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns an error if host and port do not form a socket address.
    pub fn bind_address(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// PostgreSQL settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Connection URL.
    pub url: String,
    /// Pool size.
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/marketplace".to_string(),
            max_connections: 5,
        }
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// Valuation and fallback amounts, in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationSettings {
    /// Floor for each shop's declared value.
    pub min_declared_value: u64,
    /// Unit value for lines without a price.
    pub default_unit_value: u64,
    /// Cost used when the carrier gives no usable quote.
    pub default_shipping_cost: u64,
    /// Days reported when the carrier gives no estimate.
    pub default_estimated_days: u32,
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            min_declared_value: 30_000,
            default_unit_value: 50_000,
            default_shipping_cost: 15_000,
            default_estimated_days: 5,
        }
    }
}

/// Ship-from locality settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OriginSettings {
    /// Code used when no better origin is known.
    pub default_code: String,
    /// Known `(department, municipality)` codes.
    pub municipality_codes: Vec<MunicipalityCode>,
}

impl Default for OriginSettings {
    fn default() -> Self {
        Self {
            default_code: LocalityCode::default().to_string(),
            municipality_codes: Vec::new(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human-readable output.
    Pretty,
    /// Single-line human-readable output.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}
