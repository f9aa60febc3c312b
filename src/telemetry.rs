//! # Telemetry
//!
//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies, with
//! noisy HTTP internals held at `warn`.

use crate::config::{LogFormat, LoggingSettings};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(settings: &LoggingSettings) -> Result<(), TryInitError> {
    match settings.format {
        LogFormat::Pretty => init_with_layer(settings, tracing_subscriber::fmt::layer().pretty()),
        LogFormat::Compact => init_with_layer(
            settings,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true),
        ),
        LogFormat::Json => init_with_layer(
            settings,
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_target(true),
        ),
    }
}

fn build_env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},hyper=warn,hyper_util=warn,reqwest=warn,sqlx=warn",
            settings.level
        ))
    })
}

fn init_with_layer<L>(settings: &LoggingSettings, fmt_layer: L) -> Result<(), TryInitError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(build_env_filter(settings))
        .try_init()
}
