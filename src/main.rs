//! Shipping quote service binary.

use anyhow::Context;
use shipping_quote::api::rest::{AppState, create_router};
use shipping_quote::application::services::ShippingQuoteService;
use shipping_quote::config::Settings;
use shipping_quote::infrastructure::carrier::ServientregaAdapter;
use shipping_quote::infrastructure::persistence::PostgresCartLineRepository;
use shipping_quote::telemetry::init_tracing;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    init_tracing(&settings.logging).context("failed to initialise tracing")?;

    if !settings.carrier.has_credentials() {
        warn!("no carrier login configured; every quote will fail authentication");
    }

    let pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect_lazy(&settings.database.url)
        .context("invalid database url")?;

    let carrier = ServientregaAdapter::new(settings.carrier.clone())
        .context("failed to build carrier client")?;
    let origin_resolver = settings
        .origin_resolver()
        .context("invalid origin configuration")?;
    info!(
        resolver = origin_resolver.name(),
        timeout_ms = settings.carrier.timeout_ms,
        "quote service configured"
    );

    let service = ShippingQuoteService::new(
        Arc::new(PostgresCartLineRepository::new(pool)),
        Arc::new(carrier),
        origin_resolver,
        settings.aggregation_config(),
    );
    let router = create_router(Arc::new(AppState::new(Arc::new(service))));

    let addr = settings
        .server
        .bind_address()
        .context("invalid server address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
