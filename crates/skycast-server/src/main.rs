//! skycast server - weather lookup dashboard backend
//!
//! Serves the static frontend, geocodes place names, fetches hourly
//! forecasts from Open-Meteo, and caches them in a local SQLite table.

use anyhow::{Context, Result};
use skycast_db::Store;
use skycast_fetch::{NominatimGeocoder, OpenMeteoProvider};
use skycast_server::config::AppConfig;
use skycast_server::{build_app, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting skycast server");

    let config = AppConfig::load().context("Failed to load configuration")?;

    let store = Store::open(config.database_path())
        .await
        .context("Failed to open forecast database")?;
    store.ping().await.context("Database ping failed")?;
    info!("Forecast database ready at {}", config.database_path());

    let geocoder = NominatimGeocoder::new().context("Failed to build geocoding client")?;
    let provider = OpenMeteoProvider::new().context("Failed to build forecast client")?;

    let state = Arc::new(AppState {
        store,
        geocoder: Arc::new(geocoder),
        provider: Arc::new(provider),
        web_root: PathBuf::from(config.frontend_root()),
    });

    let app = build_app(state);

    let bind = config.http_bind();
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    info!("Server running at http://{bind}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("skycast server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install signal handler: {e}");
    }
}
