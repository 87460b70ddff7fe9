//! Carbon Ledger HTTP server.
//!
//! Wires configuration, logging, storage and factor adapters into the axum
//! router and serves it until Ctrl-C.

use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use carbon_ledger::adapters::{api_router, AppState, FileFactorSource, FilePreferenceStore, FileSiteRepository};
use carbon_ledger::application::{CalculationService, RefreshFactorTablesHandler};
use carbon_ledger::config::{AppConfig, ServerConfig};
use carbon_ledger::ports::PreferenceStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let sites = Arc::new(FileSiteRepository::new(&config.storage.data_dir));
    let preferences = Arc::new(FilePreferenceStore::new(&config.storage.data_dir));

    let service = CalculationService::with_builtin_factors()
        .with_classification(config.emissions.classification_mode()?);
    let state = AppState::new(service, sites, preferences.clone());

    if let Some(path) = &config.emissions.factor_file {
        let source = Arc::new(FileFactorSource::new(path));
        let result = RefreshFactorTablesHandler::new(source, state.service.clone())
            .handle()
            .await?;
        for rejected in &result.rejected {
            warn!(country = %rejected.country, reason = %rejected.reason, "Factor table skipped");
        }
        info!(path = %path.display(), installed = result.installed.len(), "Factor file applied");
    }

    // A stored preference wins over the configured default unless it names a
    // country that is no longer available.
    let default_country = config.emissions.country()?;
    let preferred = preferences.load().await?.country;
    let mut service = state.service.write().await;
    let country = match preferred {
        Some(country) if service.factor_table(&country).is_ok() => country,
        Some(country) => {
            warn!(country = %country, fallback = %default_country, "Stored country unavailable");
            default_country
        }
        None => default_country,
    };
    service.set_country(country)?;
    info!(
        country = %service.country(),
        countries = service.supported_countries().len(),
        scope_mode = ?service.classification_mode(),
        "Calculation service ready"
    );
    drop(service);

    let app = api_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if server.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
