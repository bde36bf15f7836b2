//! Products API - REST server

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use observability::{init_metrics, metrics_middleware};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, ProductStore};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    if init_metrics().is_none() {
        tracing::warn!("Continuing without the Prometheus exporter");
    }

    let store = ProductStore::from_config(&config).await;
    let state = AppState { config, store };

    // Build REST router
    let api_routes = api::routes(&state)
        .layer(axum::middleware::from_fn(metrics_middleware));
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone()));

    let AppState { config, store } = state;
    info!(
        "Starting Products API on port {} (store: {})",
        config.server.port, config.store
    );

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: releasing {} store client", store.name());
        drop(store);
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
