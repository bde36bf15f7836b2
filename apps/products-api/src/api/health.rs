//! Readiness and metrics endpoints

use axum::{Router, extract::State, response::Response, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use observability::metrics_handler;

use crate::state::AppState;

async fn ready(State(state): State<AppState>) -> Response {
    let name = state.store.name();
    let store: HealthCheckFuture = Box::pin(async move {
        state
            .store
            .health_check()
            .await
            .map_err(|e| e.to_string())
    });

    run_health_checks(vec![(name, store)]).await
}

/// `/ready` probes the product store; `/metrics` renders Prometheus text
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}
