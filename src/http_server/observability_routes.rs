//! Observability HTTP Routes
//!
//! Health check reporting the service version and whether the data file is
//! reachable.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::catalog::ProductStore;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub data_file: String,
}

/// Health check route
pub fn health_routes(store: Arc<ProductStore>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(store)
}

/// Returns 200 when the data file exists, 503 otherwise
async fn health_handler(
    State(store): State<Arc<ProductStore>>,
) -> (StatusCode, Json<HealthResponse>) {
    let present = tokio::fs::try_exists(store.path()).await.unwrap_or(false);
    let (status, label) = if present {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "data file missing")
    };

    let response = HealthResponse {
        status: label,
        version: env!("CARGO_PKG_VERSION"),
        data_file: store.path().display().to_string(),
    };
    (status, Json(response))
}
