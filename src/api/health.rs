//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub assets: AssetHealthResponse,
}

#[derive(Debug, Serialize)]
pub struct AssetHealthResponse {
    pub backend: String,
}

/// GET /health - liveness and basic configuration
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        assets: AssetHealthResponse {
            backend: state.resolver.backend_name().to_string(),
        },
    })
}
