use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::assets::store_asset;
use super::health::health;
use super::metrics::prometheus_metrics;
use super::render::render_template;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Rendering endpoints
        .nest(
            "/api/v1",
            Router::new()
                .route("/render", post(render_template))
                .route("/assets", post(store_asset)),
        )
}
