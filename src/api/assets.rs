//! Asset preload endpoint.
//!
//! An upstream ingest pushes decoded images in ahead of render requests so the
//! memory resolver can find them by URL.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assets::ResolvedAsset;
use crate::error::{AppError, Result};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct StoreAssetRequest {
    /// URL render requests will reference this asset by
    pub url: String,
    /// MIME content type
    pub content_type: String,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// Decoded image bytes
    #[serde(default)]
    pub data: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct StoreAssetResponse {
    pub url: String,
    pub backend: String,
}

/// POST /api/v1/assets - store an asset in the configured resolver
pub async fn store_asset(
    State(state): State<AppState>,
    Json(request): Json<StoreAssetRequest>,
) -> Result<Json<StoreAssetResponse>> {
    if request.url.trim().is_empty() {
        return Err(AppError::Validation("Asset URL must not be empty".to_string()));
    }

    let asset = ResolvedAsset::new(
        request.url.clone(),
        request.content_type,
        request.width,
        request.height,
        request.data,
    );

    if !state.resolver.store(asset).await {
        return Err(AppError::Validation(format!(
            "The '{}' asset backend rejected the asset",
            state.resolver.backend_name()
        )));
    }

    tracing::info!(url = %request.url, "Stored asset");

    Ok(Json(StoreAssetResponse {
        url: request.url,
        backend: state.resolver.backend_name().to_string(),
    }))
}
