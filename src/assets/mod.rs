//! Image asset resolution.
//!
//! The rendering core never downloads anything itself; it asks an
//! [`AssetResolver`] for each image URL and treats absence as a skipped slot,
//! never as an error. Backends are interchangeable behind the trait object and
//! are created by [`create_asset_resolver`] based on configuration.

mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AssetsConfig;

pub use memory::MemoryAssetResolver;

/// A decoded image bound to the URL it was resolved from.
///
/// The raw bytes are skipped during serialization; descriptor JSON carries the
/// asset metadata only, while in-process consumers (the platform adapter) get
/// the full pixel data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedAsset {
    /// Source URL this asset was resolved from
    pub url: String,
    /// MIME content type, e.g. `image/png`
    pub content_type: String,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// Decoded image bytes
    #[serde(default, skip_serializing)]
    pub data: Vec<u8>,
}

impl ResolvedAsset {
    /// Create a new resolved asset.
    pub fn new(
        url: impl Into<String>,
        content_type: impl Into<String>,
        width: u32,
        height: u32,
        data: Vec<u8>,
    ) -> Self {
        Self {
            url: url.into(),
            content_type: content_type.into(),
            width,
            height,
            data,
        }
    }
}

/// Backend trait for resolving image URLs to decoded assets.
///
/// Resolution is one-shot and best-effort: `None` means the slot is skipped.
/// Retry policy, if any, belongs to the backend, not to the caller.
#[async_trait]
pub trait AssetResolver: Send + Sync {
    /// Resolve a single image URL. `None` on any failure.
    async fn resolve(&self, url: &str) -> Option<ResolvedAsset>;

    /// Store an asset so later `resolve` calls can find it.
    ///
    /// Returns `false` when the backend does not support storage.
    async fn store(&self, asset: ResolvedAsset) -> bool;

    /// Backend name for health reporting.
    fn backend_name(&self) -> &'static str;
}

/// Resolver that never finds anything. Every image slot is skipped.
#[derive(Debug, Default)]
pub struct NullAssetResolver;

#[async_trait]
impl AssetResolver for NullAssetResolver {
    async fn resolve(&self, url: &str) -> Option<ResolvedAsset> {
        tracing::debug!(url = %url, "Null resolver, skipping image slot");
        None
    }

    async fn store(&self, _asset: ResolvedAsset) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "null"
    }
}

/// Create an asset resolver backend based on configuration.
///
/// Returns the appropriate backend implementation based on the `backend` setting:
/// - `"memory"`: Returns a [`MemoryAssetResolver`] preloadable through the API
/// - anything else: Returns a [`NullAssetResolver`]
pub fn create_asset_resolver(settings: &AssetsConfig) -> Arc<dyn AssetResolver> {
    match settings.backend.as_str() {
        "memory" => {
            tracing::info!(
                backend = "memory",
                max_image_bytes = settings.max_image_bytes,
                "Creating memory asset resolver"
            );
            Arc::new(MemoryAssetResolver::new(settings.max_image_bytes))
        }
        other => {
            if other != "null" {
                tracing::warn!(
                    backend = %other,
                    "Unknown asset backend, falling back to null resolver"
                );
            }
            Arc::new(NullAssetResolver)
        }
    }
}
