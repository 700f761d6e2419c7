//! In-memory asset resolver backed by DashMap.

use async_trait::async_trait;
use dashmap::DashMap;

use super::{AssetResolver, ResolvedAsset};

/// Asset resolver holding decoded images keyed by URL.
///
/// Intended for deployments where an upstream ingest pushes assets in ahead of
/// render requests, and for tests. Oversized assets are rejected at store time
/// so a single image cannot pin unbounded memory.
pub struct MemoryAssetResolver {
    assets: DashMap<String, ResolvedAsset>,
    max_image_bytes: usize,
}

impl MemoryAssetResolver {
    /// Create an empty resolver with the given per-image size cap.
    pub fn new(max_image_bytes: usize) -> Self {
        Self {
            assets: DashMap::new(),
            max_image_bytes,
        }
    }

    /// Number of stored assets.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[async_trait]
impl AssetResolver for MemoryAssetResolver {
    async fn resolve(&self, url: &str) -> Option<ResolvedAsset> {
        let found = self.assets.get(url).map(|entry| entry.value().clone());
        if found.is_none() {
            tracing::debug!(url = %url, "Asset not found, skipping image slot");
        }
        found
    }

    async fn store(&self, asset: ResolvedAsset) -> bool {
        if asset.data.len() > self.max_image_bytes {
            tracing::warn!(
                url = %asset.url,
                size = asset.data.len(),
                limit = self.max_image_bytes,
                "Rejecting oversized asset"
            );
            return false;
        }

        self.assets.insert(asset.url.clone(), asset);
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
