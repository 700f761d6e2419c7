//! Template rendering core.
//!
//! Data flow: a [`PushTemplate`](crate::template::PushTemplate) selects a
//! [`ComposerKind`], image URLs are resolved through the configured
//! [`AssetResolver`](crate::assets::AssetResolver), and the composer populates
//! a [`ViewDescriptor`] the platform adapter can render.

mod compose;
mod descriptor;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::assets::{AssetResolver, ResolvedAsset};
use crate::metrics::{
    ASSETS_MISSING_TOTAL, ASSETS_RESOLVED_TOTAL, RENDER_FAILURES_TOTAL, RENDERS_TOTAL,
};
use crate::template::{CarouselLayout, LayoutMode, PushTemplate};

pub use compose::{compose_basic, compose_carousel, RenderError, RenderResult};
pub use descriptor::{normalize_hex_color, ColorSlot, ImageSlot, TextSlot, ViewDescriptor};

/// Minimum resolved images for the filmstrip layout (previous/current/next views).
pub const DEFAULT_FILMSTRIP_MIN_IMAGES: usize = 3;

/// Minimum resolved images for the default manual carousel.
pub const DEFAULT_MANUAL_MIN_IMAGES: usize = 1;

/// The layout variant a template renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComposerKind {
    Basic,
    AutoCarousel,
    ManualCarousel,
    FilmstripCarousel,
}

impl ComposerKind {
    /// Select the composer for a template's mode and paging style.
    ///
    /// Pure and total: every input maps to exactly one variant. Unrecognized
    /// inbound mode strings already parsed to `LayoutMode::Basic`, so delivery
    /// stays best-effort with no failure path here.
    pub fn select(layout: LayoutMode, carousel_layout: CarouselLayout) -> Self {
        match layout {
            LayoutMode::Basic => ComposerKind::Basic,
            LayoutMode::AutoCarousel => ComposerKind::AutoCarousel,
            LayoutMode::ManualCarousel => match carousel_layout {
                CarouselLayout::Filmstrip => ComposerKind::FilmstripCarousel,
                CarouselLayout::Default => ComposerKind::ManualCarousel,
            },
        }
    }

    /// Stable label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComposerKind::Basic => "basic",
            ComposerKind::AutoCarousel => "auto_carousel",
            ComposerKind::ManualCarousel => "manual_carousel",
            ComposerKind::FilmstripCarousel => "filmstrip_carousel",
        }
    }
}

/// Minimum-image thresholds for the carousel composers.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Minimum resolved images for the filmstrip layout
    pub filmstrip_min_images: usize,
    /// Minimum resolved images for the default manual carousel
    pub manual_min_images: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            filmstrip_min_images: DEFAULT_FILMSTRIP_MIN_IMAGES,
            manual_min_images: DEFAULT_MANUAL_MIN_IMAGES,
        }
    }
}

/// Renders templates into view descriptors.
///
/// Stateless across calls: every render owns its template/descriptor pair, so
/// concurrent renders need no coordination.
pub struct TemplateRenderer {
    resolver: Arc<dyn AssetResolver>,
    config: RenderConfig,
}

impl TemplateRenderer {
    /// Create a renderer with default carousel thresholds.
    pub fn new(resolver: Arc<dyn AssetResolver>) -> Self {
        Self::with_config(resolver, RenderConfig::default())
    }

    /// Create a renderer with explicit carousel thresholds.
    pub fn with_config(resolver: Arc<dyn AssetResolver>, config: RenderConfig) -> Self {
        Self { resolver, config }
    }

    /// Render a template into a view descriptor.
    ///
    /// The only error is [`RenderError::TemplateConstructionFailed`]; asset
    /// and color problems degrade to omitted slots.
    pub async fn render(&self, template: &PushTemplate) -> RenderResult<ViewDescriptor> {
        let kind = ComposerKind::select(template.layout, template.carousel_layout);
        tracing::debug!(layout = kind.as_str(), "Rendering push template");

        let assets = self.resolve_assets(&template.image_urls).await;
        self.compose(kind, template, assets)
    }

    /// Render a template, falling back to the basic layout when the selected
    /// carousel cannot assemble a valid descriptor.
    ///
    /// Returns the descriptor and whether the fallback was taken.
    pub async fn render_with_fallback(&self, template: &PushTemplate) -> (ViewDescriptor, bool) {
        let kind = ComposerKind::select(template.layout, template.carousel_layout);
        let assets = self.resolve_assets(&template.image_urls).await;

        match self.compose(kind, template, assets.clone()) {
            Ok(descriptor) => (descriptor, false),
            Err(e) => {
                tracing::warn!(
                    layout = kind.as_str(),
                    error = %e,
                    "Carousel construction failed, falling back to basic layout"
                );
                let descriptor = compose_basic(template, assets);
                RENDERS_TOTAL
                    .with_label_values(&[descriptor.layout.as_str()])
                    .inc();
                (descriptor, true)
            }
        }
    }

    fn compose(
        &self,
        kind: ComposerKind,
        template: &PushTemplate,
        assets: Vec<(usize, ResolvedAsset)>,
    ) -> RenderResult<ViewDescriptor> {
        let result = match kind {
            ComposerKind::Basic => Ok(compose_basic(template, assets)),
            ComposerKind::AutoCarousel => {
                // Best effort over what resolved, no minimum
                compose_carousel(kind, template, assets, 0)
            }
            ComposerKind::ManualCarousel => {
                compose_carousel(kind, template, assets, self.config.manual_min_images)
            }
            ComposerKind::FilmstripCarousel => {
                compose_carousel(kind, template, assets, self.config.filmstrip_min_images)
            }
        };

        match &result {
            Ok(descriptor) => {
                RENDERS_TOTAL
                    .with_label_values(&[descriptor.layout.as_str()])
                    .inc();
            }
            Err(e) => {
                RENDER_FAILURES_TOTAL.with_label_values(&[kind.as_str()]).inc();
                tracing::warn!(layout = kind.as_str(), error = %e, "Render failed");
            }
        }

        result
    }

    /// Resolve every image URL, preserving input order and skipping failures.
    ///
    /// Resolution fans out concurrently; `join_all` returns results in input
    /// order, so the descriptor's slot order matches the template's.
    async fn resolve_assets(&self, urls: &[String]) -> Vec<(usize, ResolvedAsset)> {
        let lookups = urls.iter().map(|url| self.resolver.resolve(url));
        let resolved = futures::future::join_all(lookups).await;

        let mut assets = Vec::with_capacity(urls.len());
        for (index, outcome) in resolved.into_iter().enumerate() {
            match outcome {
                Some(asset) => {
                    ASSETS_RESOLVED_TOTAL.inc();
                    assets.push((index, asset));
                }
                None => {
                    ASSETS_MISSING_TOTAL.inc();
                    tracing::debug!(url = %urls[index], "Image did not resolve, slot skipped");
                }
            }
        }

        assets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_is_total() {
        use CarouselLayout::*;
        use LayoutMode::*;

        let modes = [Basic, AutoCarousel, ManualCarousel];
        let layouts = [Default, Filmstrip];

        for mode in modes {
            for layout in layouts {
                // Every pair maps to exactly one composer kind
                let kind = ComposerKind::select(mode, layout);
                match mode {
                    Basic => assert_eq!(kind, ComposerKind::Basic),
                    AutoCarousel => assert_eq!(kind, ComposerKind::AutoCarousel),
                    ManualCarousel => match layout {
                        Filmstrip => assert_eq!(kind, ComposerKind::FilmstripCarousel),
                        Default => assert_eq!(kind, ComposerKind::ManualCarousel),
                    },
                }
            }
        }
    }

    #[test]
    fn test_unknown_mode_string_selects_basic() {
        let kind = ComposerKind::select(
            LayoutMode::parse("definitely-not-a-mode"),
            CarouselLayout::parse("definitely-not-a-layout"),
        );
        assert_eq!(kind, ComposerKind::Basic);
    }
}
