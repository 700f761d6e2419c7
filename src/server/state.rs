use std::sync::Arc;
use std::time::Instant;

use crate::assets::{create_asset_resolver, AssetResolver};
use crate::config::Settings;
use crate::render::{RenderConfig, TemplateRenderer};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub resolver: Arc<dyn AssetResolver>,
    pub renderer: Arc<TemplateRenderer>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let resolver = create_asset_resolver(&settings.assets);
        let renderer = Arc::new(TemplateRenderer::with_config(
            resolver.clone(),
            RenderConfig {
                filmstrip_min_images: settings.render.filmstrip_min_images,
                manual_min_images: settings.render.manual_min_images,
            },
        ));

        Self {
            settings: Arc::new(settings),
            resolver,
            renderer,
            started_at: Instant::now(),
        }
    }
}
