use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::render::{DEFAULT_FILMSTRIP_MIN_IMAGES, DEFAULT_MANUAL_MIN_IMAGES};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Maximum accepted request body size in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Resolver backend: "memory" or "null"
    #[serde(default = "default_asset_backend")]
    pub backend: String,
    /// Per-image size cap for stored assets in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            backend: default_asset_backend(),
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderSettings {
    /// Minimum resolved images for the filmstrip layout
    #[serde(default = "default_filmstrip_min_images")]
    pub filmstrip_min_images: usize,
    /// Minimum resolved images for the default manual carousel
    #[serde(default = "default_manual_min_images")]
    pub manual_min_images: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            filmstrip_min_images: default_filmstrip_min_images(),
            manual_min_images: default_manual_min_images(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_body_limit() -> usize {
    1024 * 1024 // 1 MiB
}

fn default_asset_backend() -> String {
    "memory".to_string()
}

fn default_max_image_bytes() -> usize {
    5 * 1024 * 1024 // 5 MiB
}

fn default_filmstrip_min_images() -> usize {
    DEFAULT_FILMSTRIP_MIN_IMAGES
}

fn default_manual_min_images() -> usize {
    DEFAULT_MANUAL_MIN_IMAGES
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8082)?
            .set_default("assets.backend", "memory")?
            .set_default("render.filmstrip_min_images", DEFAULT_FILMSTRIP_MIN_IMAGES as i64)?
            .set_default("render.manual_min_images", DEFAULT_MANUAL_MIN_IMAGES as i64)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables (e.g. APP__SERVER__PORT=9000)
            .add_source(Environment::with_prefix("APP").separator("__"));

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
