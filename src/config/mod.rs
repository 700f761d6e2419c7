mod settings;

pub use settings::{AssetsConfig, RenderSettings, ServerConfig, Settings};
