//! HTTP API surface.

mod assets;
mod health;
mod metrics;
mod render;
mod routes;

pub use assets::{StoreAssetRequest, StoreAssetResponse};
pub use health::HealthResponse;
pub use render::{RenderRequest, RenderResponse};
pub use routes::api_routes;
