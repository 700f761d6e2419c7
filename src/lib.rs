// Infrastructure layer (shared components)
pub mod config;
pub mod error;
pub mod metrics;
pub mod telemetry;

// Domain layer (template rendering core)
pub mod adapter;
pub mod assets;
pub mod render;
pub mod template;

// Application layer
pub mod api;
pub mod server;
