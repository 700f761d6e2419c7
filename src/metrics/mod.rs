//! Prometheus metrics for the rendering service.
//!
//! Counters cover the two things operators actually watch here: how many
//! descriptors each layout produces (and fails to produce), and how often
//! image resolution comes up empty.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Encoder, Histogram,
    IntCounter, IntCounterVec, TextEncoder,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "prism";

lazy_static! {
    /// Descriptors successfully composed, by layout
    pub static ref RENDERS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_renders_total", METRIC_PREFIX),
        "Descriptors successfully composed, by layout",
        &["layout"]
    ).unwrap();

    /// Template construction failures, by requested layout
    pub static ref RENDER_FAILURES_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_render_failures_total", METRIC_PREFIX),
        "Template construction failures, by requested layout",
        &["layout"]
    ).unwrap();

    /// Image URLs that resolved to an asset
    pub static ref ASSETS_RESOLVED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_assets_resolved_total", METRIC_PREFIX),
        "Image URLs that resolved to an asset"
    ).unwrap();

    /// Image URLs that did not resolve (slot skipped)
    pub static ref ASSETS_MISSING_TOTAL: IntCounter = register_int_counter!(
        format!("{}_assets_missing_total", METRIC_PREFIX),
        "Image URLs that did not resolve"
    ).unwrap();

    /// End-to-end render request duration in seconds
    pub static ref RENDER_DURATION_SECONDS: Histogram = register_histogram!(
        format!("{}_render_duration_seconds", METRIC_PREFIX),
        "End-to-end render request duration in seconds",
        vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]
    ).unwrap();
}

/// Encode all registered metrics in the Prometheus text format.
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}
