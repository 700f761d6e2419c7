//! Template rendering endpoint.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::metrics::RENDER_DURATION_SECONDS;
use crate::render::{ComposerKind, ViewDescriptor};
use crate::server::AppState;
use crate::template::PushTemplate;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    /// The template to render
    pub template: PushTemplate,

    /// Degrade to the basic layout instead of failing when a carousel cannot
    /// meet its minimum image count
    #[serde(default)]
    pub fallback_to_basic: bool,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    /// Server-assigned id for this render
    pub request_id: Uuid,

    /// When the descriptor was produced
    pub rendered_at: DateTime<Utc>,

    /// Layout the descriptor was composed for
    pub layout: ComposerKind,

    /// Whether the basic-layout fallback was taken
    pub degraded: bool,

    /// The populated view descriptor
    pub descriptor: ViewDescriptor,
}

/// POST /api/v1/render - render a template into a view descriptor
pub async fn render_template(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<RenderResponse>> {
    request.template.validate()?;

    let timer = RENDER_DURATION_SECONDS.start_timer();
    let (descriptor, degraded) = if request.fallback_to_basic {
        state.renderer.render_with_fallback(&request.template).await
    } else {
        (state.renderer.render(&request.template).await?, false)
    };
    timer.observe_duration();

    let request_id = Uuid::new_v4();
    tracing::info!(
        request_id = %request_id,
        layout = descriptor.layout.as_str(),
        images = descriptor.image_count(),
        degraded = degraded,
        "Rendered push template"
    );

    Ok(Json(RenderResponse {
        request_id,
        rendered_at: Utc::now(),
        layout: descriptor.layout,
        degraded,
        descriptor,
    }))
}
