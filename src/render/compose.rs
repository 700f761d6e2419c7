//! Layout composers.
//!
//! Each composer turns a template plus the assets that resolved into a
//! [`ViewDescriptor`]. Missing assets and invalid colors degrade by omission;
//! the only hard failure is a carousel that cannot meet its minimum image
//! count.

use thiserror::Error;

use crate::assets::ResolvedAsset;
use crate::template::PushTemplate;

use super::descriptor::{ColorSlot, TextSlot, ViewDescriptor};
use super::ComposerKind;

/// Rendering error type.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A composer could not assemble a minimally valid descriptor. The caller
    /// falls back to a simpler layout or drops the rich content, never crashes.
    #[error("Template construction failed: {0}")]
    TemplateConstructionFailed(String),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Populate the text, color, and badge slots shared by every layout.
fn apply_shared_slots(descriptor: &mut ViewDescriptor, template: &PushTemplate) {
    descriptor.set_text(TextSlot::Title, &template.title);
    descriptor.set_text(TextSlot::Body, &template.body);
    descriptor.set_text(TextSlot::ExpandedBody, &template.expanded_body);

    descriptor.set_color(ColorSlot::Background, template.background_color.as_deref());
    descriptor.set_color(ColorSlot::Title, template.title_color.as_deref());
    descriptor.set_color(ColorSlot::Body, template.body_color.as_deref());

    descriptor.badge_count = template.badge_count;
}

/// Compose the basic layout: shared slots plus at most one image.
///
/// No image resolving is not an error; the image slot is simply absent.
pub fn compose_basic(
    template: &PushTemplate,
    assets: Vec<(usize, ResolvedAsset)>,
) -> ViewDescriptor {
    let mut descriptor = ViewDescriptor::new(ComposerKind::Basic);
    apply_shared_slots(&mut descriptor, template);

    if let Some((source_index, asset)) = assets.into_iter().next() {
        descriptor.push_image(source_index, asset);
    }

    descriptor
}

/// Compose a carousel layout: shared slots plus one image slot per resolved
/// asset, original order preserved.
///
/// Fails with [`RenderError::TemplateConstructionFailed`] when fewer than
/// `min_images` assets resolved.
pub fn compose_carousel(
    kind: ComposerKind,
    template: &PushTemplate,
    assets: Vec<(usize, ResolvedAsset)>,
    min_images: usize,
) -> RenderResult<ViewDescriptor> {
    if assets.len() < min_images {
        return Err(RenderError::TemplateConstructionFailed(format!(
            "{} layout requires at least {} resolved images, got {}",
            kind.as_str(),
            min_images,
            assets.len()
        )));
    }

    let mut descriptor = ViewDescriptor::new(kind);
    apply_shared_slots(&mut descriptor, template);

    for (source_index, asset) in assets {
        descriptor.push_image(source_index, asset);
    }

    Ok(descriptor)
}
