//! Template types and error definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Layout mode requested by the inbound payload.
///
/// Unrecognized mode strings parse to `Basic` so that a malformed payload still
/// produces a deliverable notification instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum LayoutMode {
    /// Single collapsed/expanded view with at most one image
    #[default]
    Basic,
    /// Multi-image carousel that advances on its own
    AutoCarousel,
    /// Multi-image carousel paged by the user
    ManualCarousel,
}

impl LayoutMode {
    /// Lenient parse of the payload's mode string. Never fails.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto_carousel" | "auto" => LayoutMode::AutoCarousel,
            "manual_carousel" | "manual" => LayoutMode::ManualCarousel,
            _ => LayoutMode::Basic,
        }
    }
}

impl From<String> for LayoutMode {
    fn from(value: String) -> Self {
        LayoutMode::parse(&value)
    }
}

/// Paging style for manual carousels.
///
/// Only meaningful when the layout mode is `ManualCarousel`; unrecognized
/// strings parse to `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum CarouselLayout {
    /// Standard manual carousel paging
    #[default]
    Default,
    /// Filmstrip paging with previous/current/next views
    Filmstrip,
}

impl CarouselLayout {
    /// Lenient parse of the payload's carousel layout string. Never fails.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "filmstrip" => CarouselLayout::Filmstrip,
            _ => CarouselLayout::Default,
        }
    }
}

impl From<String> for CarouselLayout {
    fn from(value: String) -> Self {
        CarouselLayout::parse(&value)
    }
}

/// An action button attached to the notification.
///
/// Consumed by the platform adapter when wiring action intents; the rendering
/// core carries it through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    /// Button label text
    pub label: String,
    /// URL opened when the button is tapped
    pub url: String,
}

/// One notification's content as parsed from an inbound message payload.
///
/// Constructed once, read-only thereafter, discarded after the notification is
/// built. Color fields hold exactly six hex digits without a leading `#`; the
/// composer prepends the `#` when populating the descriptor and silently drops
/// values that do not match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushTemplate {
    /// Notification title
    pub title: String,

    /// Collapsed body text
    pub body: String,

    /// Body text shown in the expanded view (optional)
    #[serde(default)]
    pub expanded_body: String,

    /// Ordered image URLs; Basic uses at most the first, carousels use all
    #[serde(default)]
    pub image_urls: Vec<String>,

    /// Background color as six hex digits, no leading `#` (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Title text color as six hex digits, no leading `#` (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,

    /// Body text color as six hex digits, no leading `#` (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_color: Option<String>,

    /// Badge count shown on the app icon
    #[serde(default)]
    pub badge_count: u32,

    /// Requested layout mode
    #[serde(default)]
    pub layout: LayoutMode,

    /// Paging style, meaningful only when `layout` is `ManualCarousel`
    #[serde(default)]
    pub carousel_layout: CarouselLayout,

    /// Explicit notification channel (optional, adapter concern)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    /// Custom sound name (optional, adapter concern)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,

    /// Click-through URL (optional, adapter concern)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_url: Option<String>,

    /// Action buttons in display order (adapter concern)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_buttons: Vec<ActionButton>,
}

impl PushTemplate {
    /// Validate the template.
    ///
    /// Colors are deliberately not checked here: an invalid color degrades to
    /// an omitted descriptor slot at compose time rather than failing the build.
    pub fn validate(&self) -> TemplateResult<()> {
        if self.title.trim().is_empty() {
            return Err(TemplateError::InvalidTemplate(
                "Title must not be empty".to_string(),
            ));
        }

        if self.body.trim().is_empty() {
            return Err(TemplateError::InvalidTemplate(
                "Body must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_lenient_parse() {
        assert_eq!(LayoutMode::parse("basic"), LayoutMode::Basic);
        assert_eq!(LayoutMode::parse("auto_carousel"), LayoutMode::AutoCarousel);
        assert_eq!(LayoutMode::parse("auto"), LayoutMode::AutoCarousel);
        assert_eq!(
            LayoutMode::parse("manual_carousel"),
            LayoutMode::ManualCarousel
        );
        assert_eq!(LayoutMode::parse("MANUAL"), LayoutMode::ManualCarousel);

        // Unknown modes fall back to Basic instead of failing
        assert_eq!(LayoutMode::parse(""), LayoutMode::Basic);
        assert_eq!(LayoutMode::parse("hologram"), LayoutMode::Basic);
    }

    #[test]
    fn test_carousel_layout_lenient_parse() {
        assert_eq!(CarouselLayout::parse("filmstrip"), CarouselLayout::Filmstrip);
        assert_eq!(CarouselLayout::parse("default"), CarouselLayout::Default);
        assert_eq!(CarouselLayout::parse("ticker"), CarouselLayout::Default);
    }

    #[test]
    fn test_template_deserializes_with_defaults() {
        let template: PushTemplate = serde_json::from_str(
            r#"{"title": "Sale", "body": "50% off", "layout": "carousel-3000"}"#,
        )
        .unwrap();

        assert_eq!(template.layout, LayoutMode::Basic);
        assert_eq!(template.carousel_layout, CarouselLayout::Default);
        assert!(template.image_urls.is_empty());
        assert_eq!(template.badge_count, 0);
        assert!(template.background_color.is_none());
    }

    #[test]
    fn test_validate_rejects_blank_title_and_body() {
        let mut template: PushTemplate =
            serde_json::from_str(r#"{"title": "Sale", "body": "50% off"}"#).unwrap();
        assert!(template.validate().is_ok());

        template.title = "   ".to_string();
        assert!(template.validate().is_err());

        template.title = "Sale".to_string();
        template.body = String::new();
        assert!(template.validate().is_err());
    }
}
