//! Neutral view descriptor populated by the composers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assets::ResolvedAsset;

use super::ComposerKind;

/// Text slots a composer can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSlot {
    Title,
    Body,
    ExpandedBody,
}

/// Color slots a composer can populate.
///
/// A closed set with one typed setter replaces the original's string-keyed
/// property dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSlot {
    Background,
    Title,
    Body,
}

/// One populated image slot.
///
/// Slots appear in the order of the template's `image_urls`, with unresolved
/// entries skipped; `source_index` records the position in the original list.
#[derive(Debug, Clone, Serialize)]
pub struct ImageSlot {
    /// Index into the template's `image_urls`
    pub source_index: usize,
    /// The resolved asset filling this slot
    pub asset: ResolvedAsset,
}

/// Platform-agnostic representation of populated notification UI slots.
///
/// Built fresh per render call, owned by the composer that creates it, handed
/// by reference to the platform adapter, and discarded after.
#[derive(Debug, Clone, Serialize)]
pub struct ViewDescriptor {
    /// Layout the adapter should render
    pub layout: ComposerKind,
    /// Populated text slots; empty source strings are omitted
    pub texts: BTreeMap<TextSlot, String>,
    /// Populated color slots; values are always `#` plus six hex digits
    pub colors: BTreeMap<ColorSlot, String>,
    /// Populated image slots in original order
    pub images: Vec<ImageSlot>,
    /// Badge count carried through for the adapter
    pub badge_count: u32,
}

impl ViewDescriptor {
    /// Create an empty descriptor for the given layout.
    pub fn new(layout: ComposerKind) -> Self {
        Self {
            layout,
            texts: BTreeMap::new(),
            colors: BTreeMap::new(),
            images: Vec::new(),
            badge_count: 0,
        }
    }

    /// Populate a text slot. Empty or whitespace-only text leaves the slot absent.
    pub fn set_text(&mut self, slot: TextSlot, text: &str) {
        if !text.trim().is_empty() {
            self.texts.insert(slot, text.to_string());
        }
    }

    /// Populate a color slot from a raw hex string.
    ///
    /// Accepts exactly six hex digits and stores them as `#` plus the digits.
    /// A missing, empty, or malformed value leaves the slot absent so the
    /// platform's default theming applies.
    pub fn set_color(&mut self, slot: ColorSlot, hex: Option<&str>) {
        if let Some(normalized) = normalize_hex_color(hex) {
            self.colors.insert(slot, normalized);
        }
    }

    /// Append an image slot, preserving insertion order.
    pub fn push_image(&mut self, source_index: usize, asset: ResolvedAsset) {
        self.images.push(ImageSlot {
            source_index,
            asset,
        });
    }

    /// Text slot accessor.
    pub fn text(&self, slot: TextSlot) -> Option<&str> {
        self.texts.get(&slot).map(String::as_str)
    }

    /// Color slot accessor.
    pub fn color(&self, slot: ColorSlot) -> Option<&str> {
        self.colors.get(&slot).map(String::as_str)
    }

    /// Number of populated image slots.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// Normalize an optional raw hex color to `#RRGGBB`.
///
/// Returns `None` unless the input is exactly six hex digits, so an invalid
/// color is never applied.
pub fn normalize_hex_color(hex: Option<&str>) -> Option<String> {
    let hex = hex?.trim();
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(format!("#{hex}"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hex_color() {
        assert_eq!(normalize_hex_color(Some("FF0000")), Some("#FF0000".into()));
        assert_eq!(normalize_hex_color(Some("00aa7f")), Some("#00aa7f".into()));
        assert_eq!(normalize_hex_color(None), None);
        assert_eq!(normalize_hex_color(Some("")), None);
        assert_eq!(normalize_hex_color(Some("FF000")), None);
        assert_eq!(normalize_hex_color(Some("FF00000")), None);
        assert_eq!(normalize_hex_color(Some("GG0000")), None);
        assert_eq!(normalize_hex_color(Some("#FF0000")), None);
    }

    #[test]
    fn test_invalid_color_leaves_slot_absent() {
        let mut descriptor = ViewDescriptor::new(ComposerKind::Basic);
        descriptor.set_color(ColorSlot::Background, Some("FF0000"));
        descriptor.set_color(ColorSlot::Title, Some("not-a-color"));
        descriptor.set_color(ColorSlot::Body, None);

        assert_eq!(descriptor.color(ColorSlot::Background), Some("#FF0000"));
        assert_eq!(descriptor.color(ColorSlot::Title), None);
        assert_eq!(descriptor.color(ColorSlot::Body), None);
    }

    #[test]
    fn test_empty_text_leaves_slot_absent() {
        let mut descriptor = ViewDescriptor::new(ComposerKind::Basic);
        descriptor.set_text(TextSlot::Title, "Sale");
        descriptor.set_text(TextSlot::ExpandedBody, "   ");

        assert_eq!(descriptor.text(TextSlot::Title), Some("Sale"));
        assert_eq!(descriptor.text(TextSlot::ExpandedBody), None);
    }

    #[test]
    fn test_descriptor_serializes_slots_as_string_keys() {
        let mut descriptor = ViewDescriptor::new(ComposerKind::Basic);
        descriptor.set_text(TextSlot::Body, "50% off");
        descriptor.set_color(ColorSlot::Background, Some("FF0000"));

        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["texts"]["body"], "50% off");
        assert_eq!(json["colors"]["background"], "#FF0000");
        assert_eq!(json["layout"], "basic");
    }
}
