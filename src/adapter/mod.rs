//! Platform adapter seam.
//!
//! The rendering core stays platform-agnostic; a [`PlatformAdapter`] owns the
//! native builder for one target platform (channel policy, small icon,
//! visibility, sound, intents) and receives the descriptor through typed
//! calls. [`assemble`] drives the adapter in the fixed order the platforms
//! require: channel, content views, colors, small icon, visibility, action
//! buttons, sound, click action, delete action.

use crate::render::{ColorSlot, ViewDescriptor};
use crate::template::PushTemplate;

/// One target platform's notification builder.
///
/// Each method mutates the in-progress native builder from the template and
/// the descriptor. Color application is typed per [`ColorSlot`]; there is no
/// string-keyed property dispatch.
pub trait PlatformAdapter {
    /// The native notification object this adapter produces.
    type Output;

    /// Create or look up the notification channel, returning its id.
    fn create_channel(&mut self, template: &PushTemplate) -> String;

    /// Populate the collapsed/expanded content views from the descriptor.
    fn apply_content(&mut self, descriptor: &ViewDescriptor);

    /// Apply one populated color slot. Called once per slot present in the
    /// descriptor, never with an invalid value.
    fn apply_color(&mut self, slot: ColorSlot, value: &str);

    /// Set the small icon. Platforms drop notifications without one.
    fn set_small_icon(&mut self, template: &PushTemplate);

    /// Set lockscreen visibility.
    fn set_visibility(&mut self, template: &PushTemplate);

    /// Wire the template's action buttons, if any.
    fn add_action_buttons(&mut self, template: &PushTemplate);

    /// Set the notification sound.
    fn set_sound(&mut self, template: &PushTemplate);

    /// Wire the click-through intent.
    fn set_click_action(&mut self, template: &PushTemplate);

    /// Wire the dismiss-tracking intent.
    fn set_delete_action(&mut self, template: &PushTemplate);

    /// Finish the build and hand back the native notification.
    fn finish(self) -> Self::Output;
}

/// Drive an adapter through the required build sequence.
///
/// The call order is fixed; adapters may ignore calls they have no use for
/// but must be invoked in this order to match platform builder expectations.
pub fn assemble<A: PlatformAdapter>(
    mut adapter: A,
    template: &PushTemplate,
    descriptor: &ViewDescriptor,
) -> A::Output {
    let channel_id = adapter.create_channel(template);
    tracing::debug!(
        channel_id = %channel_id,
        layout = descriptor.layout.as_str(),
        "Assembling native notification"
    );

    adapter.apply_content(descriptor);

    for (slot, value) in &descriptor.colors {
        adapter.apply_color(*slot, value);
    }

    adapter.set_small_icon(template);
    adapter.set_visibility(template);
    adapter.add_action_buttons(template);
    adapter.set_sound(template);
    adapter.set_click_action(template);
    adapter.set_delete_action(template);

    adapter.finish()
}

/// Adapter that records the calls it receives, for order verification in tests
/// and for dry-run diagnostics.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    calls: Vec<String>,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlatformAdapter for RecordingAdapter {
    type Output = Vec<String>;

    fn create_channel(&mut self, template: &PushTemplate) -> String {
        let channel_id = template
            .channel_id
            .clone()
            .unwrap_or_else(|| "default".to_string());
        self.calls.push(format!("create_channel:{channel_id}"));
        channel_id
    }

    fn apply_content(&mut self, descriptor: &ViewDescriptor) {
        self.calls.push(format!(
            "apply_content:{}:{}",
            descriptor.layout.as_str(),
            descriptor.image_count()
        ));
    }

    fn apply_color(&mut self, slot: ColorSlot, value: &str) {
        self.calls.push(format!("apply_color:{slot:?}:{value}"));
    }

    fn set_small_icon(&mut self, _template: &PushTemplate) {
        self.calls.push("set_small_icon".to_string());
    }

    fn set_visibility(&mut self, _template: &PushTemplate) {
        self.calls.push("set_visibility".to_string());
    }

    fn add_action_buttons(&mut self, template: &PushTemplate) {
        self.calls
            .push(format!("add_action_buttons:{}", template.action_buttons.len()));
    }

    fn set_sound(&mut self, _template: &PushTemplate) {
        self.calls.push("set_sound".to_string());
    }

    fn set_click_action(&mut self, _template: &PushTemplate) {
        self.calls.push("set_click_action".to_string());
    }

    fn set_delete_action(&mut self, _template: &PushTemplate) {
        self.calls.push("set_delete_action".to_string());
    }

    fn finish(self) -> Self::Output {
        self.calls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{compose_basic, ComposerKind};

    fn template() -> PushTemplate {
        serde_json::from_str(
            r#"{
                "title": "Sale",
                "body": "50% off",
                "background_color": "FF0000",
                "title_color": "00FF00",
                "channel_id": "offers",
                "action_buttons": [{"label": "Shop", "url": "https://shop.example"}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_assemble_invokes_fixed_order() {
        let template = template();
        let descriptor = compose_basic(&template, Vec::new());
        assert_eq!(descriptor.layout, ComposerKind::Basic);

        let calls = assemble(RecordingAdapter::new(), &template, &descriptor);

        assert_eq!(
            calls,
            vec![
                "create_channel:offers",
                "apply_content:basic:0",
                "apply_color:Background:#FF0000",
                "apply_color:Title:#00FF00",
                "set_small_icon",
                "set_visibility",
                "add_action_buttons:1",
                "set_sound",
                "set_click_action",
                "set_delete_action",
            ]
        );
    }

    #[test]
    fn test_assemble_skips_absent_color_slots() {
        let mut template = template();
        template.background_color = None;
        template.title_color = Some("ZZZZZZ".to_string());

        let descriptor = compose_basic(&template, Vec::new());
        let calls = assemble(RecordingAdapter::new(), &template, &descriptor);

        assert!(!calls.iter().any(|c| c.starts_with("apply_color")));
    }
}
