//! Notification template model.
//!
//! A [`PushTemplate`] arrives fully populated from an upstream message-parsing
//! collaborator, is validated once, and is read-only for the rest of the build.

mod types;

pub use types::{
    ActionButton, CarouselLayout, LayoutMode, PushTemplate, TemplateError, TemplateResult,
};
