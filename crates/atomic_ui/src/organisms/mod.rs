//! Organism tier: blocks composed from molecules.

use std::rc::Rc;

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::atoms::{Text, TextElement, TextSize, TextWeight};
use crate::molecules::alert_view;
use crate::style::InlineStyle;
use crate::tokens::{use_design_tokens, AlertVariant, DesignTokens};

mod notification_center;

pub use notification_center::{
    dismiss_handler, pluralize, NotificationCenter, NotificationWindow, DEFAULT_MAX_VISIBLE,
    DEFAULT_TITLE, EMPTY_MESSAGE, LIST_LABEL,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A caller-owned message rendered by [`NotificationCenter`].
///
/// `id` is the only field used for identity; the component layer never mutates
/// or stores notifications.
pub struct Notification {
    /// Caller-assigned unique identifier.
    pub id: String,
    /// Palette and glyph.
    pub variant: AlertVariant,
    /// Body copy.
    pub message: String,
    /// Optional bold heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Notification {
    /// Creates an untitled notification.
    pub fn new(id: impl Into<String>, variant: AlertVariant, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            variant,
            message: message.into(),
            title: None,
        }
    }

    /// Adds a heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
