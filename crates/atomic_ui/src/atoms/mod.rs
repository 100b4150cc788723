//! Atom tier: icon, text, button, and badge primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::style::InlineStyle;
use crate::tokens::{use_design_tokens, AlertVariant, DesignTokens, VariantColors};

mod badge;
mod button;
mod icon;
mod text;

pub use badge::{badge_style, Badge};
pub use button::{button_style, Button};
pub use icon::{icon_stroke, Icon, IconSemantics};
pub use text::{text_style, Text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Closed glyph catalog.
pub enum IconName {
    /// Checkmark.
    Check,
    /// Warning triangle.
    Warning,
    /// Crossed circle.
    Error,
    /// Information circle.
    Info,
    /// Close cross.
    Close,
}

impl IconName {
    /// Stable token used for `data-icon` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
            Self::Close => "close",
        }
    }

    /// Default glyph for an alert variant.
    pub const fn for_variant(variant: AlertVariant) -> Self {
        match variant {
            AlertVariant::Success => Self::Check,
            AlertVariant::Warning => Self::Warning,
            AlertVariant::Error => Self::Error,
            AlertVariant::Info => Self::Info,
        }
    }

    /// Stroke-only SVG body on a 24px grid.
    fn svg_body(self) -> &'static str {
        match self {
            Self::Check => r#"<path d="M20 6L9 17l-5-5"/>"#,
            Self::Warning => {
                r#"<path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#
            }
            Self::Error => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M15 9l-6 6"/><path d="M9 9l6 6"/>"#
            }
            Self::Info => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#
            }
            Self::Close => r#"<path d="M18 6L6 18"/><path d="M6 6l12 12"/>"#,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Element a [`Text`] renders as.
pub enum TextElement {
    /// Paragraph.
    #[default]
    P,
    /// Inline span.
    Span,
    /// Block container.
    Div,
    /// Form label.
    Label,
    /// Level-1 heading.
    H1,
    /// Level-2 heading.
    H2,
    /// Level-3 heading.
    H3,
    /// Level-4 heading.
    H4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Font-size steps for [`Text`].
pub enum TextSize {
    /// 12px.
    Xs,
    /// 14px.
    Sm,
    /// 16px.
    #[default]
    Base,
    /// 18px.
    Lg,
    /// 20px.
    Xl,
}

impl TextSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Resolves the step against the typography scale.
    pub fn font_size(self, tokens: &DesignTokens) -> &str {
        let sizes = &tokens.typography.font_size;
        match self {
            Self::Xs => &sizes.xs,
            Self::Sm => &sizes.sm,
            Self::Base => &sizes.base,
            Self::Lg => &sizes.lg,
            Self::Xl => &sizes.xl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Font-weight steps for [`Text`].
pub enum TextWeight {
    /// 400.
    #[default]
    Normal,
    /// 500.
    Medium,
    /// 600.
    Semibold,
    /// 700.
    Bold,
}

impl TextWeight {
    /// Resolves the step against the typography scale.
    pub fn font_weight(self, tokens: &DesignTokens) -> u16 {
        let weights = &tokens.typography.font_weight;
        match self {
            Self::Normal => weights.normal,
            Self::Medium => weights.medium,
            Self::Semibold => weights.semibold,
            Self::Bold => weights.bold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button emphasis variants.
pub enum ButtonVariant {
    /// Filled accent button.
    #[default]
    Primary,
    /// Outlined neutral button.
    Secondary,
    /// Borderless transparent button.
    Ghost,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button sizing steps.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Badge color variants.
pub enum BadgeVariant {
    /// Neutral gray.
    #[default]
    Default,
    /// Filled accent.
    Primary,
    /// Success palette.
    Success,
    /// Warning palette.
    Warning,
    /// Error palette.
    Error,
}

impl BadgeVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Badge sizing steps.
pub enum BadgeSize {
    /// Compact badge.
    Sm,
    /// Default badge.
    #[default]
    Md,
}

impl BadgeSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Forwards a click to `handler` unless the control is disabled.
///
/// Returns whether the handler ran.
pub(crate) fn forward_click<E: 'static>(
    disabled: bool,
    handler: Option<&Callback<E>>,
    event: E,
) -> bool {
    if disabled {
        return false;
    }
    match handler {
        Some(handler) => {
            handler.call(event);
            true
        }
        None => false,
    }
}

/// Adapts a payload-free callback to an event handler.
pub(crate) fn relay<E: 'static>(target: Option<Callback<()>>, source: &'static str) -> Callback<E> {
    Callback::new(move |_: E| match target.as_ref() {
        Some(target) => target.call(()),
        None => {
            logging::warn!("{source} clicked without a handler");
        }
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let hits = Rc::clone(&count);
        let callback = Callback::new(move |_: ()| hits.set(hits.get() + 1));
        (count, callback)
    }

    #[test]
    fn enabled_click_fires_exactly_once_per_click() {
        let _ = leptos::create_runtime();
        let (count, callback) = counter();

        for clicks in 1..=3 {
            assert!(forward_click(false, Some(&callback), ()));
            assert_eq!(count.get(), clicks);
        }
    }

    #[test]
    fn disabled_click_never_fires() {
        let _ = leptos::create_runtime();
        let (count, callback) = counter();

        for _ in 0..5 {
            assert!(!forward_click(true, Some(&callback), ()));
        }
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn click_without_handler_is_ignored() {
        let _ = leptos::create_runtime();
        assert!(!forward_click::<()>(false, None, ()));
    }

    #[test]
    fn relay_invokes_target_once_per_event() {
        let _ = leptos::create_runtime();
        let (count, callback) = counter();
        let relayed: Callback<u8> = relay(Some(callback), "test control");

        relayed.call(1);
        assert_eq!(count.get(), 1);
        relayed.call(2);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn layout_class_appends_to_base_class() {
        assert_eq!(merge_layout_class("ui-badge", None), "ui-badge");
        assert_eq!(merge_layout_class("ui-badge", Some("")), "ui-badge");
        assert_eq!(
            merge_layout_class("ui-badge", Some("toolbar-count")),
            "ui-badge toolbar-count"
        );
    }

    #[test]
    fn variants_map_to_default_glyphs() {
        assert_eq!(IconName::for_variant(AlertVariant::Success), IconName::Check);
        assert_eq!(IconName::for_variant(AlertVariant::Warning), IconName::Warning);
        assert_eq!(IconName::for_variant(AlertVariant::Error), IconName::Error);
        assert_eq!(IconName::for_variant(AlertVariant::Info), IconName::Info);
    }

    #[test]
    fn text_scales_resolve_against_tokens() {
        let tokens = DesignTokens::default();
        assert_eq!(TextSize::Sm.font_size(&tokens), "14px");
        assert_eq!(TextSize::Lg.font_size(&tokens), "18px");
        assert_eq!(TextWeight::Medium.font_weight(&tokens), 500);
        assert_eq!(TextWeight::Bold.font_weight(&tokens), 700);
    }
}
