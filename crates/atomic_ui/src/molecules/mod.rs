//! Molecule tier: alert message units composed from atoms.

use leptos::*;

use crate::atoms::{relay, Button, ButtonSize, ButtonVariant, Icon, IconName, Text, TextWeight};
use crate::style::InlineStyle;
use crate::tokens::{use_design_tokens, AlertVariant, DesignTokens};

mod alert;
mod alert_with_action;

pub use alert::Alert;
pub(crate) use alert::alert_view;
pub use alert_with_action::AlertWithAction;

/// Accessible name of every dismiss control.
pub const DISMISS_LABEL: &str = "Dismiss alert";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Cross-axis alignment of the alert row.
pub enum AlertAlign {
    /// Icon and controls pinned to the first line.
    Start,
    /// Icon and controls vertically centered.
    Center,
}

impl AlertAlign {
    fn css(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything an alert derives from its props before rendering.
pub struct AlertLayout {
    /// Glyph shown next to the copy.
    pub icon: IconName,
    /// Accessible name of the glyph, e.g. `"success alert"`.
    pub icon_label: String,
    /// Copy color.
    pub text_color: String,
    /// Container declarations.
    pub container: InlineStyle,
    /// Whether the dismiss control is rendered.
    pub dismissible: bool,
}

impl AlertLayout {
    /// Derives the layout for one alert.
    pub fn new(
        tokens: &DesignTokens,
        variant: AlertVariant,
        icon: Option<IconName>,
        dismissible: bool,
        align: AlertAlign,
    ) -> Self {
        let palette = tokens.colors.variant(variant);
        let container = InlineStyle::new()
            .set("display", "flex")
            .set("align-items", align.css())
            .set("gap", tokens.spacing.md.as_str())
            .set("padding", tokens.spacing.lg.as_str())
            .set("background-color", palette.background.as_str())
            .set("border", format!("1px solid {}", palette.border))
            .set("border-radius", "6px")
            .set("position", "relative");

        Self {
            icon: icon.unwrap_or(IconName::for_variant(variant)),
            icon_label: format!("{} alert", variant.token()),
            text_color: palette.text.clone(),
            container,
            dismissible,
        }
    }
}

fn content_style(tokens: &DesignTokens) -> String {
    InlineStyle::new()
        .set("flex", "1")
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("gap", tokens.spacing.xs.as_str())
        .to_string()
}

#[component]
fn AlertBody(
    variant: AlertVariant,
    icon: IconName,
    icon_label: String,
    text_color: String,
    message: String,
    title: Option<String>,
) -> impl IntoView {
    let tokens = use_design_tokens();
    let title_color = text_color.clone();

    view! {
        <Icon name=icon variant=variant size=24 aria_label=icon_label />
        <div style=content_style(&tokens) data-ui-slot="content">
            {title.map(|title| view! {
                <Text weight=TextWeight::Bold color=title_color ui_slot="title">{title}</Text>
            })}
            <Text color=text_color ui_slot="message">{message}</Text>
        </div>
    }
}

#[component]
fn DismissButton(text_color: String, on_dismiss: Option<Callback<()>>) -> impl IntoView {
    view! {
        <Button
            variant=ButtonVariant::Ghost
            size=ButtonSize::Sm
            aria_label=DISMISS_LABEL
            ui_slot="dismiss"
            on_click=relay(on_dismiss, DISMISS_LABEL)
        >
            <Icon name=IconName::Close size=16 color=text_color />
        </Button>
    }
}
