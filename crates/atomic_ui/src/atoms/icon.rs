use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
/// How an icon is exposed to assistive technology.
pub enum IconSemantics {
    /// Exposed as an image named by the label.
    Image(String),
    /// Purely decorative and hidden.
    Decorative,
}

impl IconSemantics {
    /// Labeled icons are images, unlabeled ones are decorative.
    pub fn from_label(aria_label: Option<String>) -> Self {
        match aria_label {
            Some(label) => Self::Image(label),
            None => Self::Decorative,
        }
    }

    /// Value for the `role` attribute.
    pub fn role(&self) -> Option<&'static str> {
        match self {
            Self::Image(_) => Some("img"),
            Self::Decorative => None,
        }
    }

    /// Value for the `aria-label` attribute.
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Image(label) => Some(label.clone()),
            Self::Decorative => None,
        }
    }

    /// Value for the `aria-hidden` attribute.
    pub fn aria_hidden(&self) -> Option<&'static str> {
        match self {
            Self::Image(_) => None,
            Self::Decorative => Some("true"),
        }
    }
}

/// Resolves the stroke color: explicit color, then variant accent, then `currentColor`.
pub fn icon_stroke(
    tokens: &DesignTokens,
    variant: Option<AlertVariant>,
    color: Option<String>,
) -> String {
    color
        .or_else(|| variant.map(|variant| tokens.colors.variant(variant).icon.clone()))
        .unwrap_or_else(|| "currentColor".to_string())
}

#[component]
/// Stroke glyph from the closed [`IconName`] catalog.
pub fn Icon(
    /// Glyph to draw.
    name: IconName,
    /// Edge length in pixels.
    #[prop(default = 20)]
    size: u16,
    /// Tints the stroke with the variant accent color.
    #[prop(optional)]
    variant: Option<AlertVariant>,
    /// Explicit stroke color; wins over `variant`.
    #[prop(optional, into)]
    color: Option<String>,
    /// Accessible name; unlabeled icons are hidden from assistive technology.
    #[prop(optional, into)]
    aria_label: Option<String>,
) -> impl IntoView {
    let tokens = use_design_tokens();
    let stroke = icon_stroke(&tokens, variant, color);
    let semantics = IconSemantics::from_label(aria_label);
    let size_px = size.to_string();
    let style = InlineStyle::new()
        .set("flex-shrink", "0")
        .set("display", "inline-block");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="none"
            stroke=stroke
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            style=style.to_string()
            role=semantics.role()
            aria-label=semantics.label()
            aria-hidden=semantics.aria_hidden()
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-icon=name.token()
            inner_html=name.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn labeled_icon_is_an_image() {
        let semantics = IconSemantics::from_label(Some("Success icon".to_string()));
        assert_eq!(semantics.role(), Some("img"));
        assert_eq!(semantics.label().as_deref(), Some("Success icon"));
        assert_eq!(semantics.aria_hidden(), None);
    }

    #[test]
    fn unlabeled_icon_is_hidden() {
        let semantics = IconSemantics::from_label(None);
        assert_eq!(semantics.role(), None);
        assert_eq!(semantics.label(), None);
        assert_eq!(semantics.aria_hidden(), Some("true"));
    }

    #[test]
    fn variant_sets_stroke_color() {
        let tokens = DesignTokens::default();
        assert_eq!(
            icon_stroke(&tokens, Some(AlertVariant::Success), None),
            "#28a745"
        );
    }

    #[test]
    fn explicit_color_wins_over_variant() {
        let tokens = DesignTokens::default();
        assert_eq!(
            icon_stroke(
                &tokens,
                Some(AlertVariant::Success),
                Some("#ff0000".to_string())
            ),
            "#ff0000"
        );
    }

    #[test]
    fn no_variant_or_color_inherits_current_color() {
        assert_eq!(
            icon_stroke(&DesignTokens::default(), None, None),
            "currentColor"
        );
    }

    #[test]
    fn every_glyph_draws_at_least_one_path() {
        for name in [
            IconName::Check,
            IconName::Warning,
            IconName::Error,
            IconName::Info,
            IconName::Close,
        ] {
            assert!(name.svg_body().contains("<path"), "{}", name.token());
        }
    }
}
