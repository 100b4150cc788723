use super::*;

/// Inline style for a text run.
pub fn text_style(
    tokens: &DesignTokens,
    size: TextSize,
    weight: TextWeight,
    color: Option<&str>,
) -> InlineStyle {
    InlineStyle::new()
        .set("margin", "0")
        .set("font-family", tokens.typography.font_family.base.as_str())
        .set("font-size", size.font_size(tokens))
        .set("font-weight", weight.font_weight(tokens).to_string())
        .set("line-height", "1.5")
        .set(
            "color",
            color.unwrap_or(tokens.colors.neutral.gray900.as_str()),
        )
}

#[component]
/// Typography atom rendering its children as the chosen element.
pub fn Text(
    #[prop(default = TextElement::P)] element: TextElement,
    #[prop(default = TextSize::Base)] size: TextSize,
    #[prop(default = TextWeight::Normal)] weight: TextWeight,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let tokens = use_design_tokens();
    let style = text_style(&tokens, size, weight, color.as_deref()).to_string();
    let size = size.token();

    match element {
        TextElement::P => view! {
            <p style=style data-ui-primitive="true" data-ui-kind="text" data-ui-size=size data-ui-slot=ui_slot>
                {children()}
            </p>
        }
        .into_view(),
        TextElement::Span => view! {
            <span style=style data-ui-primitive="true" data-ui-kind="text" data-ui-size=size data-ui-slot=ui_slot>
                {children()}
            </span>
        }
        .into_view(),
        TextElement::Div => view! {
            <div style=style data-ui-primitive="true" data-ui-kind="text" data-ui-size=size data-ui-slot=ui_slot>
                {children()}
            </div>
        }
        .into_view(),
        TextElement::Label => view! {
            <label style=style data-ui-primitive="true" data-ui-kind="text" data-ui-size=size data-ui-slot=ui_slot>
                {children()}
            </label>
        }
        .into_view(),
        TextElement::H1 => view! {
            <h1 style=style data-ui-primitive="true" data-ui-kind="text" data-ui-size=size data-ui-slot=ui_slot>
                {children()}
            </h1>
        }
        .into_view(),
        TextElement::H2 => view! {
            <h2 style=style data-ui-primitive="true" data-ui-kind="text" data-ui-size=size data-ui-slot=ui_slot>
                {children()}
            </h2>
        }
        .into_view(),
        TextElement::H3 => view! {
            <h3 style=style data-ui-primitive="true" data-ui-kind="text" data-ui-size=size data-ui-slot=ui_slot>
                {children()}
            </h3>
        }
        .into_view(),
        TextElement::H4 => view! {
            <h4 style=style data-ui-primitive="true" data-ui-kind="text" data-ui-size=size data-ui-slot=ui_slot>
                {children()}
            </h4>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn large_text_uses_eighteen_pixels() {
        let style = text_style(
            &DesignTokens::default(),
            TextSize::Lg,
            TextWeight::Normal,
            None,
        );
        assert_eq!(style.get("font-size"), Some("18px"));
        assert_eq!(style.get("font-weight"), Some("400"));
    }

    #[test]
    fn explicit_color_overrides_default_ink() {
        let tokens = DesignTokens::default();
        let default = text_style(&tokens, TextSize::Base, TextWeight::Bold, None);
        let tinted = text_style(&tokens, TextSize::Base, TextWeight::Bold, Some("#155724"));

        assert_eq!(default.get("color"), Some("#212529"));
        assert_eq!(tinted.get("color"), Some("#155724"));
        assert_eq!(tinted.get("font-weight"), Some("700"));
    }
}
