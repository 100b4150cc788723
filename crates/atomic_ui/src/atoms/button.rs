use super::*;

/// Inline style for a button: base, then size, then variant, then state.
pub fn button_style(
    tokens: &DesignTokens,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
) -> InlineStyle {
    let spacing = &tokens.spacing;
    let neutral = &tokens.colors.neutral;
    let font_size = &tokens.typography.font_size;

    let base = InlineStyle::new()
        .set("font-family", tokens.typography.font_family.base.as_str())
        .set(
            "font-weight",
            tokens.typography.font_weight.medium.to_string(),
        )
        .set("border-radius", "4px")
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("gap", spacing.xs.as_str())
        .set("transition", "background-color 0.2s, opacity 0.2s");

    let size = match size {
        ButtonSize::Sm => InlineStyle::new()
            .set("padding", format!("{} {}", spacing.xs, spacing.sm))
            .set("font-size", font_size.sm.as_str()),
        ButtonSize::Md => InlineStyle::new()
            .set("padding", format!("{} {}", spacing.sm, spacing.md))
            .set("font-size", font_size.base.as_str()),
        ButtonSize::Lg => InlineStyle::new()
            .set("padding", format!("{} {}", spacing.md, spacing.lg))
            .set("font-size", font_size.lg.as_str()),
    };

    let variant = match variant {
        ButtonVariant::Primary => InlineStyle::new()
            .set("background-color", tokens.colors.info.icon.as_str())
            .set("color", neutral.white.as_str())
            .set("border", "none"),
        ButtonVariant::Secondary => InlineStyle::new()
            .set("background-color", neutral.gray200.as_str())
            .set("color", neutral.gray800.as_str())
            .set("border", format!("1px solid {}", neutral.gray300)),
        ButtonVariant::Ghost => InlineStyle::new()
            .set("background-color", "transparent")
            .set("color", "inherit")
            .set("border", "none"),
    };

    let state = if disabled {
        InlineStyle::new()
            .set("opacity", "0.5")
            .set("cursor", "not-allowed")
    } else {
        InlineStyle::new().set("opacity", "1").set("cursor", "pointer")
    };

    base.merge(size).merge(variant).merge(state)
}

#[component]
/// Interactive button atom.
///
/// `on_click` runs once per click and never while `disabled` is set; the handler
/// checks the flag itself so programmatic clicks on a disabled control are
/// swallowed too.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let tokens = use_design_tokens();
    let style = move || button_style(&tokens, variant, size, disabled.get()).to_string();

    view! {
        <button
            type="button"
            style=style
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                forward_click(disabled.get_untracked(), on_click.as_ref(), ev);
            }
        >
            {children()}
        </button>
    }
}
