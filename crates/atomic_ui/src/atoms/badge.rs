use super::*;

/// Inline style for a badge: base, then size, then variant.
pub fn badge_style(tokens: &DesignTokens, variant: BadgeVariant, size: BadgeSize) -> InlineStyle {
    let spacing = &tokens.spacing;
    let colors = &tokens.colors;
    let neutral = &colors.neutral;

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
        BadgeSize::Sm => InlineStyle::new()
            .set("padding", format!("{} {}", spacing.xs, spacing.sm))
            .set("font-size", tokens.typography.font_size.sm.as_str()),
        BadgeSize::Md => InlineStyle::new()
            .set("padding", format!("{} {}", spacing.sm, spacing.md))
            .set("font-size", tokens.typography.font_size.base.as_str()),
    };

    let (background, text, border) = match variant {
        BadgeVariant::Default => (
            neutral.gray200.clone(),
            neutral.gray800.clone(),
            format!("1px solid {}", neutral.gray300),
        ),
        BadgeVariant::Primary => (
            colors.info.icon.clone(),
            neutral.white.clone(),
            "none".to_string(),
        ),
        BadgeVariant::Success => palette_triple(colors.variant(AlertVariant::Success)),
        BadgeVariant::Warning => palette_triple(colors.variant(AlertVariant::Warning)),
        BadgeVariant::Error => palette_triple(colors.variant(AlertVariant::Error)),
    };
    let variant = InlineStyle::new()
        .set("background-color", background)
        .set("color", text)
        .set("border", border);

    base.merge(size).merge(variant)
}

fn palette_triple(colors: &VariantColors) -> (String, String, String) {
    (
        colors.background.clone(),
        colors.text.clone(),
        format!("1px solid {}", colors.border),
    )
}

#[component]
/// Compact inline label for statuses, counts, and tags.
///
/// A labeled badge is announced as a live `status`; an unlabeled one is plain text.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(default = BadgeSize::Md)] size: BadgeSize,
    #[prop(optional, into)] aria_label: Option<String>,
    /// Extra class appended after `ui-badge` for host layout rules.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let tokens = use_design_tokens();
    let style = badge_style(&tokens, variant, size).to_string();
    let role = aria_label.as_ref().map(|_| "status");

    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            style=style
            role=role
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
        >
            {children()}
        </span>
    }
}
