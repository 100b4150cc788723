use super::*;

#[component]
/// Alert molecule: a variant icon, optional bold title, message, and an optional
/// dismiss control.
///
/// The dismiss control exists only when `dismissible` is set, so `on_dismiss`
/// can never fire for a non-dismissible alert.
pub fn Alert(
    /// Palette and default glyph.
    variant: AlertVariant,
    /// Main copy.
    #[prop(into)]
    message: String,
    /// Bold heading above the message.
    #[prop(optional, into)]
    title: Option<String>,
    /// Renders the "Dismiss alert" control.
    #[prop(optional)]
    dismissible: bool,
    /// Invoked once per click on the dismiss control.
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
    /// Glyph override.
    #[prop(optional)]
    icon: Option<IconName>,
) -> impl IntoView {
    alert_view(variant, message, title, dismissible, on_dismiss, icon)
}

/// Renders an alert with an already resolved optional title.
pub(crate) fn alert_view(
    variant: AlertVariant,
    message: String,
    title: Option<String>,
    dismissible: bool,
    on_dismiss: Option<Callback<()>>,
    icon: Option<IconName>,
) -> View {
    let tokens = use_design_tokens();
    let AlertLayout {
        icon,
        icon_label,
        text_color,
        container,
        dismissible,
    } = AlertLayout::new(&tokens, variant, icon, dismissible, AlertAlign::Start);
    let dismiss_color = text_color.clone();

    view! {
        <div
            role="alert"
            style=container.to_string()
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-variant=variant.token()
        >
            <AlertBody
                variant=variant
                icon=icon
                icon_label=icon_label
                text_color=text_color
                message=message
                title=title
            />
            {dismissible
                .then(|| view! { <DismissButton text_color=dismiss_color on_dismiss=on_dismiss /> })}
        </div>
    }
    .into_view()
}
