use super::*;

#[component]
/// [`Alert`](super::Alert) with an always-present action control next to the
/// optional dismiss control.
pub fn AlertWithAction(
    variant: AlertVariant,
    #[prop(into)] message: String,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] dismissible: bool,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    #[prop(optional)] icon: Option<IconName>,
    /// Visible text and accessible name of the action control.
    #[prop(into)]
    action_label: String,
    /// Invoked once per click on the action control.
    on_action: Callback<()>,
    #[prop(default = ButtonVariant::Primary)] action_variant: ButtonVariant,
) -> impl IntoView {
    let tokens = use_design_tokens();
    let AlertLayout {
        icon,
        icon_label,
        text_color,
        container,
        dismissible,
    } = AlertLayout::new(&tokens, variant, icon, dismissible, AlertAlign::Center);
    let dismiss_color = text_color.clone();
    let action_name = action_label.clone();

    view! {
        <div
            role="alert"
            style=container.to_string()
            data-ui-primitive="true"
            data-ui-kind="alert-with-action"
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
            <div data-ui-slot="actions">
                <Button
                    variant=action_variant
                    size=ButtonSize::Sm
                    aria_label=action_name
                    ui_slot="action"
                    on_click=relay(Some(on_action), "alert action")
                >
                    {action_label}
                </Button>
                {dismissible
                    .then(|| view! { <DismissButton text_color=dismiss_color on_dismiss=on_dismiss /> })}
            </div>
        </div>
    }
}
