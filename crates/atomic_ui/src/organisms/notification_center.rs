use super::*;

/// Heading used when the caller does not supply a title.
pub const DEFAULT_TITLE: &str = "Notifications";
/// Number of alerts rendered before the overflow summary takes over.
pub const DEFAULT_MAX_VISIBLE: usize = 5;
/// Copy shown instead of the list when there is nothing to show.
pub const EMPTY_MESSAGE: &str = "No notifications";
/// Accessible name of the alert list.
pub const LIST_LABEL: &str = "Notification list";

/// Formats `count` with `noun`, adding an `s` unless the count is exactly one.
pub fn pluralize(count: usize, noun: &str) -> String {
    format!("{count} {}", noun_form(count, noun))
}

fn noun_form(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The slice of a notification list that fits under the visibility cap.
pub struct NotificationWindow<'a> {
    visible: &'a [Notification],
    total: usize,
    hidden: usize,
}

impl<'a> NotificationWindow<'a> {
    /// Keeps the first `max_visible` notifications in caller order.
    pub fn new(notifications: &'a [Notification], max_visible: usize) -> Self {
        let total = notifications.len();
        let shown = max_visible.min(total);
        Self {
            visible: &notifications[..shown],
            total,
            hidden: total.saturating_sub(max_visible),
        }
    }

    /// Notifications rendered as alerts.
    pub fn visible(&self) -> &'a [Notification] {
        self.visible
    }

    /// Length of the full list.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Notifications cut off by the cap; zero when everything fits.
    pub fn hidden_count(&self) -> usize {
        self.hidden
    }

    /// Whether the caller supplied no notifications at all.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Header count, absent for an empty list.
    pub fn count_label(&self) -> Option<String> {
        (!self.is_empty()).then(|| pluralize(self.total, "notification"))
    }

    /// Trailing summary, present only when something is hidden.
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| {
            format!(
                "+{} more {}",
                self.hidden,
                noun_form(self.hidden, "notification")
            )
        })
    }
}

/// Binds the caller's dismiss callback to one notification id.
///
/// The id travels with the handler, so dismissal never depends on the item's
/// visible position.
pub fn dismiss_handler(on_dismiss: Callback<String>, id: String) -> Callback<()> {
    Callback::new(move |_: ()| on_dismiss.call(id.clone()))
}

fn container_style(tokens: &DesignTokens) -> String {
    InlineStyle::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("gap", tokens.spacing.md.as_str())
        .set("padding", tokens.spacing.lg.as_str())
        .set("background-color", tokens.colors.neutral.white.as_str())
        .set("border-radius", "8px")
        .set("box-shadow", "0 2px 8px rgba(0, 0, 0, 0.1)")
        .set("max-width", "400px")
        .to_string()
}

fn header_style(tokens: &DesignTokens) -> String {
    InlineStyle::new()
        .set("display", "flex")
        .set("justify-content", "space-between")
        .set("align-items", "center")
        .set("padding-bottom", tokens.spacing.md.as_str())
        .set(
            "border-bottom",
            format!("1px solid {}", tokens.colors.neutral.gray200),
        )
        .to_string()
}

fn list_style(tokens: &DesignTokens) -> String {
    InlineStyle::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("gap", tokens.spacing.sm.as_str())
        .to_string()
}

fn notification_body(
    notifications: &[Notification],
    max_visible: usize,
    on_dismiss: Callback<String>,
    tokens: &DesignTokens,
) -> View {
    let window = NotificationWindow::new(notifications, max_visible);
    let muted = tokens.colors.neutral.gray600.clone();

    if window.is_empty() {
        return view! {
            <Text color=muted ui_slot="empty">{EMPTY_MESSAGE}</Text>
        }
        .into_view();
    }

    let items = window
        .visible()
        .iter()
        .cloned()
        .map(|notification| {
            let Notification {
                id,
                variant,
                message,
                title,
            } = notification;
            let on_item_dismiss = dismiss_handler(on_dismiss, id.clone());
            let alert = alert_view(variant, message, title, true, Some(on_item_dismiss), None);
            view! {
                <div role="listitem" data-ui-slot="item" data-notification-id=id>
                    {alert}
                </div>
            }
        })
        .collect_view();

    let overflow = window.overflow_label().map(|label| {
        view! {
            <Text size=TextSize::Sm color=muted ui_slot="overflow">{label}</Text>
        }
    });

    view! {
        <div role="list" aria-label=LIST_LABEL style=list_style(tokens) data-ui-slot="list">
            {items}
        </div>
        {overflow}
    }
    .into_view()
}

#[component]
/// Notification center organism: a titled region listing the first
/// `max_visible` notifications as dismissible alerts, with a live count and an
/// overflow summary.
///
/// The caller owns `notifications`. Dismissing an alert only reports its id
/// through `on_dismiss`; the list changes when the caller supplies a new one.
pub fn NotificationCenter(
    /// Ordered, caller-owned notifications.
    #[prop(into)]
    notifications: MaybeSignal<Vec<Notification>>,
    /// Receives the id of the dismissed notification.
    on_dismiss: Callback<String>,
    /// Region heading and accessible name.
    #[prop(optional, into)]
    title: Option<String>,
    /// Alerts rendered before the overflow summary.
    #[prop(default = DEFAULT_MAX_VISIBLE)]
    max_visible: usize,
) -> impl IntoView {
    let tokens = use_design_tokens();
    let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let heading = title.clone();
    let muted = tokens.colors.neutral.gray600.clone();
    let body_tokens = Rc::clone(&tokens);
    let listed = notifications.clone();

    let count = move || {
        notifications
            .with(|list| NotificationWindow::new(list, max_visible).count_label())
            .map(|label| {
                view! {
                    <Text size=TextSize::Sm color=muted.clone() ui_slot="count">{label}</Text>
                }
            })
    };
    let body = move || {
        listed.with(|list| notification_body(list, max_visible, on_dismiss, &body_tokens))
    };

    view! {
        <div
            role="region"
            aria-label=title
            style=container_style(&tokens)
            data-ui-primitive="true"
            data-ui-kind="notification-center"
        >
            <div style=header_style(&tokens) data-ui-slot="header">
                <Text element=TextElement::H2 size=TextSize::Lg weight=TextWeight::Bold ui_slot="title">
                    {heading}
                </Text>
                {count}
            </div>
            {body}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Vec<Notification> {
        vec![
            Notification::new("1", AlertVariant::Success, "File uploaded successfully")
                .with_title("Upload Complete"),
            Notification::new(
                "2",
                AlertVariant::Warning,
                "Your session will expire in 5 minutes",
            ),
            Notification::new("3", AlertVariant::Error, "Failed to save changes").with_title("Error"),
        ]
    }

    fn numbered(count: usize) -> Vec<Notification> {
        (1..=count)
            .map(|n| Notification::new(n.to_string(), AlertVariant::Info, format!("Message {n}")))
            .collect()
    }

    fn render_center(notifications: Vec<Notification>, max_visible: usize) -> String {
        let _ = leptos::create_runtime();
        view! {
            <NotificationCenter
                notifications=notifications
                on_dismiss=Callback::new(|_: String| {})
                max_visible=max_visible
            />
        }
        .into_view()
        .render_to_string()
        .to_string()
    }

    #[test]
    fn pluralizes_only_at_exactly_one() {
        assert_eq!(pluralize(0, "notification"), "0 notifications");
        assert_eq!(pluralize(1, "notification"), "1 notification");
        assert_eq!(pluralize(2, "notification"), "2 notifications");
    }

    #[test]
    fn single_notification_has_singular_count_and_no_overflow() {
        let list = vec![Notification::new("1", AlertVariant::Success, "Upload Complete")];
        let window = NotificationWindow::new(&list, DEFAULT_MAX_VISIBLE);

        assert_eq!(window.count_label().as_deref(), Some("1 notification"));
        assert_eq!(window.visible().len(), 1);
        assert_eq!(window.overflow_label(), None);
    }

    #[test]
    fn renders_every_notification_under_the_cap_in_order() {
        let list = sample();
        let window = NotificationWindow::new(&list, DEFAULT_MAX_VISIBLE);

        let ids: Vec<_> = window.visible().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(window.count_label().as_deref(), Some("3 notifications"));
        assert_eq!(window.hidden_count(), 0);
    }

    #[test]
    fn cap_truncates_and_summarizes_the_rest() {
        let list = numbered(6);
        let window = NotificationWindow::new(&list, 3);

        let messages: Vec<_> = window.visible().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["Message 1", "Message 2", "Message 3"]);
        assert_eq!(window.hidden_count(), 3);
        assert_eq!(window.overflow_label().as_deref(), Some("+3 more notifications"));
        assert_eq!(window.count_label().as_deref(), Some("6 notifications"));
    }

    #[test]
    fn single_hidden_notification_uses_singular_summary() {
        let list = numbered(6);
        let window = NotificationWindow::new(&list, DEFAULT_MAX_VISIBLE);
        assert_eq!(window.overflow_label().as_deref(), Some("+1 more notification"));
    }

    #[test]
    fn visible_count_is_min_of_length_and_cap() {
        for len in 0..8 {
            let list = numbered(len);
            for cap in 0..8 {
                let window = NotificationWindow::new(&list, cap);
                assert_eq!(window.visible().len(), len.min(cap));
                assert_eq!(window.overflow_label().is_some(), len > cap);
            }
        }
    }

    #[test]
    fn cap_above_length_never_reports_negative_overflow() {
        let list = numbered(2);
        let window = NotificationWindow::new(&list, 10);
        assert_eq!(window.hidden_count(), 0);
        assert_eq!(window.overflow_label(), None);
    }

    #[test]
    fn empty_list_has_no_count_and_no_items() {
        let window = NotificationWindow::new(&[], DEFAULT_MAX_VISIBLE);
        assert!(window.is_empty());
        assert_eq!(window.count_label(), None);
        assert!(window.visible().is_empty());
        assert_eq!(window.overflow_label(), None);
    }

    #[test]
    fn rendered_center_caps_items_and_summarizes_overflow() {
        let html = render_center(numbered(6), 3);

        assert!(html.contains(r#"role="region""#), "{html}");
        assert!(html.contains(r#"aria-label="Notifications""#), "{html}");
        assert!(html.contains(r#"role="list""#), "{html}");
        assert!(html.contains(r#"aria-label="Notification list""#), "{html}");
        assert_eq!(html.matches(r#"role="listitem""#).count(), 3, "{html}");
        assert_eq!(html.matches(r#"role="alert""#).count(), 3, "{html}");
        assert_eq!(html.matches(r#"aria-label="Dismiss alert""#).count(), 3, "{html}");
        assert!(html.contains("Message 3"), "{html}");
        assert!(!html.contains("Message 4"), "{html}");
        assert!(html.contains("6 notifications"), "{html}");
        assert!(html.contains("+3 more notifications"), "{html}");
    }

    #[test]
    fn rendered_single_notification_has_no_summary() {
        let list = vec![Notification::new("1", AlertVariant::Success, "Upload Complete")];
        let html = render_center(list, DEFAULT_MAX_VISIBLE);

        assert_eq!(html.matches(r#"role="listitem""#).count(), 1, "{html}");
        assert!(html.contains("1 notification"), "{html}");
        assert!(!html.contains("1 notifications"), "{html}");
        assert!(!html.contains(r#"data-ui-slot="overflow""#), "{html}");
        assert!(!html.contains("more notification"), "{html}");
    }

    #[test]
    fn rendered_empty_center_shows_only_the_empty_message() {
        let html = render_center(Vec::new(), DEFAULT_MAX_VISIBLE);

        assert!(html.contains(r#"role="region""#), "{html}");
        assert!(html.contains(EMPTY_MESSAGE), "{html}");
        assert!(!html.contains(r#"role="list""#), "{html}");
        assert!(!html.contains(r#"role="listitem""#), "{html}");
        assert!(!html.contains(r#"data-ui-slot="count""#), "{html}");
        assert!(!html.contains("0 notifications"), "{html}");
    }

    #[test]
    fn region_is_named_by_custom_title() {
        let _ = leptos::create_runtime();
        let html = view! {
            <NotificationCenter
                notifications=numbered(1)
                on_dismiss=Callback::new(|_: String| {})
                title="Inbox"
            />
        }
        .into_view()
        .render_to_string()
        .to_string();

        assert!(html.contains(r#"aria-label="Inbox""#), "{html}");
        assert!(!html.contains(DEFAULT_TITLE), "{html}");
    }

    #[test]
    fn dismiss_reports_notification_id_not_position() {
        let _ = leptos::create_runtime();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let on_dismiss = Callback::new(move |id: String| sink.borrow_mut().push(id));

        let list = vec![
            Notification::new("alpha", AlertVariant::Info, "first"),
            Notification::new("beta", AlertVariant::Info, "second"),
            Notification::new("gamma", AlertVariant::Info, "third"),
        ];
        let handlers: Vec<_> = NotificationWindow::new(&list, DEFAULT_MAX_VISIBLE)
            .visible()
            .iter()
            .map(|notification| dismiss_handler(on_dismiss, notification.id.clone()))
            .collect();

        handlers[1].call(());
        handlers[0].call(());
        assert_eq!(*seen.borrow(), vec!["beta".to_string(), "alpha".to_string()]);
    }

    #[test]
    fn notification_json_omits_missing_title() {
        let raw = serde_json::to_string(&Notification::new("7", AlertVariant::Warning, "Low disk"))
            .expect("serialize");
        assert_eq!(raw, r#"{"id":"7","variant":"warning","message":"Low disk"}"#);

        let parsed: Notification = serde_json::from_str(
            r#"{"id":"8","variant":"error","message":"Sync failed","title":"Error"}"#,
        )
        .expect("parse");
        assert_eq!(
            parsed,
            Notification::new("8", AlertVariant::Error, "Sync failed").with_title("Error")
        );
    }
}
