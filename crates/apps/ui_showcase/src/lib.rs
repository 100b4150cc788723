//! Gallery app rendering every `atomic_ui` tier with live interactions.
//!
//! The organism gallery owns its notification list in a [`NotificationQueue`]
//! signal and removes entries when the center reports a dismissal, which is
//! the caller contract the components expect.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod queue;

use atomic_ui::prelude::*;
use atomic_ui::InlineStyle;
use leptos::*;

pub use queue::NotificationQueue;

const GLYPHS: [IconName; 5] = [
    IconName::Check,
    IconName::Warning,
    IconName::Error,
    IconName::Info,
    IconName::Close,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One atomic-design tier of the gallery.
pub enum Tier {
    /// Icon, text, button and badge.
    Atoms,
    /// Alert and alert-with-action.
    Molecules,
    /// Notification center.
    Organisms,
}

impl Tier {
    /// Every tier, smallest first.
    pub const ALL: [Self; 3] = [Self::Atoms, Self::Molecules, Self::Organisms];

    /// URL path segment.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Atoms => "atoms",
            Self::Molecules => "molecules",
            Self::Organisms => "organisms",
        }
    }

    /// Section heading.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Atoms => "Atoms",
            Self::Molecules => "Molecules",
            Self::Organisms => "Organisms",
        }
    }

    /// Parses a [`Tier::slug`].
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.slug() == slug)
    }
}

/// Tiers rendered for an optional selection; `None` renders all of them.
pub fn tiers_for(selection: Option<Tier>) -> Vec<Tier> {
    selection.map_or_else(|| Tier::ALL.to_vec(), |tier| vec![tier])
}

fn sample_title(variant: AlertVariant) -> &'static str {
    match variant {
        AlertVariant::Success => "Saved",
        AlertVariant::Warning => "Heads up",
        AlertVariant::Error => "Request failed",
        AlertVariant::Info => "Did you know",
    }
}

fn sample_message(variant: AlertVariant) -> &'static str {
    match variant {
        AlertVariant::Success => "Your profile changes were stored.",
        AlertVariant::Warning => "Your session expires in five minutes.",
        AlertVariant::Error => "The server did not answer in time.",
        AlertVariant::Info => "Alerts pick their glyph from the variant.",
    }
}

fn page_style(tokens: &DesignTokens) -> String {
    InlineStyle::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("gap", tokens.spacing.xl.as_str())
        .set("padding", tokens.spacing.xl.as_str())
        .set("max-width", "960px")
        .set("margin", "0 auto")
        .set("background-color", tokens.colors.neutral.white.as_str())
        .to_string()
}

fn section_style(tokens: &DesignTokens) -> String {
    InlineStyle::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("gap", tokens.spacing.md.as_str())
        .set("padding", tokens.spacing.lg.as_str())
        .set("border", format!("1px solid {}", tokens.colors.neutral.gray200))
        .set("border-radius", "8px")
        .to_string()
}

fn row_style(tokens: &DesignTokens) -> String {
    InlineStyle::new()
        .set("display", "flex")
        .set("flex-wrap", "wrap")
        .set("align-items", "center")
        .set("gap", tokens.spacing.sm.as_str())
        .to_string()
}

#[component]
/// Showcase page. Renders one tier when `tier` is set, otherwise all three.
pub fn ShowcaseApp(#[prop(optional)] tier: Option<Tier>) -> impl IntoView {
    let tokens = use_design_tokens();
    let muted = tokens.colors.neutral.gray600.clone();

    view! {
        <div style=page_style(&tokens) data-ui-kind="showcase">
            <header>
                <Text element=TextElement::H1 size=TextSize::Xl weight=TextWeight::Bold>
                    "Atomic UI"
                </Text>
                <Text color=muted>"Atoms, molecules and organisms rendered from shared tokens."</Text>
            </header>
            {tiers_for(tier)
                .into_iter()
                .map(|tier| match tier {
                    Tier::Atoms => view! { <AtomGallery /> }.into_view(),
                    Tier::Molecules => view! { <MoleculeGallery /> }.into_view(),
                    Tier::Organisms => view! { <OrganismGallery /> }.into_view(),
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn GallerySection(tier: Tier, children: Children) -> impl IntoView {
    let tokens = use_design_tokens();

    view! {
        <section
            style=section_style(&tokens)
            aria-label=tier.label()
            data-ui-kind="showcase-section"
            data-ui-slot=tier.slug()
        >
            <Text element=TextElement::H2 size=TextSize::Lg weight=TextWeight::Semibold>
                {tier.label()}
            </Text>
            {children()}
        </section>
    }
}

#[component]
fn AtomGallery() -> impl IntoView {
    let tokens = use_design_tokens();
    let clicks = create_rw_signal(0_u32);
    let locked = create_rw_signal(true);

    view! {
        <GallerySection tier=Tier::Atoms>
            <div style=row_style(&tokens)>
                {GLYPHS
                    .into_iter()
                    .map(|name| view! { <Icon name=name aria_label=name.token() /> })
                    .collect_view()}
                {AlertVariant::ALL
                    .into_iter()
                    .map(|variant| view! { <Icon name=IconName::for_variant(variant) variant=variant size=24 /> })
                    .collect_view()}
            </div>
            <div>
                <Text size=TextSize::Xs>"Extra small"</Text>
                <Text size=TextSize::Sm weight=TextWeight::Medium>"Small medium"</Text>
                <Text>"Base normal"</Text>
                <Text size=TextSize::Lg weight=TextWeight::Semibold>"Large semibold"</Text>
                <Text element=TextElement::Span size=TextSize::Xl weight=TextWeight::Bold>
                    "Extra large bold"
                </Text>
            </div>
            <div style=row_style(&tokens)>
                <Button on_click=Callback::new(move |_| clicks.update(|count| *count += 1))>
                    "Primary"
                </Button>
                <Button variant=ButtonVariant::Secondary size=ButtonSize::Sm>"Secondary small"</Button>
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Lg>"Ghost large"</Button>
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=Signal::derive(move || locked.get())
                    on_click=Callback::new(move |_| clicks.update(|count| *count += 10))
                >
                    {move || if locked.get() { "Locked" } else { "Unlocked (+10)" }}
                </Button>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    on_click=Callback::new(move |_| locked.update(|value| *value = !*value))
                >
                    "Toggle lock"
                </Button>
                <Text element=TextElement::Span>
                    {move || format!("Clicks: {}", clicks.get())}
                </Text>
            </div>
            <div style=row_style(&tokens)>
                <Badge>"default"</Badge>
                <Badge variant=BadgeVariant::Primary>"primary"</Badge>
                <Badge variant=BadgeVariant::Success size=BadgeSize::Sm>"passed"</Badge>
                <Badge variant=BadgeVariant::Warning aria_label="3 warnings">"3"</Badge>
                <Badge variant=BadgeVariant::Error>"failed"</Badge>
            </div>
        </GallerySection>
    }
}

#[component]
fn MoleculeGallery() -> impl IntoView {
    let tokens = use_design_tokens();
    let dismissed = create_rw_signal(Vec::<AlertVariant>::new());
    let last_event = create_rw_signal(String::from("No interaction yet"));

    view! {
        <GallerySection tier=Tier::Molecules>
            {AlertVariant::ALL
                .into_iter()
                .map(|variant| {
                    view! {
                        <Show
                            when=move || dismissed.with(|hidden| !hidden.contains(&variant))
                            fallback=|| ()
                        >
                            <Alert
                                variant=variant
                                title=sample_title(variant)
                                message=sample_message(variant)
                                dismissible=true
                                on_dismiss=Callback::new(move |_| {
                                    dismissed.update(|hidden| hidden.push(variant));
                                    last_event.set(format!("Dismissed {} alert", variant.token()));
                                })
                            />
                        </Show>
                    }
                })
                .collect_view()}
            <Alert variant=AlertVariant::Info message="Alerts without a title or dismiss control stay static." />
            <AlertWithAction
                variant=AlertVariant::Warning
                title="Unsaved changes"
                message="Leaving now discards your draft."
                action_label="Save draft"
                on_action=Callback::new(move |_| last_event.set("Draft saved".to_string()))
                dismissible=true
                on_dismiss=Callback::new(move |_| last_event.set("Warning dismissed".to_string()))
            />
            <AlertWithAction
                variant=AlertVariant::Error
                message="Upload interrupted."
                action_label="Retry"
                action_variant=ButtonVariant::Secondary
                on_action=Callback::new(move |_| last_event.set("Retrying upload".to_string()))
            />
            <div style=row_style(&tokens)>
                <Button
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Sm
                    disabled=Signal::derive(move || dismissed.with(Vec::is_empty))
                    on_click=Callback::new(move |_| dismissed.update(Vec::clear))
                >
                    "Restore alerts"
                </Button>
                <Text element=TextElement::Span size=TextSize::Sm>
                    {move || last_event.get()}
                </Text>
            </div>
        </GallerySection>
    }
}

#[component]
fn OrganismGallery() -> impl IntoView {
    let tokens = use_design_tokens();
    let queue = create_rw_signal(NotificationQueue::demo());
    let notifications = Signal::derive(move || queue.with(|queue| queue.as_slice().to_vec()));
    let on_dismiss = Callback::new(move |id: String| {
        queue.update(|queue| {
            if !queue.dismiss(&id) {
                logging::warn!("dismiss for unknown notification {id}");
            }
        });
    });

    view! {
        <GallerySection tier=Tier::Organisms>
            <div style=row_style(&tokens)>
                {AlertVariant::ALL
                    .into_iter()
                    .map(|variant| {
                        view! {
                            <Button
                                variant=ButtonVariant::Secondary
                                size=ButtonSize::Sm
                                on_click=Callback::new(move |_| {
                                    queue.update(|queue| {
                                        queue.push(variant, sample_message(variant), None);
                                    });
                                })
                            >
                                {format!("Add {}", variant.token())}
                            </Button>
                        }
                    })
                    .collect_view()}
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    disabled=Signal::derive(move || queue.with(NotificationQueue::is_empty))
                    on_click=Callback::new(move |_| queue.update(NotificationQueue::clear))
                >
                    "Clear all"
                </Button>
            </div>
            <NotificationCenter notifications=notifications on_dismiss=on_dismiss max_visible=3 />
        </GallerySection>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn slugs_round_trip_through_parser() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_slug(tier.slug()), Some(tier));
        }
        assert_eq!(Tier::from_slug("templates"), None);
    }

    #[test]
    fn no_selection_renders_every_tier_in_order() {
        assert_eq!(tiers_for(None), Tier::ALL.to_vec());
        assert_eq!(tiers_for(Some(Tier::Molecules)), vec![Tier::Molecules]);
    }

    #[test]
    fn every_variant_has_sample_copy() {
        for variant in AlertVariant::ALL {
            assert!(!sample_title(variant).is_empty());
            assert!(sample_message(variant).ends_with('.'));
        }
    }
}
