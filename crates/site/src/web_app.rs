use atomic_ui::{provide_design_tokens, DesignTokens};
use atomic_ui_showcase::{ShowcaseApp, Tier};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

const THEME: &str = include_str!("../theme.json");

fn site_tokens() -> DesignTokens {
    DesignTokens::from_json(THEME).unwrap_or_else(|err| {
        logging::warn!("theme rejected, using default tokens: {err}");
        DesignTokens::default()
    })
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    provide_design_tokens(site_tokens());

    view! {
        <Title text="Atomic UI" />
        <Meta name="description" content="Atoms, molecules and organisms of the Atomic UI component library." />

        <Router>
            <nav class="site-nav" aria-label="Tiers">
                <A href="/">"All"</A>
                {Tier::ALL
                    .into_iter()
                    .map(|tier| view! { <A href=format!("/{}", tier.slug())>{tier.label()}</A> })
                    .collect_view()}
            </nav>
            <main class="site-root">
                <Routes>
                    <Route path="" view=|| view! { <ShowcaseApp /> } />
                    <Route path="/:tier" view=TierRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn TierRoute() -> impl IntoView {
    let params = use_params_map();
    let tier = move || params.with(|map| map.get("tier").and_then(|slug| Tier::from_slug(slug)));

    move || match tier() {
        Some(tier) => view! { <ShowcaseApp tier=tier /> }.into_view(),
        None => view! {
            <section class="not-found">
                <h1>"Unknown tier"</h1>
                <A href="/">"Back to every tier"</A>
            </section>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_theme_matches_default_tokens() {
        assert_eq!(DesignTokens::from_json(THEME).ok(), Some(DesignTokens::default()));
    }
}
