// =============================================================================
// TTM Painting Web - Site Navigation Component
// =============================================================================
// Top bar shown on every page. Collapses to a drawer on mobile.
// =============================================================================

use leptos::prelude::*;

use crate::state::AppState;

/// Site navigation bar.
///
/// # Arguments
/// * `active` - The currently active page (e.g., "home", "estimate")
#[component]
pub fn SiteNav(
    #[prop(default = "home".to_string())]
    active: String,
) -> impl IntoView {
    let config = expect_context::<AppState>().config;
    let phone_href = config.phone_href();

    let menu_open = RwSignal::new(false);
    let close_menu = move |_| menu_open.set(false);

    let link_class = move |page: &str| {
        if page == active { "nav-link active" } else { "nav-link" }
    };
    let home_class = link_class("home");
    let estimate_class = link_class("estimate");

    view! {
        <nav class="site-nav">
            <a href="/" class="nav-logo">
                <img src="/assets/logo.svg" alt=config.business_name.clone() class="nav-logo-img" />
            </a>

            <button
                type="button"
                class="nav-menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>

            <div class="nav-links" class:open=move || menu_open.get()>
                <a href="/" class=home_class on:click=close_menu>"Home"</a>
                <a href="/estimate" class=estimate_class on:click=close_menu>"Free Estimate"</a>
                <a href=phone_href class="nav-phone">{config.phone.clone()}</a>
            </div>
        </nav>
    }
}
