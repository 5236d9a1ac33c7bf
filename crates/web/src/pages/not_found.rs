// =============================================================================
// TTM Painting Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::SiteNav;
use crate::state::AppState;
use crate::utils::get_pathname;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let path = get_pathname();
    log::debug!("No route for {}", path);

    view! {
        <Title text=app_state.page_title("Page Not Found") />
        <div class="page page-not-found">
            <SiteNav active="".to_string() />
            <div class="not-found-content">
                <span class="not-found-code">"404"</span>
                <h1>"Page Not Found"</h1>
                <p>{format!("Nothing lives at {}.", path)}</p>
                <a href="/" class="btn btn-primary">
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
