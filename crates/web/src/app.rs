// =============================================================================
// TTM Painting Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{EstimatePage, HomePage, NotFoundPage, PrivacyPage, TermsPage};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    let app_state = AppState::new();
    log::debug!(
        "Site config loaded for {} ({:?})",
        app_state.config.business_name,
        app_state.environment
    );

    provide_meta_context();
    provide_context(app_state);

    // -------------------------------------------------------------------------
    // 3. Router Configuration
    // -------------------------------------------------------------------------

    view! {
        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/estimate") view=EstimatePage />

                // Legal pages
                <Route path=path!("/privacy-policy") view=PrivacyPage />
                <Route path=path!("/terms-of-service") view=TermsPage />
            </Routes>
        </Router>
    }
}
