// =============================================================================
// TTM Painting Web - Free Estimate Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{EstimateForm, Footer, SiteNav};
use crate::state::AppState;

/// Stand-alone page for the estimate form.
#[component]
pub fn EstimatePage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <Title text=app_state.page_title("Free Estimate") />
        <div class="page page-estimate">
            <SiteNav active="estimate".to_string() />
            <EstimateForm class="estimate-wrapper" />
            <Footer />
        </div>
    }
}
