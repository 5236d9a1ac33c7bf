// =============================================================================
// TTM Painting Web - Page Components
// =============================================================================
// Table of Contents:
// 1. Public Pages
// 2. Legal Pages
// 3. Shared Legal Markup
// =============================================================================

pub mod estimate;
pub mod home;
pub mod not_found;
pub mod privacy;
pub mod terms;

pub use estimate::EstimatePage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use privacy::PrivacyPage;
pub use terms::TermsPage;

use leptos::prelude::*;

use crate::state::AppState;

/// Revision date shown on the legal pages.
pub const LEGAL_LAST_UPDATED: &str = "June 1, 2025";

// -----------------------------------------------------------------------------
// 3. Shared Legal Markup
// -----------------------------------------------------------------------------

/// Business contact block closing each legal page.
#[component]
pub fn LegalContact() -> impl IntoView {
    let config = expect_context::<AppState>().config;

    view! {
        <div class="legal-contact">
            <p><strong>{config.business_name.clone()}</strong></p>
            <p><strong>"Phone: "</strong><a href=config.phone_href()>{config.phone.clone()}</a></p>
            <p><strong>"Email: "</strong><a href=config.email_href()>{config.email.clone()}</a></p>
            <p><strong>"Address: "</strong>{config.service_area.clone()}</p>
        </div>
    }
}
