// =============================================================================
// TTM Painting Web - Footer Component
// =============================================================================
// Global footer shown on all pages
// =============================================================================

use leptos::prelude::*;

use crate::state::AppState;
use crate::utils::current_year;

/// Site footer with contact details and legal links.
#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<AppState>().config;
    let phone_href = config.phone_href();
    let email_href = config.email_href();

    view! {
        <footer class="site-footer">
            <div class="footer-main">
                <div class="footer-brand-col">
                    <a href="/" class="footer-logo-link">
                        <img src="/assets/logo.svg" alt=config.business_name.clone() class="footer-logo-img" />
                    </a>
                    <p class="footer-tagline">{config.tagline.clone()}</p>
                </div>

                <div class="footer-link-col">
                    <h5 class="footer-col-title">"Contact"</h5>
                    <a href=phone_href class="footer-link">{config.phone.clone()}</a>
                    <a href=email_href class="footer-link">{config.email.clone()}</a>
                    <span class="footer-text">{config.service_area.clone()}</span>
                </div>

                <div class="footer-link-col">
                    <h5 class="footer-col-title">"Legal"</h5>
                    <a href="/privacy-policy" class="footer-link">"Privacy Policy"</a>
                    <a href="/terms-of-service" class="footer-link">"Terms of Service"</a>
                </div>
            </div>

            <div class="footer-bottom-bar">
                <p class="footer-copyright">
                    {format!("© {} {}. All rights reserved.", current_year(), config.business_name)}
                </p>
            </div>
        </footer>
    }
}
