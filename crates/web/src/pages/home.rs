// =============================================================================
// TTM Painting Web - Home Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{EstimateForm, Footer, SiteNav};
use crate::state::AppState;

/// Services listed on the landing page.
const SERVICES: [(&str, &str); 5] = [
    ("Interior Painting", "Walls, ceilings, trim and cabinets with clean lines and careful prep."),
    ("Exterior Painting", "Siding, doors and trim protected against Illinois weather."),
    ("Commercial", "Offices and storefronts painted on a schedule that suits your business."),
    ("Deck & Fence Staining", "Restore and protect outdoor wood."),
    ("Power Washing", "Siding, decks and concrete cleaned before paint or on its own."),
];

/// Public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let config = app_state.config.clone();

    view! {
        <Title text=app_state.page_title("Painting Services") />
        <div class="page page-home">
            <SiteNav active="home".to_string() />

            <section class="hero">
                <div class="hero-text">
                    <h1 class="hero-headline">{config.business_name.clone()}</h1>
                    <p class="hero-description">{config.tagline.clone()}</p>
                    <p class="hero-area">{format!("Serving {}", config.service_area)}</p>
                    <div class="hero-buttons">
                        <a href="#estimate" class="btn btn-primary">"Get a Free Estimate"</a>
                        <a href=config.phone_href() class="btn btn-outline">{format!("Call {}", config.phone)}</a>
                    </div>
                </div>
            </section>

            <section class="services">
                <h2 class="section-title">"Our Services"</h2>
                <div class="services-grid">
                    {SERVICES
                        .into_iter()
                        .map(|(name, blurb)| view! {
                            <div class="service-card">
                                <h3>{name}</h3>
                                <p>{blurb}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="estimate" class="estimate-section">
                <EstimateForm class="estimate-wrapper" />
            </section>

            <Footer />
        </div>
    }
}
