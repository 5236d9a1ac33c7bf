// =============================================================================
// TTM Painting Web - Terms of Service Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use super::{LegalContact, LEGAL_LAST_UPDATED};
use crate::components::{Footer, SiteNav};
use crate::state::AppState;

#[component]
pub fn TermsPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let business = app_state.config.business_name.clone();

    view! {
        <Title text=app_state.page_title("Terms of Service") />
        <div class="page page-legal">
            <SiteNav active="".to_string() />

            <div class="legal-container">
                <div class="legal-header">
                    <h1>"Terms of Service"</h1>
                    <p class="legal-updated">{format!("Last updated: {}", LEGAL_LAST_UPDATED)}</p>
                </div>

                <div class="legal-content">
                    <section class="legal-section">
                        <h2>"Agreement to Terms"</h2>
                        <p>{format!(
                            "By accessing and using {}'s services, you accept and agree to be bound by the terms and provision of this agreement. If you do not agree to abide by the above, please do not use this service.",
                            business
                        )}</p>
                    </section>

                    <section class="legal-section">
                        <h2>"Services Description"</h2>
                        <p>{format!("{} provides professional painting services including but not limited to:", business)}</p>
                        <ul>
                            <li>"Interior and exterior residential painting"</li>
                            <li>"Commercial painting services"</li>
                            <li>"Deck and fence staining"</li>
                            <li>"Power washing services"</li>
                            <li>"Color consultation and design services"</li>
                        </ul>
                    </section>

                    <section class="legal-section">
                        <h2>"Service Agreements"</h2>
                        <h3>"Estimates and Contracts"</h3>
                        <p>"All estimates are provided free of charge and are valid for 30 days from the date of issue. A written contract will be provided for all projects over $500. The contract will detail the scope of work, materials, timeline, and payment terms."</p>
                        <h3>"Payment Terms"</h3>
                        <p>"Payment terms will be specified in your individual contract. Generally, we require a deposit for materials and labor, with the balance due upon completion of the project. We accept cash, check, and major credit cards."</p>
                        <h3>"Project Timeline"</h3>
                        <p>"Project timelines are estimates and may be affected by weather conditions, material availability, and other factors beyond our control. We will communicate any delays promptly and work to minimize project duration."</p>
                    </section>

                    <section class="legal-section">
                        <h2>"Warranty and Guarantees"</h2>
                        <h3>"Workmanship Warranty"</h3>
                        <p>{format!(
                            "{} provides a 1-3 year workmanship warranty on all painting projects, depending on the scope of work. This warranty covers defects in workmanship but does not cover normal wear and tear, damage from weather, or damage caused by the customer.",
                            business
                        )}</p>
                        <h3>"Material Warranty"</h3>
                        <p>"Material warranties are provided by the manufacturer and vary by product. We will provide warranty information for all materials used in your project."</p>
                    </section>

                    <section class="legal-section">
                        <h2>"Customer Responsibilities"</h2>
                        <ul>
                            <li>"Provide access to the work area during scheduled hours"</li>
                            <li>"Remove or protect personal belongings from the work area"</li>
                            <li>"Ensure adequate lighting and ventilation in work areas"</li>
                            <li>"Notify us of any special requirements or concerns before work begins"</li>
                            <li>"Make payment according to the agreed terms"</li>
                        </ul>
                    </section>

                    <section class="legal-section">
                        <h2>"Limitation of Liability"</h2>
                        <p>{format!(
                            "{} is fully licensed, bonded, and insured. Our liability is limited to the cost of the project or the amount covered by our insurance, whichever is less. We are not responsible for damage to personal property that was not properly protected or removed from the work area.",
                            business
                        )}</p>
                    </section>

                    <section class="legal-section">
                        <h2>"Cancellation Policy"</h2>
                        <p>"Projects may be cancelled with 48 hours notice. If materials have been purchased, the customer is responsible for the cost of materials. If work has begun, the customer is responsible for payment for work completed and materials used."</p>
                    </section>

                    <section class="legal-section">
                        <h2>"Dispute Resolution"</h2>
                        <p>"Any disputes will be resolved through good faith negotiation. If a resolution cannot be reached, disputes will be subject to binding arbitration in accordance with the rules of the American Arbitration Association."</p>
                    </section>

                    <section class="legal-section">
                        <h2>"Changes to Terms"</h2>
                        <p>{format!(
                            "{} reserves the right to modify these terms at any time. Changes will be posted on our website and will apply to all new projects. Existing contracts will continue under their original terms.",
                            business
                        )}</p>
                    </section>

                    <section class="legal-section">
                        <h2>"Contact Information"</h2>
                        <p>"If you have any questions about these Terms of Service, please contact us:"</p>
                        <LegalContact />
                    </section>
                </div>
            </div>

            <Footer />
        </div>
    }
}
