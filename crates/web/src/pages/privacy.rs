// =============================================================================
// TTM Painting Web - Privacy Policy Page
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use super::{LegalContact, LEGAL_LAST_UPDATED};
use crate::components::{Footer, SiteNav};
use crate::state::AppState;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let business = app_state.config.business_name.clone();

    view! {
        <Title text=app_state.page_title("Privacy Policy") />
        <div class="page page-legal">
            <SiteNav active="".to_string() />

            <div class="legal-container">
                <div class="legal-header">
                    <h1>"Privacy Policy"</h1>
                    <p class="legal-updated">{format!("Last updated: {}", LEGAL_LAST_UPDATED)}</p>
                </div>

                <div class="legal-content">
                    <section class="legal-section">
                        <h2>"Introduction"</h2>
                        <p>{format!(
                            "{} (\"we,\" \"our,\" or \"us\") is committed to protecting your privacy. This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you visit our website or use our services.",
                            business
                        )}</p>
                    </section>

                    <section class="legal-section">
                        <h2>"Information We Collect"</h2>
                        <h3>"Personal Information"</h3>
                        <p>"We may collect personal information that you voluntarily provide to us when you:"</p>
                        <ul>
                            <li>"Request a quote or estimate"</li>
                            <li>"Contact us through our website or phone"</li>
                            <li>"Schedule a consultation"</li>
                            <li>"Sign up for our newsletter"</li>
                        </ul>
                        <p>"This information may include your name, email address, phone number, physical address, and project details."</p>

                        <h3>"Automatically Collected Information"</h3>
                        <p>"When you visit our website, we may automatically collect certain information about your device and usage patterns, including:"</p>
                        <ul>
                            <li>"IP address and location data"</li>
                            <li>"Browser type and version"</li>
                            <li>"Pages visited and time spent on our site"</li>
                            <li>"Referring website information"</li>
                        </ul>
                    </section>

                    <section class="legal-section">
                        <h2>"How We Use Your Information"</h2>
                        <p>"We use the information we collect to:"</p>
                        <ul>
                            <li>"Provide and improve our painting services"</li>
                            <li>"Respond to your inquiries and provide customer support"</li>
                            <li>"Send you estimates, quotes, and project updates"</li>
                            <li>"Process payments and manage your account"</li>
                            <li>"Send you marketing communications (with your consent)"</li>
                            <li>"Comply with legal obligations"</li>
                            <li>"Protect against fraud and unauthorized transactions"</li>
                        </ul>
                    </section>

                    <section class="legal-section">
                        <h2>"Information Sharing and Disclosure"</h2>
                        <p>"We do not sell, trade, or otherwise transfer your personal information to third parties without your consent, except in the following circumstances:"</p>
                        <ul>
                            <li><strong>"Service Providers: "</strong>"We may share information with trusted third parties who assist us in operating our website, conducting our business, or servicing you"</li>
                            <li><strong>"Legal Requirements: "</strong>"We may disclose information when required by law or to protect our rights, property, or safety"</li>
                            <li><strong>"Business Transfers: "</strong>"In the event of a merger, acquisition, or sale of assets, customer information may be transferred as part of the transaction"</li>
                        </ul>
                    </section>

                    <section class="legal-section">
                        <h2>"Data Security"</h2>
                        <p>"We implement appropriate security measures to protect your personal information against unauthorized access, alteration, disclosure, or destruction. However, no method of transmission over the internet or electronic storage is 100% secure, and we cannot guarantee absolute security."</p>
                    </section>

                    <section class="legal-section">
                        <h2>"Cookies and Tracking Technologies"</h2>
                        <p>"Our website may use cookies and similar tracking technologies to enhance your browsing experience. Cookies are small files that are stored on your device and help us:"</p>
                        <ul>
                            <li>"Remember your preferences and settings"</li>
                            <li>"Analyze website traffic and usage patterns"</li>
                            <li>"Improve website functionality and performance"</li>
                        </ul>
                        <p>"You can control cookie settings through your browser preferences, but disabling cookies may affect website functionality."</p>
                    </section>

                    <section class="legal-section">
                        <h2>"Your Rights and Choices"</h2>
                        <p>"You have the right to:"</p>
                        <ul>
                            <li>"Access and review your personal information"</li>
                            <li>"Request correction of inaccurate information"</li>
                            <li>"Request deletion of your personal information"</li>
                            <li>"Opt-out of marketing communications"</li>
                            <li>"Withdraw consent for data processing"</li>
                        </ul>
                        <p>"To exercise these rights, please contact us using the information provided in the \"Contact Us\" section below."</p>
                    </section>

                    <section class="legal-section">
                        <h2>"Data Retention"</h2>
                        <p>"We retain your personal information for as long as necessary to fulfill the purposes outlined in this Privacy Policy, unless a longer retention period is required or permitted by law. When we no longer need your information, we will securely delete or anonymize it."</p>
                    </section>

                    <section class="legal-section">
                        <h2>"Children's Privacy"</h2>
                        <p>"Our services are not directed to children under the age of 13. We do not knowingly collect personal information from children under 13. If we become aware that we have collected personal information from a child under 13, we will take steps to delete such information."</p>
                    </section>

                    <section class="legal-section">
                        <h2>"Changes to This Privacy Policy"</h2>
                        <p>"We may update this Privacy Policy from time to time. We will notify you of any changes by posting the new Privacy Policy on this page and updating the \"Last updated\" date. We encourage you to review this Privacy Policy periodically for any changes."</p>
                    </section>

                    <section class="legal-section">
                        <h2>"Contact Us"</h2>
                        <p>"If you have any questions about this Privacy Policy or our privacy practices, please contact us:"</p>
                        <LegalContact />
                    </section>
                </div>
            </div>

            <Footer />
        </div>
    }
}
