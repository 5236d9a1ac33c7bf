// =============================================================================
// TTM Painting Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Card
// 2. Form Section
// 3. Notice
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Card
// -----------------------------------------------------------------------------

/// Card container component.
#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let has_header = title.is_some() || description.is_some();

    view! {
        <div class=format!("card {}", class)>
            {has_header.then(|| view! {
                <div class="card-header">
                    {title.map(|t| view! { <h2 class="card-title">{t}</h2> })}
                    {description.map(|d| view! { <p class="card-description">{d}</p> })}
                </div>
            })}
            <div class="card-body">
                {children()}
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Form Section
// -----------------------------------------------------------------------------

/// Titled group of inputs inside a form.
#[component]
pub fn FormSection(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="form-section">
            <h5 class="form-section-title">{title}</h5>
            {children()}
        </section>
    }
}

// -----------------------------------------------------------------------------
// 3. Notice
// -----------------------------------------------------------------------------

/// Warning banner with an optional call-to-action link.
#[component]
pub fn Notice(
    #[prop(into)] message: String,
    #[prop(optional, into)] link: Option<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="notice" role="alert">
            <span class="notice-icon">"⚠️"</span>
            <span class="notice-message">{message}</span>
            {link.map(|(href, label)| view! {
                <a href=href target="_blank" rel="noopener" class="notice-link">{label}</a>
            })}
        </div>
    }
}
