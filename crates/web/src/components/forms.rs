// =============================================================================
// TTM Painting Web - Form Components
// =============================================================================
// Table of Contents:
// 1. Dispatch
// 2. FieldInput
// 3. FieldTextArea
// 4. ArrivalCheckbox
// =============================================================================
//
// Inputs bound to a shared `RwSignal<FormState>`. Every edit goes through
// `dispatch`, so one code path handles all fields.

use leptos::prelude::*;

use crate::estimate::{ArrivalWindow, Field, FormAction, FormState};

// -----------------------------------------------------------------------------
// 1. Dispatch
// -----------------------------------------------------------------------------

/// Apply an action to the form, logging rejected edits.
pub fn dispatch(form: RwSignal<FormState>, action: FormAction) {
    let mut result = Ok(());
    form.update(|state| result = state.apply(action));
    if let Err(e) = result {
        log::warn!("Ignoring form edit: {}", e);
    }
}

fn set_field(form: RwSignal<FormState>, field: Field, value: String) {
    dispatch(form, FormAction::SetField { field, value });
}

// -----------------------------------------------------------------------------
// 2. FieldInput
// -----------------------------------------------------------------------------

/// Single-line input bound to one form field.
#[component]
pub fn FieldInput(
    #[prop(into)] label: String,
    #[prop(into)] field: Field,
    form: RwSignal<FormState>,
    #[prop(optional, into)] input_type: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };
    let required = field.is_required();

    view! {
        <div class="form-field">
            <label class="form-label" for=field.name()>
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            <input
                id=field.name()
                name=field.name()
                type=input_type
                class="form-input"
                placeholder=placeholder
                required=required
                prop:value=move || form.with(|state| state.value(field))
                on:input=move |e| set_field(form, field, event_target_value(&e))
            />
            {hint.map(|h| view! { <p class="form-hint">{h}</p> })}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. FieldTextArea
// -----------------------------------------------------------------------------

/// Multi-line text area bound to one form field.
#[component]
pub fn FieldTextArea(
    #[prop(into)] label: String,
    #[prop(into)] field: Field,
    form: RwSignal<FormState>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] rows: u32,
) -> impl IntoView {
    let rows = if rows == 0 { 4 } else { rows };
    let required = field.is_required();

    view! {
        <div class="form-field">
            <label class="form-label" for=field.name()>
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            <textarea
                id=field.name()
                name=field.name()
                class="form-textarea"
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || form.with(|state| state.value(field))
                on:input=move |e| set_field(form, field, event_target_value(&e))
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. ArrivalCheckbox
// -----------------------------------------------------------------------------

/// Checkbox toggling one preferred arrival window.
#[component]
pub fn ArrivalCheckbox(window: ArrivalWindow, form: RwSignal<FormState>) -> impl IntoView {
    view! {
        <label class="form-checkbox" for=window.input_id()>
            <input
                type="checkbox"
                id=window.input_id()
                name="preferredTimes"
                value=window.label()
                prop:checked=move || form.with(|state| state.prefers(window))
                on:change=move |e| {
                    dispatch(
                        form,
                        FormAction::SetTimePreference {
                            window,
                            included: event_target_checked(&e),
                        },
                    );
                }
            />
            <span class="checkbox-label">{window.label()}</span>
        </label>
    }
}
