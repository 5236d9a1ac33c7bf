// =============================================================================
// TTM Painting Web - Estimate Form Component
// =============================================================================
// Table of Contents:
// 1. EstimateForm
// 2. Attachment Picker
// 3. Attachment List
// =============================================================================
//
// Collects contact, address and scheduling details, then opens the Jobber
// work-request form pre-filled through its query string. Picked files are
// only listed back to the visitor.

use leptos::ev::{DragEvent, Event, SubmitEvent};
use leptos::prelude::*;
use web_sys::HtmlInputElement;

use super::common::{Card, FormSection, Notice};
use super::forms::{dispatch, ArrivalCheckbox, FieldInput, FieldTextArea};
use crate::estimate::{
    accept_attribute, ArrivalWindow, Attachment, DateField, FormAction, FormState,
    HandoffRequest, TextField,
};
use crate::state::AppState;
use crate::utils::format_file_size;

// -----------------------------------------------------------------------------
// 1. EstimateForm
// -----------------------------------------------------------------------------

/// Free estimate request form.
#[component]
pub fn EstimateForm(#[prop(optional, into)] class: String) -> impl IntoView {
    let config = expect_context::<AppState>().config;
    let booking_url = config.booking_url.clone();
    let sms_consent = format!(
        "By providing your phone number, you agree to receive text messages (SMS) from {}. \
         You can unsubscribe at anytime by replying STOP. Message and data rates may apply. \
         Message frequency varies.",
        config.business_name
    );

    let form = RwSignal::new(FormState::new());
    // Hand-off URL to show when the booking window could not be opened.
    let fallback = RwSignal::new(Option::<String>::None);

    on_cleanup(move || {
        let _ = form.try_with_untracked(|state| {
            state.attachments().iter().for_each(Attachment::revoke);
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let request = form.with_untracked(|state| HandoffRequest::from_form(&booking_url, state));
        log::info!(
            "Opening booking form ({} fields, {} chars)",
            request.param_count,
            request.url.len()
        );

        match request.open() {
            Ok(()) => fallback.set(None),
            Err(e) => {
                log::warn!("{}", e);
                fallback.set(Some(request.url));
            }
        }
    };

    view! {
        <div class=class>
            <Card
                title="Get Your Free Estimate"
                description="Fill out the form below and we'll get back to you within 24 hours with a detailed estimate."
                class="estimate-card"
            >
                <form class="estimate-form" on:submit=on_submit>
                    <FormSection title="Contact details">
                        <div class="form-grid cols-2">
                            <FieldInput label="First name" field=TextField::FirstName form=form placeholder="First name" />
                            <FieldInput label="Last name" field=TextField::LastName form=form placeholder="Last name" />
                        </div>
                        <FieldInput
                            label="Company name (if applicable)"
                            field=TextField::CompanyName
                            form=form
                            placeholder="Company name (if applicable)"
                        />
                        <FieldInput
                            label="Email"
                            field=TextField::Email
                            form=form
                            input_type="email"
                            placeholder="Email"
                            hint="By providing your email, you consent to receiving marketing emails and promotions. You can unsubscribe at any time."
                        />
                        <FieldInput
                            label="Phone number"
                            field=TextField::Phone
                            form=form
                            input_type="tel"
                            placeholder="Phone number"
                            hint=sms_consent
                        />
                    </FormSection>

                    <FormSection title="Address">
                        <FieldInput label="Street 1" field=TextField::Street1 form=form placeholder="Street 1" />
                        <FieldInput label="Street 2" field=TextField::Street2 form=form placeholder="Street 2" />
                        <div class="form-grid cols-3">
                            <FieldInput label="City" field=TextField::City form=form placeholder="City" />
                            <FieldInput label="State" field=TextField::State form=form placeholder="State" />
                            <FieldInput label="ZIP code" field=TextField::ZipCode form=form placeholder="ZIP code" />
                        </div>
                    </FormSection>

                    <FormSection title="Estimate Details">
                        <FieldTextArea
                            label="Please provide what you would like estimated for painting and/or other services"
                            field=TextField::EstimateDetails
                            form=form
                            placeholder="Please provide what you would like estimated for painting and/or other services"
                        />
                    </FormSection>

                    <FormSection title="Your Availability">
                        <div class="form-grid cols-2">
                            <FieldInput
                                label="Which day would be best for an assessment of the work?"
                                field=DateField::PreferredDate
                                form=form
                                input_type="date"
                            />
                            <FieldInput
                                label="What is another day that works for you? (optional)"
                                field=DateField::AlternativeDate
                                form=form
                                input_type="date"
                            />
                        </div>
                        <div class="form-field">
                            <span class="form-label">"What are your preferred arrival times? (optional)"</span>
                            <div class="form-grid cols-4">
                                {ArrivalWindow::ALL
                                    .into_iter()
                                    .map(|window| view! { <ArrivalCheckbox window=window form=form /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </FormSection>

                    <FormSection title="Upload images">
                        <p class="form-hint">"Share images of the work to be done (optional)"</p>
                        <AttachmentPicker form=form />
                        <AttachmentList form=form />
                    </FormSection>

                    {move || fallback.get().map(|url| {
                        let link = (url, "Continue to booking form".to_string());
                        view! {
                            <Notice
                                message="Your browser blocked the booking window. Use the link to continue with your request."
                                link=link
                            />
                        }
                    })}

                    <button type="submit" class="btn btn-primary btn-block">"Submit"</button>
                </form>

                <div class="form-footnote">
                    <p>"This form is protected by reCAPTCHA and the Google Privacy Policy and Terms of Service apply."</p>
                </div>
            </Card>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Attachment Picker
// -----------------------------------------------------------------------------

/// File picker and drop zone. Selections are appended, never replaced.
#[component]
fn AttachmentPicker(form: RwSignal<FormState>) -> impl IntoView {
    let dragging = RwSignal::new(false);

    let on_pick = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            let picked = Attachment::from_file_list(&files);
            log::debug!("Picked {} file(s)", picked.len());
            dispatch(form, FormAction::AddAttachments(picked));
        }
        // Clear so picking the same file again still fires `change`.
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            let dropped = Attachment::from_file_list(&files);
            log::debug!("Dropped {} file(s)", dropped.len());
            dispatch(form, FormAction::AddAttachments(dropped));
        }
    };

    view! {
        <div
            class="drop-zone"
            class:dragging=move || dragging.get()
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                dragging.set(true);
            }
            on:dragleave=move |_| dragging.set(false)
            on:drop=on_drop
        >
            <input
                type="file"
                id="imageUpload"
                class="hidden"
                multiple=true
                accept=accept_attribute()
                on:change=on_pick
            />
            <label for="imageUpload" class="drop-zone-label">
                <img src="/assets/icons/upload.svg" alt="" class="drop-zone-icon" />
                <p class="form-hint">"Select or drag files here to upload"</p>
                <span class="btn btn-outline btn-small">"Upload File"</span>
            </label>
            <p class="form-fineprint">
                "Do not upload files with payment information. Ensure you have all required rights, consent and permissions to share."
            </p>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Attachment List
// -----------------------------------------------------------------------------

/// Files picked so far. They stay on the visitor's device.
#[component]
fn AttachmentList(form: RwSignal<FormState>) -> impl IntoView {
    let has_files = move || form.with(|state| !state.attachments().is_empty());

    view! {
        <Show when=has_files>
            <div class="attachment-list">
                <p class="attachment-list-title">"Uploaded files:"</p>
                <ul>
                    <For
                        each=move || form.with(|state| state.attachments().to_vec())
                        key=|attachment| attachment.id
                        children=move |attachment| {
                            let unsupported = !attachment.matches_picker_filter();
                            view! {
                                <li class="attachment-item">
                                    <img src="/assets/icons/image.svg" alt="" class="attachment-icon" />
                                    <span class="attachment-name">{attachment.name.clone()}</span>
                                    <span class="attachment-size">{format_file_size(attachment.size)}</span>
                                    {unsupported.then(|| view! {
                                        <span class="attachment-warning">"Unsupported file type"</span>
                                    })}
                                </li>
                            }
                        }
                    />
                </ul>
                <p class="form-fineprint">
                    "Files are kept in your browser and are not sent with the booking request. Bring them to your assessment or email them to us."
                </p>
            </div>
        </Show>
    }
}
