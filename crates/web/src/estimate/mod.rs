// =============================================================================
// TTM Painting Web - Free Estimate Request
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// 3. Error Types
// =============================================================================
//
// Data model and hand-off logic behind the estimate form. Nothing in here
// touches the DOM except `Attachment::from_file` and `HandoffRequest::open`.

pub mod attachments;
pub mod fields;
pub mod form;
pub mod handoff;

pub use attachments::{accept_attribute, Attachment, ACCEPTED_MIME_TYPES};
pub use fields::{ArrivalWindow, DateField, Field, TextField};
pub use form::{FormAction, FormState};
pub use handoff::{HandoffRequest, WindowFeatures};

use thiserror::Error;

// -----------------------------------------------------------------------------
// 3. Error Types
// -----------------------------------------------------------------------------

/// Rejected form edits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Invalid date for {field}: {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

/// Failures opening the booking window.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HandoffError {
    #[error("No browser window available")]
    NoWindow,

    #[error("Booking window was blocked")]
    PopupBlocked { url: String },

    #[error("Failed to open booking window: {0}")]
    Open(String),
}
