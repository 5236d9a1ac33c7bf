// =============================================================================
// TTM Painting Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Site Chrome
// 2. Common Components
// 3. Form Components
// =============================================================================

pub mod common;
pub mod estimate_form;
pub mod footer;
pub mod forms;
pub mod nav;

pub use common::{Card, FormSection, Notice};
pub use estimate_form::EstimateForm;
pub use footer::Footer;
pub use forms::{ArrivalCheckbox, FieldInput, FieldTextArea};
pub use nav::SiteNav;
