// =============================================================================
// TTM Painting Web - Estimate Form State
// =============================================================================
// Table of Contents:
// 1. Form State
// 2. Field Updates
// 3. Form Actions (reducer)
// =============================================================================

use chrono::NaiveDate;

use super::attachments::Attachment;
use super::fields::{ArrivalWindow, DateField, Field, TextField};
use super::FormError;

/// Latest year a browser date control will emit.
pub const MAX_CONTROL_YEAR: u32 = 275_760;

// -----------------------------------------------------------------------------
// 1. Form State
// -----------------------------------------------------------------------------

/// A calendar date exactly as `<input type="date">` emits it.
///
/// The year has at least four digits and may run past 9999, so the control's
/// text is kept as-is and only checked for being a real day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlDate(String);

impl ControlDate {
    /// `YYYY-MM-DD` (or wider year). `None` for anything the control would not emit.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split('-');
        let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some()
            || year.len() < 4
            || month.len() != 2
            || day.len() != 2
            || ![year, month, day].iter().all(|p| p.bytes().all(|b| b.is_ascii_digit()))
        {
            return None;
        }

        let year: u32 = year.parse().ok()?;
        if year == 0 || year > MAX_CONTROL_YEAR {
            return None;
        }
        // Leap years repeat every 400 years, so a year from the same cycle
        // tells whether this day exists.
        let cycle_year = 2000 + (year % 400) as i32;
        NaiveDate::from_ymd_opt(cycle_year, month.parse().ok()?, day.parse().ok()?)?;

        Some(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Everything a visitor has entered on the estimate form.
///
/// One instance lives for one page view. Nothing is persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub estimate_details: String,
    pub preferred_date: Option<ControlDate>,
    pub alternative_date: Option<ControlDate>,
    /// Selection order is kept for display; never contains duplicates.
    preferred_times: Vec<ArrivalWindow>,
    /// Append-only for the life of the form.
    attachments: Vec<Attachment>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::CompanyName => &self.company_name,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
            TextField::Street1 => &self.street1,
            TextField::Street2 => &self.street2,
            TextField::City => &self.city,
            TextField::State => &self.state,
            TextField::ZipCode => &self.zip_code,
            TextField::EstimateDetails => &self.estimate_details,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FirstName => &mut self.first_name,
            TextField::LastName => &mut self.last_name,
            TextField::CompanyName => &mut self.company_name,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
            TextField::Street1 => &mut self.street1,
            TextField::Street2 => &mut self.street2,
            TextField::City => &mut self.city,
            TextField::State => &mut self.state,
            TextField::ZipCode => &mut self.zip_code,
            TextField::EstimateDetails => &mut self.estimate_details,
        }
    }

    pub fn date(&self, field: DateField) -> Option<&ControlDate> {
        match field {
            DateField::PreferredDate => self.preferred_date.as_ref(),
            DateField::AlternativeDate => self.alternative_date.as_ref(),
        }
    }

    fn date_mut(&mut self, field: DateField) -> &mut Option<ControlDate> {
        match field {
            DateField::PreferredDate => &mut self.preferred_date,
            DateField::AlternativeDate => &mut self.alternative_date,
        }
    }

    /// Current value of a field as the input control shows it.
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Text(field) => self.text(field).to_string(),
            Field::Date(field) => self
                .date(field)
                .map(|date| date.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn preferred_times(&self) -> &[ArrivalWindow] {
        &self.preferred_times
    }

    pub fn prefers(&self, window: ArrivalWindow) -> bool {
        self.preferred_times.contains(&window)
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }
}

// -----------------------------------------------------------------------------
// 2. Field Updates
// -----------------------------------------------------------------------------

impl FormState {
    /// Overwrite one scalar field. Last write wins.
    ///
    /// Dates take whatever the date control emits (see [`ControlDate`]); an
    /// empty string clears the date. A malformed date leaves the field untouched.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), FormError> {
        match field {
            Field::Text(field) => {
                *self.text_mut(field) = value.to_string();
            }
            Field::Date(field) => {
                let parsed = if value.is_empty() {
                    None
                } else {
                    let date = ControlDate::parse(value).ok_or_else(|| FormError::InvalidDate {
                        field: field.name(),
                        value: value.to_string(),
                    })?;
                    Some(date)
                };
                *self.date_mut(field) = parsed;
            }
        }
        Ok(())
    }

    /// Tick or untick an arrival window.
    pub fn set_time_preference(&mut self, window: ArrivalWindow, included: bool) {
        if included {
            if !self.prefers(window) {
                self.preferred_times.push(window);
            }
        } else {
            self.preferred_times.retain(|w| *w != window);
        }
    }

    /// Append picked files in the order given.
    pub fn add_attachments(&mut self, files: impl IntoIterator<Item = Attachment>) {
        self.attachments.extend(files);
    }
}

// -----------------------------------------------------------------------------
// 3. Form Actions (reducer)
// -----------------------------------------------------------------------------

/// A single edit coming from the form's inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    SetField { field: Field, value: String },
    SetTimePreference { window: ArrivalWindow, included: bool },
    AddAttachments(Vec<Attachment>),
}

impl FormState {
    /// Apply an action in place.
    pub fn apply(&mut self, action: FormAction) -> Result<(), FormError> {
        match action {
            FormAction::SetField { field, value } => self.set_field(field, &value)?,
            FormAction::SetTimePreference { window, included } => {
                self.set_time_preference(window, included)
            }
            FormAction::AddAttachments(files) => self.add_attachments(files),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = FormState::new();

        for field in TextField::ALL {
            assert!(form.text(field).is_empty());
        }
        assert_eq!(form.preferred_date, None);
        assert_eq!(form.alternative_date, None);
        assert!(form.preferred_times().is_empty());
        assert!(form.attachments().is_empty());
    }

    #[test]
    fn test_set_field_last_write_wins() {
        let mut form = FormState::new();

        form.set_field(TextField::City.into(), "Dixon").unwrap();
        form.set_field(TextField::City.into(), "Sterling").unwrap();

        assert_eq!(form.city, "Sterling");
        assert!(form.first_name.is_empty());
    }

    fn date(value: &str) -> Option<ControlDate> {
        ControlDate::parse(value)
    }

    #[test]
    fn test_set_field_addressed_by_input_name() {
        let mut form = FormState::new();

        form.set_field("zipCode".parse().unwrap(), "61081").unwrap();
        form.set_field("preferredDate".parse().unwrap(), "2025-07-14").unwrap();

        assert_eq!(form.zip_code, "61081");
        assert_eq!(form.preferred_date, date("2025-07-14"));
        assert_eq!(form.value(DateField::PreferredDate.into()), "2025-07-14");
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        let err = "nickname".parse::<Field>().unwrap_err();

        assert_eq!(err, FormError::UnknownField("nickname".to_string()));
    }

    #[test]
    fn test_empty_date_clears() {
        let mut form = FormState::new();

        form.set_field(DateField::AlternativeDate.into(), "2025-08-01").unwrap();
        form.set_field(DateField::AlternativeDate.into(), "").unwrap();

        assert_eq!(form.alternative_date, None);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let mut form = FormState::new();
        form.set_field(DateField::PreferredDate.into(), "2025-02-10").unwrap();

        let result = form.set_field(DateField::PreferredDate.into(), "2025-02-30");

        assert!(matches!(result, Err(FormError::InvalidDate { field: "preferredDate", .. })));
        assert_eq!(form.preferred_date, date("2025-02-10"));
    }

    #[test]
    fn test_wide_year_kept_as_emitted() {
        let mut form = FormState::new();

        form.set_field(DateField::PreferredDate.into(), "10000-01-01").unwrap();
        form.set_field(DateField::AlternativeDate.into(), "275760-09-13").unwrap();

        assert_eq!(form.value(DateField::PreferredDate.into()), "10000-01-01");
        assert_eq!(form.value(DateField::AlternativeDate.into()), "275760-09-13");
    }

    #[test]
    fn test_control_date_calendar_rules() {
        assert!(ControlDate::parse("2024-02-29").is_some());
        assert!(ControlDate::parse("2000-02-29").is_some());
        assert!(ControlDate::parse("10400-02-29").is_some());
        assert!(ControlDate::parse("2100-02-29").is_none());
        assert!(ControlDate::parse("2025-13-01").is_none());
        assert!(ControlDate::parse("0000-01-01").is_none());
        assert!(ControlDate::parse("275761-01-01").is_none());
        assert!(ControlDate::parse("25-01-01").is_none());
        assert!(ControlDate::parse("2025-1-01").is_none());
        assert!(ControlDate::parse("+10000-01-01").is_none());
        assert!(ControlDate::parse("2025-01-01T00:00").is_none());
        assert_eq!(ControlDate::parse("0987-06-05").unwrap().as_str(), "0987-06-05");
    }

    #[test]
    fn test_time_preference_keeps_selection_order() {
        let mut form = FormState::new();

        form.set_time_preference(ArrivalWindow::Evening, true);
        form.set_time_preference(ArrivalWindow::Morning, true);
        form.set_time_preference(ArrivalWindow::Evening, true);

        assert_eq!(
            form.preferred_times(),
            &[ArrivalWindow::Evening, ArrivalWindow::Morning]
        );
    }

    #[test]
    fn test_time_preference_remove_absent_is_noop() {
        let mut form = FormState::new();
        form.set_time_preference(ArrivalWindow::Morning, true);

        form.set_time_preference(ArrivalWindow::Afternoon, false);

        assert_eq!(form.preferred_times(), &[ArrivalWindow::Morning]);
    }

    #[test]
    fn test_attachments_append_without_dedup() {
        let mut form = FormState::new();

        form.add_attachments(vec![
            Attachment::new("front.jpg", "image/jpeg", 1, "blob:1"),
            Attachment::new("back.jpg", "image/jpeg", 1, "blob:2"),
        ]);
        form.add_attachments(vec![Attachment::new("front.jpg", "image/jpeg", 1, "blob:1")]);

        let names: Vec<&str> = form.attachments().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["front.jpg", "back.jpg", "front.jpg"]);
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let mut form = FormState::new();

        form.apply(FormAction::SetField {
            field: TextField::Email.into(),
            value: "tate@example.com".to_string(),
        })
        .unwrap();
        form.apply(FormAction::SetTimePreference {
            window: ArrivalWindow::AnyTime,
            included: true,
        })
        .unwrap();
        form.apply(FormAction::AddAttachments(vec![Attachment::new(
            "quote.pdf",
            "application/pdf",
            512,
            "blob:q",
        )]))
        .unwrap();

        assert_eq!(form.email, "tate@example.com");
        assert!(form.prefers(ArrivalWindow::AnyTime));
        assert_eq!(form.attachments().len(), 1);
    }

    fn arb_text_field() -> impl Strategy<Value = TextField> {
        proptest::sample::select(TextField::ALL.to_vec())
    }

    fn arb_window() -> impl Strategy<Value = ArrivalWindow> {
        proptest::sample::select(ArrivalWindow::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_text_fields_hold_last_write(
            writes in proptest::collection::vec((arb_text_field(), ".{0,12}"), 0..40)
        ) {
            let mut form = FormState::new();
            for (field, value) in &writes {
                form.set_field((*field).into(), value).unwrap();
            }

            for field in TextField::ALL {
                let expected = writes
                    .iter()
                    .rev()
                    .find(|(f, _)| *f == field)
                    .map(|(_, v)| v.as_str())
                    .unwrap_or("");
                prop_assert_eq!(form.text(field), expected);
            }
        }

        #[test]
        fn prop_time_set_follows_latest_toggle(
            toggles in proptest::collection::vec((arb_window(), any::<bool>()), 0..40)
        ) {
            let mut form = FormState::new();
            for (window, included) in &toggles {
                form.set_time_preference(*window, *included);
            }

            for window in ArrivalWindow::ALL {
                let latest = toggles.iter().rev().find(|(w, _)| *w == window).map(|(_, i)| *i);
                prop_assert_eq!(form.prefers(window), latest.unwrap_or(false));
                let count = form.preferred_times().iter().filter(|w| **w == window).count();
                prop_assert!(count <= 1);
            }
        }

        #[test]
        fn prop_include_is_idempotent(
            toggles in proptest::collection::vec((arb_window(), any::<bool>()), 0..20),
            window in arb_window(),
        ) {
            let mut once = FormState::new();
            for (w, included) in &toggles {
                once.set_time_preference(*w, *included);
            }
            let mut twice = once.clone();

            once.set_time_preference(window, true);
            twice.set_time_preference(window, true);
            twice.set_time_preference(window, true);

            prop_assert_eq!(once.preferred_times(), twice.preferred_times());
        }
    }
}
