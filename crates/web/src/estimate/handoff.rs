// =============================================================================
// TTM Painting Web - Booking Hand-off
// =============================================================================
// Table of Contents:
// 1. Window Features
// 2. Query Building
// 3. Hand-off Request
// =============================================================================
//
// Submitting the estimate form does not post anywhere. The scalar fields are
// copied into the query string of the Jobber work-request form, which is then
// opened in a new window. Attachments are never part of the hand-off.

use std::fmt;

use super::fields::{DateField, TextField};
use super::form::FormState;
use super::HandoffError;

/// Query key for the comma-joined arrival windows.
pub const PREFERRED_TIMES_KEY: &str = "preferredTimes";

// -----------------------------------------------------------------------------
// 1. Window Features
// -----------------------------------------------------------------------------

/// Sizing hints for the booking window. Browsers may ignore them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowFeatures {
    pub width: u32,
    pub height: u32,
    pub scrollbars: bool,
    pub resizable: bool,
}

impl Default for WindowFeatures {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            scrollbars: true,
            resizable: true,
        }
    }
}

impl fmt::Display for WindowFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |flag: bool| if flag { "yes" } else { "no" };
        write!(
            f,
            "width={},height={},scrollbars={},resizable={}",
            self.width,
            self.height,
            yes_no(self.scrollbars),
            yes_no(self.resizable)
        )
    }
}

// -----------------------------------------------------------------------------
// 2. Query Building
// -----------------------------------------------------------------------------

/// Key/value pairs forwarded to the booking form, in a fixed order.
///
/// Empty fields produce no pair at all.
pub fn query_pairs(form: &FormState) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    for field in TextField::ALL {
        let Some(key) = field.handoff_key() else {
            continue;
        };
        let value = form.text(field);
        if !value.is_empty() {
            pairs.push((key, value.to_string()));
        }
    }

    for field in DateField::ALL {
        if let Some(date) = form.date(field) {
            pairs.push((field.name(), date.as_str().to_string()));
        }
    }

    if !form.preferred_times().is_empty() {
        let joined = form
            .preferred_times()
            .iter()
            .map(|w| w.label())
            .collect::<Vec<_>>()
            .join(",");
        pairs.push((PREFERRED_TIMES_KEY, joined));
    }

    pairs
}

/// `application/x-www-form-urlencoded` encoding of one component.
///
/// Same output as the browser's `URLSearchParams`: spaces become `+`, `*` is
/// left alone and `~` is escaped.
fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw)
        .replace("%20", "+")
        .replace("%2A", "*")
        .replace('~', "%7E")
}

/// Serialise pairs into a query string (without the leading `?`).
pub fn encode_query(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn with_query(base_url: &str, query: &str) -> String {
    if query.is_empty() {
        base_url.to_string()
    } else {
        format!("{}?{}", base_url, query)
    }
}

// -----------------------------------------------------------------------------
// 3. Hand-off Request
// -----------------------------------------------------------------------------

/// A snapshot of the form, ready to open in the booking window.
#[derive(Clone, Debug, PartialEq)]
pub struct HandoffRequest {
    pub url: String,
    pub features: WindowFeatures,
    pub param_count: usize,
}

impl HandoffRequest {
    pub fn from_form(base_url: &str, form: &FormState) -> Self {
        let pairs = query_pairs(form);
        Self {
            url: with_query(base_url, &encode_query(&pairs)),
            features: WindowFeatures::default(),
            param_count: pairs.len(),
        }
    }

    /// Open the booking form in a new top-level window.
    ///
    /// Fire-and-forget: success only means the browser handed back a window.
    /// A `None` handle is how popup blockers show up.
    pub fn open(&self) -> Result<(), HandoffError> {
        let window = web_sys::window().ok_or(HandoffError::NoWindow)?;
        let opened = window
            .open_with_url_and_target_and_features(&self.url, "_blank", &self.features.to_string())
            .map_err(|err| HandoffError::Open(format!("{:?}", err)))?;

        match opened {
            Some(_) => Ok(()),
            None => Err(HandoffError::PopupBlocked {
                url: self.url.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::{ArrivalWindow, Attachment, Field};
    use proptest::prelude::*;

    const BASE: &str = "https://booking.example.com/work_request";

    fn keys(url: &str) -> Vec<String> {
        match url.split_once('?') {
            Some((_, query)) => query
                .split('&')
                .map(|pair| pair.split('=').next().unwrap_or_default().to_string())
                .collect(),
            None => Vec::new(),
        }
    }

    fn url_for(form: &FormState) -> String {
        HandoffRequest::from_form(BASE, form).url
    }

    fn required_only() -> FormState {
        let mut form = FormState::new();
        for (name, value) in [
            ("firstName", "Tate"),
            ("lastName", "Miller"),
            ("email", "tate@example.com"),
            ("phone", "8155550100"),
            ("street1", "12 Locust St"),
            ("city", "Sterling"),
            ("state", "IL"),
            ("zipCode", "61081"),
            ("estimateDetails", "Two bedrooms, walls and trim"),
            ("preferredDate", "2025-09-03"),
        ] {
            form.set_field(name.parse().unwrap(), value).unwrap();
        }
        form
    }

    #[test]
    fn test_window_features_string() {
        assert_eq!(
            WindowFeatures::default().to_string(),
            "width=800,height=600,scrollbars=yes,resizable=yes"
        );
    }

    #[test]
    fn test_required_fields_only() {
        let url = url_for(&required_only());

        assert_eq!(
            keys(&url),
            vec![
                "firstName",
                "lastName",
                "email",
                "phone",
                "street1",
                "city",
                "state",
                "zipCode",
                "estimateDetails",
                "preferredDate",
            ]
        );
        for absent in ["companyName", "street2", "alternativeDate", "preferredTimes"] {
            assert!(!keys(&url).iter().any(|k| k == absent), "{} leaked", absent);
        }
    }

    #[test]
    fn test_preferred_times_joined_in_selection_order() {
        let mut form = FormState::new();
        form.set_time_preference(ArrivalWindow::Morning, true);
        form.set_time_preference(ArrivalWindow::Evening, true);

        let url = url_for(&form);

        assert_eq!(url, format!("{}?preferredTimes=Morning%2CEvening", BASE));
    }

    #[test]
    fn test_empty_form_uses_bare_base_url() {
        let url = url_for(&FormState::new());
        assert_eq!(url, BASE);
        assert!(!url.contains('?'));
    }

    #[test]
    fn test_attachments_never_leave_the_client() {
        let mut form = required_only();
        form.add_attachments(vec![
            Attachment::new("living-room.jpg", "image/jpeg", 1_200_000, "blob:https://site/1"),
            Attachment::new("porch.heic", "image/heic", 900_000, "blob:https://site/2"),
            Attachment::new("old-quote.pdf", "application/pdf", 40_000, "blob:https://site/3"),
        ]);

        let request = HandoffRequest::from_form(BASE, &form);

        assert_eq!(request.url, url_for(&required_only()));
        for needle in ["living-room", "porch", "old-quote", "blob"] {
            assert!(!request.url.contains(needle));
        }
    }

    #[test]
    fn test_street2_is_not_forwarded() {
        let mut form = FormState::new();
        form.set_field(TextField::Street2.into(), "Apt 4").unwrap();

        assert_eq!(url_for(&form), BASE);
    }

    #[test]
    fn test_values_are_form_urlencoded() {
        let mut form = FormState::new();
        form.set_field(TextField::CompanyName.into(), "Smith & Sons").unwrap();
        form.set_time_preference(ArrivalWindow::AnyTime, true);

        let request = HandoffRequest::from_form(BASE, &form);

        assert_eq!(
            request.url,
            format!("{}?companyName=Smith+%26+Sons&preferredTimes=Any+time", BASE)
        );
        assert_eq!(request.param_count, 2);
    }

    #[test]
    fn test_reserved_characters_encoded_like_url_search_params() {
        let mut form = FormState::new();
        form.set_field(TextField::EstimateDetails.into(), "2*3 ~x (a)!'").unwrap();

        assert_eq!(
            url_for(&form),
            format!("{}?estimateDetails=2*3+%7Ex+%28a%29%21%27", BASE)
        );
    }

    #[test]
    fn test_wide_year_date_is_forwarded() {
        let mut form = FormState::new();
        form.set_field(DateField::PreferredDate.into(), "10000-01-01").unwrap();

        let url = url_for(&form);

        assert!(url.contains("preferredDate=10000-01-01"), "{}", url);
        assert_eq!(keys(&url), vec!["preferredDate"]);
    }

    #[test]
    fn test_submit_does_not_reset_form() {
        let form = required_only();
        let before = form.clone();

        let _ = HandoffRequest::from_form(BASE, &form);

        assert_eq!(form, before);
    }

    fn arb_field() -> impl Strategy<Value = Field> {
        let mut fields: Vec<Field> = TextField::ALL.iter().map(|f| Field::Text(*f)).collect();
        fields.extend(DateField::ALL.iter().map(|f| Field::Date(*f)));
        proptest::sample::select(fields)
    }

    proptest! {
        #[test]
        fn prop_key_present_iff_field_non_empty(
            writes in proptest::collection::vec(
                (arb_field(), prop_oneof![Just(String::new()), "[a-zA-Z ,&]{1,10}", Just("2025-10-01".to_string()), Just("12025-10-01".to_string())]),
                0..30
            )
        ) {
            let mut form = FormState::new();
            for (field, value) in &writes {
                // Free text into a date field is rejected and changes nothing.
                let _ = form.set_field(*field, value);
            }

            let url = url_for(&form);
            let emitted = keys(&url);

            for field in TextField::ALL {
                let expected = field.handoff_key().is_some() && !form.text(field).is_empty();
                prop_assert_eq!(emitted.iter().any(|k| k == field.name()), expected);
            }
            for field in DateField::ALL {
                prop_assert_eq!(
                    emitted.iter().any(|k| k == field.name()),
                    form.date(field).is_some()
                );
            }
            prop_assert!(!emitted.iter().any(|k| k == "street2"));
            prop_assert_eq!(url.contains('?'), !emitted.is_empty());
        }
    }
}
