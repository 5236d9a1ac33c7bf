// =============================================================================
// TTM Painting Web - Estimate Form Fields
// =============================================================================
// Table of Contents:
// 1. Text Fields
// 2. Date Fields
// 3. Field (input name dispatch)
// 4. Arrival Windows
// =============================================================================

use std::fmt;
use std::str::FromStr;

use super::FormError;

// -----------------------------------------------------------------------------
// 1. Text Fields
// -----------------------------------------------------------------------------

/// Free-text inputs on the estimate form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextField {
    FirstName,
    LastName,
    CompanyName,
    Email,
    Phone,
    Street1,
    Street2,
    City,
    State,
    ZipCode,
    EstimateDetails,
}

impl TextField {
    /// Every text field, in form order.
    pub const ALL: [TextField; 11] = [
        TextField::FirstName,
        TextField::LastName,
        TextField::CompanyName,
        TextField::Email,
        TextField::Phone,
        TextField::Street1,
        TextField::Street2,
        TextField::City,
        TextField::State,
        TextField::ZipCode,
        TextField::EstimateDetails,
    ];

    /// HTML `name`/`id` attribute of the input.
    pub fn name(&self) -> &'static str {
        match self {
            TextField::FirstName => "firstName",
            TextField::LastName => "lastName",
            TextField::CompanyName => "companyName",
            TextField::Email => "email",
            TextField::Phone => "phone",
            TextField::Street1 => "street1",
            TextField::Street2 => "street2",
            TextField::City => "city",
            TextField::State => "state",
            TextField::ZipCode => "zipCode",
            TextField::EstimateDetails => "estimateDetails",
        }
    }

    /// Query key forwarded to the booking form.
    ///
    /// `Street2` is collected but has never been forwarded; the booking
    /// form only receives the first address line.
    pub fn handoff_key(&self) -> Option<&'static str> {
        match self {
            TextField::Street2 => None,
            other => Some(other.name()),
        }
    }

    /// Whether the input carries the `required` attribute.
    pub fn is_required(&self) -> bool {
        !matches!(self, TextField::CompanyName | TextField::Street2)
    }
}

// -----------------------------------------------------------------------------
// 2. Date Fields
// -----------------------------------------------------------------------------

/// Calendar-date inputs (`<input type="date">`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DateField {
    PreferredDate,
    AlternativeDate,
}

impl DateField {
    pub const ALL: [DateField; 2] = [DateField::PreferredDate, DateField::AlternativeDate];

    pub fn name(&self) -> &'static str {
        match self {
            DateField::PreferredDate => "preferredDate",
            DateField::AlternativeDate => "alternativeDate",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, DateField::PreferredDate)
    }
}

// -----------------------------------------------------------------------------
// 3. Field (input name dispatch)
// -----------------------------------------------------------------------------

/// Any scalar field, addressable by its input name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Text(TextField),
    Date(DateField),
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Text(field) => field.name(),
            Field::Date(field) => field.name(),
        }
    }

    pub fn is_required(&self) -> bool {
        match self {
            Field::Text(field) => field.is_required(),
            Field::Date(field) => field.is_required(),
        }
    }
}

impl From<TextField> for Field {
    fn from(field: TextField) -> Self {
        Field::Text(field)
    }
}

impl From<DateField> for Field {
    fn from(field: DateField) -> Self {
        Field::Date(field)
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if let Some(field) = TextField::ALL.iter().find(|f| f.name() == name) {
            return Ok(Field::Text(*field));
        }
        DateField::ALL
            .iter()
            .find(|f| f.name() == name)
            .map(|f| Field::Date(*f))
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -----------------------------------------------------------------------------
// 4. Arrival Windows
// -----------------------------------------------------------------------------

/// Preferred arrival time of day for the on-site assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrivalWindow {
    AnyTime,
    Morning,
    Afternoon,
    Evening,
}

impl ArrivalWindow {
    pub const ALL: [ArrivalWindow; 4] = [
        ArrivalWindow::AnyTime,
        ArrivalWindow::Morning,
        ArrivalWindow::Afternoon,
        ArrivalWindow::Evening,
    ];

    /// Display label, also the value sent to the booking form.
    pub fn label(&self) -> &'static str {
        match self {
            ArrivalWindow::AnyTime => "Any time",
            ArrivalWindow::Morning => "Morning",
            ArrivalWindow::Afternoon => "Afternoon",
            ArrivalWindow::Evening => "Evening",
        }
    }

    /// Checkbox element id.
    pub fn input_id(&self) -> &'static str {
        match self {
            ArrivalWindow::AnyTime => "arrival-any-time",
            ArrivalWindow::Morning => "arrival-morning",
            ArrivalWindow::Afternoon => "arrival-afternoon",
            ArrivalWindow::Evening => "arrival-evening",
        }
    }
}

impl fmt::Display for ArrivalWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in TextField::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), Field::Text(field));
        }
        for field in DateField::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), Field::Date(field));
        }
    }

    #[test]
    fn test_unknown_field_name() {
        let err = "images".parse::<Field>().unwrap_err();
        assert_eq!(err, FormError::UnknownField("images".to_string()));
    }

    #[test]
    fn test_street2_has_no_handoff_key() {
        assert_eq!(TextField::Street2.handoff_key(), None);
        assert_eq!(TextField::Street1.handoff_key(), Some("street1"));
    }

    #[test]
    fn test_required_fields() {
        assert!(!TextField::CompanyName.is_required());
        assert!(!TextField::Street2.is_required());
        assert!(TextField::EstimateDetails.is_required());
        assert!(DateField::PreferredDate.is_required());
        assert!(!DateField::AlternativeDate.is_required());
    }

    #[test]
    fn test_arrival_window_labels() {
        assert_eq!(ArrivalWindow::AnyTime.label(), "Any time");
        assert_eq!(ArrivalWindow::Evening.to_string(), "Evening");
        assert_eq!(ArrivalWindow::Afternoon.input_id(), "arrival-afternoon");
    }
}
