use super::parse::parse_leading_number;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three inputs of the calculator form, in declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Length,
    Width,
    Height,
}

impl FieldId {
    /// Declared order; validation and focus follow it.
    pub const ALL: [FieldId; 3] = [FieldId::Length, FieldId::Width, FieldId::Height];

    /// DOM id of the input element.
    pub const fn id(self) -> &'static str {
        match self {
            FieldId::Length => "length",
            FieldId::Width => "width",
            FieldId::Height => "height",
        }
    }

    /// DOM id of the error slot next to the input.
    pub const fn error_slot_id(self) -> &'static str {
        match self {
            FieldId::Length => "length-error",
            FieldId::Width => "width-error",
            FieldId::Height => "height-error",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FieldId::Length => "Length (cm)",
            FieldId::Width => "Width (cm)",
            FieldId::Height => "Height (cm)",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            FieldId::Length => 0,
            FieldId::Width => 1,
            FieldId::Height => 2,
        }
    }
}

/// Why a field failed validation. `Display` is the user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required field.")]
    MissingValue,
    #[error("Only a number may be entered.")]
    NonNumericValue,
    #[error("The number may not be 0 or negative.")]
    NonPositiveValue,
}

/// Outcome of the most recent validation of one field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FieldState {
    /// Not validated since load, the last keystroke, or the last reset.
    #[default]
    Unvalidated,
    Empty,
    Invalid(ValidationError),
    Valid(f64),
}

impl FieldState {
    /// Run the submit-time checks on a raw input value.
    pub fn validate(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldState::Empty;
        }
        match parse_leading_number(trimmed) {
            Some(value) if !value.is_finite() => {
                FieldState::Invalid(ValidationError::NonNumericValue)
            }
            Some(value) if value <= 0.0 => FieldState::Invalid(ValidationError::NonPositiveValue),
            Some(value) => FieldState::Valid(value),
            None => FieldState::Invalid(ValidationError::NonNumericValue),
        }
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self {
            FieldState::Empty => Some(ValidationError::MissingValue),
            FieldState::Invalid(err) => Some(*err),
            FieldState::Unvalidated | FieldState::Valid(_) => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.error().is_some()
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            FieldState::Valid(value) => Some(*value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(FieldState::validate(""), FieldState::Empty);
        assert_eq!(FieldState::validate("   \t"), FieldState::Empty);
        assert_eq!(
            FieldState::Empty.error().map(|e| e.to_string()).as_deref(),
            Some("Required field.")
        );
    }

    #[test]
    fn test_non_numeric() {
        for raw in ["abc", "-", ".", "e5", "Infinity", "-Infinity", "1e400"] {
            assert_eq!(
                FieldState::validate(raw),
                FieldState::Invalid(ValidationError::NonNumericValue),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_non_positive() {
        for raw in ["0", "-5", "-0", "0.0", " -2 "] {
            assert_eq!(
                FieldState::validate(raw),
                FieldState::Invalid(ValidationError::NonPositiveValue),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_valid_values() {
        assert_eq!(FieldState::validate(" 2 "), FieldState::Valid(2.0));
        assert_eq!(FieldState::validate("1.5"), FieldState::Valid(1.5));
        assert_eq!(FieldState::validate("12abc"), FieldState::Valid(12.0));
        assert_eq!(FieldState::validate("3e2"), FieldState::Valid(300.0));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::NonNumericValue.to_string(),
            "Only a number may be entered."
        );
        assert_eq!(
            ValidationError::NonPositiveValue.to_string(),
            "The number may not be 0 or negative."
        );
    }

    #[test]
    fn test_field_ids() {
        let ids: Vec<_> = FieldId::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(ids, ["length", "width", "height"]);
        assert_eq!(FieldId::Width.error_slot_id(), "width-error");
        assert_eq!(FieldId::Height.index(), 2);
    }
}
