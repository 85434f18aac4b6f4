//! Registration form state and request payload

use super::field::{FieldName, FormField};
use serde::Serialize;
use thiserror::Error;

/// Focus index of the Register button row (after the five fields)
pub const SUBMIT_BUTTON_INDEX: usize = 5;

/// Validation failure for a submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields(Vec<FieldName>),
}

/// Request body posted to the registration endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub email: String,
    pub name: String,
    pub college: String,
    /// `None` when the semester text has no leading integer; serializes as `null`
    pub semester: Option<i64>,
    pub rollno: String,
}

/// The registration form: five fields plus keyboard focus
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub email: FormField,
    pub name: FormField,
    pub college: FormField,
    pub semester: FormField,
    pub roll_number: FormField,
    pub active_field_index: usize,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text(FieldName::Email),
            name: FormField::text(FieldName::Name),
            college: FormField::text(FieldName::College),
            semester: FormField::choice(FieldName::Semester),
            roll_number: FormField::text(FieldName::RollNumber),
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Email => &self.email,
            FieldName::Name => &self.name,
            FieldName::College => &self.college,
            FieldName::Semester => &self.semester,
            FieldName::RollNumber => &self.roll_number,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Email => &mut self.email,
            FieldName::Name => &mut self.name,
            FieldName::College => &mut self.college,
            FieldName::Semester => &mut self.semester,
            FieldName::RollNumber => &mut self.roll_number,
        }
    }

    /// Overwrite exactly one field. Any string is accepted, including empty.
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).set(value.into());
    }

    /// Set the semester value as chosen by the semester control
    pub fn set_semester(&mut self, value: impl Into<String>) {
        self.set_field(FieldName::Semester, value);
    }

    /// Number of focus positions (five fields + the Register button)
    pub fn focus_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.focus_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.focus_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn is_submit_button_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// The field that has keyboard focus, if focus is not on the button row
    pub fn active_field(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    /// Check that every field holds a non-empty string
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<FieldName> = FieldName::ALL
            .into_iter()
            .filter(|name| self.field(*name).is_empty())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }

    /// Build the request body, converting the semester text to an integer
    pub fn payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            email: self.email.as_str().to_string(),
            name: self.name.as_str().to_string(),
            college: self.college.as_str().to_string(),
            semester: parse_leading_int(self.semester.as_str()),
            rollno: self.roll_number.as_str().to_string(),
        }
    }

    /// Reset every field to the empty string. Focus is left where it is.
    pub fn reset(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a base-10 integer prefix: optional leading whitespace, an optional
/// sign, then at least one digit. Anything after the digits is ignored.
/// Returns `None` when no digits are found or the value overflows. Unlike
/// JavaScript `parseInt`, a digit run too large for `i64` yields `None`.
fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_field(FieldName::Email, "a@b.com");
        form.set_field(FieldName::Name, "A B");
        form.set_field(FieldName::College, "X");
        form.set_semester("5");
        form.set_field(FieldName::RollNumber, "99");
        form
    }

    #[test]
    fn test_new_has_empty_defaults() {
        let form = RegistrationForm::new();
        for name in FieldName::ALL {
            assert_eq!(form.field(name).as_str(), "");
        }
        assert_eq!(form.active_field_index, 0);
        assert!(form.semester.is_choice());
    }

    #[test]
    fn test_set_field_touches_only_one_field() {
        let mut form = filled_form();
        form.set_field(FieldName::College, "");
        assert_eq!(form.college.as_str(), "");
        assert_eq!(form.email.as_str(), "a@b.com");
        assert_eq!(form.name.as_str(), "A B");
        assert_eq!(form.semester.as_str(), "5");
        assert_eq!(form.roll_number.as_str(), "99");
    }

    #[test]
    fn test_validate_accepts_filled_form() {
        assert_eq!(filled_form().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_every_subset_of_empty_fields() {
        for mask in 1u32..(1 << FieldName::ALL.len()) {
            let mut form = filled_form();
            let mut expected = Vec::new();
            for (bit, name) in FieldName::ALL.into_iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    form.set_field(name, "");
                    expected.push(name);
                }
            }
            let err = form.validate().unwrap_err();
            assert_eq!(err, ValidationError::MissingFields(expected));
            assert_eq!(err.to_string(), "All fields are required");
        }
    }

    #[test]
    fn test_validate_counts_whitespace_as_present() {
        let mut form = filled_form();
        form.set_field(FieldName::Name, " ");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_payload_serializes_with_wire_names() {
        let json = serde_json::to_string(&filled_form().payload()).unwrap();
        assert_eq!(
            json,
            r#"{"email":"a@b.com","name":"A B","college":"X","semester":5,"rollno":"99"}"#
        );
    }

    #[test]
    fn test_payload_passes_unparseable_semester_through_as_null() {
        let mut form = filled_form();
        form.set_semester("abc");
        let payload = form.payload();
        assert_eq!(payload.semester, None);
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["semester"].is_null());
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("3"), Some(3));
        assert_eq!(parse_leading_int("  8"), Some(8));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int("+6"), Some(6));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("x1"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn test_reset_clears_all_fields() {
        let mut form = filled_form();
        form.active_field_index = 2;
        form.reset();
        assert!(FieldName::ALL.iter().all(|n| form.field(*n).is_empty()));
        assert_eq!(form.active_field_index, 2);
    }

    #[test]
    fn test_next_field_cycles_through_button_row() {
        let mut form = RegistrationForm::new();
        for _ in 0..SUBMIT_BUTTON_INDEX {
            form.next_field();
        }
        assert!(form.is_submit_button_active());
        assert!(form.active_field().is_none());
        form.next_field();
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_button_row() {
        let mut form = RegistrationForm::new();
        form.prev_field();
        assert!(form.is_submit_button_active());
    }
}
