//! Form field value objects

use std::fmt;
use std::str::FromStr;

/// Values offered by the semester choice control
pub const SEMESTER_OPTIONS: [&str; 8] = ["1", "2", "3", "4", "5", "6", "7", "8"];

/// Option after `current` (wraps). Nothing selected yields the first option.
pub fn next_semester(current: &str) -> &'static str {
    let next = match SEMESTER_OPTIONS.iter().position(|o| *o == current) {
        Some(i) => (i + 1) % SEMESTER_OPTIONS.len(),
        None => 0,
    };
    SEMESTER_OPTIONS[next]
}

/// Option before `current` (wraps). Nothing selected yields the last option.
pub fn prev_semester(current: &str) -> &'static str {
    let last = SEMESTER_OPTIONS.len() - 1;
    let prev = match SEMESTER_OPTIONS.iter().position(|o| *o == current) {
        Some(0) | None => last,
        Some(i) => i - 1,
    };
    SEMESTER_OPTIONS[prev]
}

/// Option named by a typed digit, if there is one
pub fn semester_for_digit(c: char) -> Option<&'static str> {
    SEMESTER_OPTIONS
        .into_iter()
        .find(|o| o.chars().eq(std::iter::once(c)))
}

/// Identifies one of the five registration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Email,
    Name,
    College,
    Semester,
    RollNumber,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 5] = [
        FieldName::Email,
        FieldName::Name,
        FieldName::College,
        FieldName::Semester,
        FieldName::RollNumber,
    ];

    /// Name used for the field in the request body
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Name => "name",
            Self::College => "college",
            Self::Semester => "semester",
            Self::RollNumber => "rollno",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Name => "Name",
            Self::College => "College",
            Self::Semester => "Semester",
            Self::RollNumber => "Roll Number",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Email => "user@example.com",
            Self::Name => "John Doe",
            Self::College => "Sample College",
            Self::Semester => "Select semester",
            Self::RollNumber => "12345",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown field: {s}"))
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Discrete choice; the empty string means nothing selected yet
    Choice(String),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new free-text field
    pub fn text(name: FieldName) -> Self {
        Self {
            label: name.label(),
            placeholder: name.placeholder(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new choice field with nothing selected
    pub fn choice(name: FieldName) -> Self {
        Self {
            label: name.label(),
            placeholder: name.placeholder(),
            value: FieldValue::Choice(String::new()),
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice(_))
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Choice(s) => s,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Overwrite the value, keeping the field kind
    pub fn set(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Choice(s) => *s = value,
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Choice(s) => s.clear(),
        }
    }

    /// Get the display value for rendering (placeholder when empty)
    pub fn display_value(&self) -> &str {
        if self.is_empty() {
            self.placeholder
        } else {
            self.as_str()
        }
    }
}
