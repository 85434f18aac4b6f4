//! Form domain layer
//!
//! Type-safe field values and the registration form that owns them.

mod field;
mod form_state;

pub use field::{next_semester, prev_semester, semester_for_digit, FieldName, FormField};
pub use form_state::{RegistrationForm, RegistrationPayload};
