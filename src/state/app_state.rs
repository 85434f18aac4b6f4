//! Application state and the submission state machine

use super::forms::{RegistrationForm, RegistrationPayload};
use super::notification::{Toast, ToastQueue};
use crate::api::RegisterError;

pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_MESSAGE: &str = "Registration successful!";
pub const ERROR_TITLE: &str = "Error";
pub const FAILURE_MESSAGE: &str = "Registration failed. Please try again.";

/// Clears the submitting flag when dropped, on every exit path
struct SubmittingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> SubmittingGuard<'a> {
    fn new(flag: &'a mut bool) -> Self {
        Self { flag }
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: RegistrationForm,
    /// True only while a submission attempt is outstanding
    pub submitting: bool,
    pub toasts: ToastQueue,
}

impl AppState {
    /// Start a submission attempt.
    ///
    /// Returns the payload to send when the form is complete. Returns `None`
    /// when a submission is already in flight (the request is ignored) or when
    /// validation fails (an error toast is shown and the flag is cleared).
    pub fn begin_submit(&mut self) -> Option<RegistrationPayload> {
        if self.submitting {
            tracing::debug!("submission already in flight, ignoring");
            return None;
        }
        self.submitting = true;

        let Self {
            form,
            submitting,
            toasts,
        } = self;

        match form.validate() {
            Ok(()) => Some(form.payload()),
            Err(err) => {
                let _idle = SubmittingGuard::new(submitting);
                tracing::info!(?err, "registration form incomplete");
                toasts.push(Toast::destructive(ERROR_TITLE, err.to_string()));
                None
            }
        }
    }

    /// Apply the outcome of the registration request and leave the
    /// submitting state
    pub fn finish_submit(&mut self, result: Result<(), RegisterError>) {
        let Self {
            form,
            submitting,
            toasts,
        } = self;
        let _idle = SubmittingGuard::new(submitting);

        match result {
            Ok(()) => {
                tracing::info!("registration succeeded");
                toasts.push(Toast::success(SUCCESS_TITLE, SUCCESS_MESSAGE));
                form.reset();
            }
            Err(err) => {
                tracing::warn!(%err, "registration failed");
                toasts.push(Toast::destructive(ERROR_TITLE, FAILURE_MESSAGE));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, ToastVariant};
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;

    fn filled_state() -> AppState {
        let mut state = AppState::default();
        state.form.set_field(FieldName::Email, "a@b.com");
        state.form.set_field(FieldName::Name, "A B");
        state.form.set_field(FieldName::College, "X");
        state.form.set_semester("5");
        state.form.set_field(FieldName::RollNumber, "99");
        state
    }

    fn field_values(state: &AppState) -> Vec<String> {
        FieldName::ALL
            .iter()
            .map(|n| state.form.field(*n).as_str().to_string())
            .collect()
    }

    #[test]
    fn test_default_state_is_idle() {
        let state = AppState::default();
        assert!(!state.submitting);
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_begin_submit_with_missing_field_shows_error_and_stays_idle() {
        let mut state = filled_state();
        state.form.set_field(FieldName::College, "");

        assert!(state.begin_submit().is_none());
        assert!(!state.submitting);
        assert_eq!(state.toasts.iter().count(), 1);
        let toast = state.toasts.iter().next_back().unwrap();
        assert_eq!(toast.title, ERROR_TITLE);
        assert_eq!(toast.description, "All fields are required");
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }

    #[test]
    fn test_begin_submit_with_complete_form_enters_submitting() {
        let mut state = filled_state();
        let payload = state.begin_submit().unwrap();

        assert!(state.submitting);
        assert!(state.toasts.is_empty());
        assert_eq!(payload.semester, Some(5));
        assert_eq!(payload.rollno, "99");
    }

    #[test]
    fn test_begin_submit_ignored_while_submitting() {
        let mut state = filled_state();
        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());
        assert!(state.submitting);
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_finish_submit_success_resets_form() {
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.finish_submit(Ok(()));

        assert!(!state.submitting);
        assert_eq!(field_values(&state), vec![""; 5]);
        assert_eq!(state.toasts.iter().count(), 1);
        let toast = state.toasts.iter().next_back().unwrap();
        assert_eq!(toast.title, SUCCESS_TITLE);
        assert_eq!(toast.description, SUCCESS_MESSAGE);
        assert_eq!(toast.variant, ToastVariant::Default);
    }

    #[test]
    fn test_finish_submit_rejection_keeps_fields() {
        let mut state = filled_state();
        let before = field_values(&state);
        state.begin_submit().unwrap();
        state.finish_submit(Err(RegisterError::Rejected(
            StatusCode::INTERNAL_SERVER_ERROR,
        )));

        assert!(!state.submitting);
        assert_eq!(field_values(&state), before);
        assert_eq!(state.toasts.iter().count(), 1);
        assert_eq!(state.toasts.iter().next_back().unwrap().description, FAILURE_MESSAGE);
    }

    #[test]
    fn test_finish_submit_abort_matches_rejection() {
        let mut state = filled_state();
        let before = field_values(&state);
        state.begin_submit().unwrap();
        state.finish_submit(Err(RegisterError::Aborted("panicked".to_string())));

        assert!(!state.submitting);
        assert_eq!(field_values(&state), before);
        let toast = state.toasts.iter().next_back().unwrap();
        assert_eq!(toast.title, ERROR_TITLE);
        assert_eq!(toast.description, FAILURE_MESSAGE);
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }

    #[test]
    fn test_guard_clears_flag_on_unwind() {
        let mut flag = true;
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = SubmittingGuard::new(&mut flag);
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(!flag);
    }
}
