//! Application state and core logic

use crate::api::{RegisterError, RegistrationApi, RegistrationClient};
use crate::config::TuiConfig;
use crate::state::{next_semester, prev_semester, semester_for_digit, AppState, FieldName};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

type SubmitTask = JoinHandle<Result<(), RegisterError>>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the registration endpoint
    api: Arc<dyn RegistrationApi>,
    /// The outstanding registration request, if any
    in_flight: Option<SubmitTask>,
    /// How long toasts stay visible
    toast_ttl: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the registration endpoint
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_api(Arc::new(RegistrationClient::new()), config.toast_duration())
    }

    pub fn with_api(api: Arc<dyn RegistrationApi>, toast_ttl: Duration) -> Self {
        Self {
            state: AppState::default(),
            api,
            in_flight: None,
            toast_ttl,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.state.submitting
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                if self.in_flight.is_some() {
                    tracing::warn!("quitting with a registration request in flight");
                }
                self.quit = true;
            }
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Esc => {
                self.state.toasts.dismiss_latest();
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Enter submits from any field, like implicit form submission
            KeyCode::Enter => self.submit(),
            _ => self.handle_field_key(key),
        }
    }

    /// Keys that edit the focused field
    fn handle_field_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        let Some(name) = form.active_field() else {
            return;
        };
        let current = form.field(name).as_str();

        if name == FieldName::Semester {
            let choice = match key.code {
                KeyCode::Right | KeyCode::Char(' ') => Some(next_semester(current)),
                KeyCode::Left => Some(prev_semester(current)),
                KeyCode::Char(c) => semester_for_digit(c),
                _ => None,
            };
            if let Some(value) = choice {
                form.set_semester(value);
            }
            return;
        }

        let mut value = current.to_string();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => value.push(c),
            KeyCode::Backspace => {
                value.pop();
            }
            _ => return,
        }
        form.set_field(name, value);
    }

    /// Start a submission attempt.
    ///
    /// Ignored while a request is outstanding. The request runs on its own
    /// task so the UI keeps redrawing; its outcome is applied by `tick`.
    pub fn submit(&mut self) {
        let Some(payload) = self.state.begin_submit() else {
            return;
        };

        tracing::info!("submitting registration");
        let api = Arc::clone(&self.api);
        self.in_flight = Some(tokio::spawn(async move { api.register(&payload).await }));
    }

    /// Periodic housekeeping: expire toasts and collect a finished request
    pub async fn tick(&mut self) {
        self.state.toasts.expire(Instant::now(), self.toast_ttl);

        if self.in_flight.as_ref().is_some_and(JoinHandle::is_finished) {
            self.wait_for_submission().await;
        }
    }

    /// Wait for the outstanding request and apply its outcome
    pub async fn wait_for_submission(&mut self) {
        let Some(task) = self.in_flight.as_mut() else {
            return;
        };

        let result = match task.await {
            Ok(result) => result,
            Err(err) => Err(RegisterError::Aborted(err.to_string())),
        };
        self.in_flight = None;
        self.state.finish_submit(result);
    }
}
