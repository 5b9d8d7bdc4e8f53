//! Application core: key dispatch and the submission controller

use crate::sender::ContactSender;
use crate::state::{AppState, Notice, SubmissionState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{error, info};

/// Notice shown when submit is attempted with invalid fields
pub const FIX_ERRORS_NOTICE: &str = "Please fix the errors in the form";
/// Notice shown after a successful delivery
pub const SUCCESS_NOTICE: &str = "Thank you for your message! We will get back to you shortly.";
/// Generic failure notice; delivery error detail stays in the logs
pub const FAILURE_NOTICE: &str =
    "Something went wrong while sending. Please try again later or call us.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Delivery backend for accepted submissions
    sender: Box<dyn ContactSender>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance with the given delivery backend
    pub fn new(sender: Box<dyn ContactSender>) -> Self {
        Self {
            state: AppState::default(),
            sender,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-tick housekeeping: expire the notice once its interval elapses
    pub fn tick(&mut self) {
        self.state.expire_notice();
    }

    /// Key dispatch table.
    ///
    /// Field navigation doubles as "blur": leaving a field re-runs the
    /// whole-form validation so displayed errors stay consistent across
    /// fields. Keystrokes in a field only clear that field's own error;
    /// blur or submit provides the authoritative pass.
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form().await;
            }
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            KeyCode::Enter => {
                if self.state.form.is_buttons_row_active() {
                    self.submit_form().await;
                } else if self.state.form.is_active_field_multiline() {
                    self.input_char('\n');
                } else {
                    // Enter in a single-line field advances, like Tab
                    self.move_focus(true);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.pop_char();
                }
                self.state.form.clear_active_field_error();
            }
            KeyCode::Char(c) => self.input_char(c),
            _ => {}
        }
        Ok(())
    }

    /// Move focus to the next/previous slot, validating on blur.
    ///
    /// Validation runs only when focus actually leaves a field; moving off
    /// the buttons row blurs nothing.
    fn move_focus(&mut self, forward: bool) {
        let left_a_field = !self.state.form.is_buttons_row_active();
        if forward {
            self.state.form.next_field();
        } else {
            self.state.form.prev_field();
        }
        if left_a_field {
            self.state.form.validate();
        }
    }

    /// Edit the active field, optimistically clearing its own error
    fn input_char(&mut self, c: char) {
        if let Some(field) = self.state.form.active_field_mut() {
            field.push_char(c);
        }
        self.state.form.clear_active_field_error();
    }

    /// Run one submission attempt through the full lifecycle.
    ///
    /// Idle -> Submitting only with a fully valid form; Succeeded/Failed
    /// collapse back to Idle before returning. The submit control is
    /// restored unconditionally on both outcomes.
    pub async fn submit_form(&mut self) {
        // Only one submission may be in flight; the disabled control
        // enforces this at the UI, the guard enforces it here.
        if self.state.submission == SubmissionState::Submitting {
            return;
        }

        if !self.state.form.validate() {
            self.state.show_notice(Notice::error(FIX_ERRORS_NOTICE));
            return;
        }

        let snapshot = self.state.form.snapshot();
        self.state.submission = SubmissionState::Submitting;
        self.state.submit.begin_sending();

        match self.sender.send(&snapshot).await {
            Ok(()) => {
                self.state.submission = SubmissionState::Succeeded;
                info!("contact form delivered");
                self.state.show_notice(Notice::success(SUCCESS_NOTICE));
                self.state.form.clear();
            }
            Err(e) => {
                self.state.submission = SubmissionState::Failed;
                error!(error = %e, "contact form delivery failed");
                self.state.show_notice(Notice::error(FAILURE_NOTICE));
            }
        }

        // Unconditional cleanup: the control is always left usable
        self.state.submit.restore();
        self.state.submission = SubmissionState::Idle;
    }
}
