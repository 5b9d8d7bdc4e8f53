//! Application state: form, submission lifecycle, notices, submit control

use crate::state::ContactForm;
use std::time::{Duration, Instant};

/// How long a notice stays on screen before auto-dismissing
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Default label on the submit control
pub const SUBMIT_LABEL: &str = "Send";
/// Label shown while a submission is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// Submission lifecycle. Owned solely by `App`; Succeeded and Failed are
/// transient and collapse back to Idle before the submit handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Kind of a top-level notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// Transient top-level user message, auto-dismissed after a fixed interval
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    shown_at: Instant,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
            shown_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
            shown_at: Instant::now(),
        }
    }

    /// Whether the display interval has elapsed
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= NOTICE_DURATION
    }
}

/// Enabled flag and label of the submit control
#[derive(Debug, Clone)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: &'static str,
}

impl SubmitControl {
    /// Disable the control and switch to the in-flight label
    pub fn begin_sending(&mut self) {
        self.enabled = false;
        self.label = SENDING_LABEL;
    }

    /// Re-enable the control and restore the original label.
    /// Runs unconditionally after every submission attempt.
    pub fn restore(&mut self) {
        self.enabled = true;
        self.label = SUBMIT_LABEL;
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            enabled: true,
            label: SUBMIT_LABEL,
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    pub form: ContactForm,
    pub submission: SubmissionState,
    pub submit: SubmitControl,
    /// At most one notice at a time; a new one replaces the old
    pub notice: Option<Notice>,
}

impl AppState {
    /// Show a notice, replacing any current one
    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Drop the notice once its display interval has elapsed.
    /// Called on every event-loop tick.
    pub fn expire_notice(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.submission, SubmissionState::Idle);
        assert!(state.submit.enabled);
        assert_eq!(state.submit.label, SUBMIT_LABEL);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_submit_control_begin_and_restore() {
        let mut control = SubmitControl::default();
        control.begin_sending();
        assert!(!control.enabled);
        assert_eq!(control.label, SENDING_LABEL);

        control.restore();
        assert!(control.enabled);
        assert_eq!(control.label, SUBMIT_LABEL);
    }

    #[test]
    fn test_fresh_notice_is_not_expired() {
        let notice = Notice::success("done");
        assert!(!notice.is_expired());
    }

    #[test]
    fn test_show_notice_replaces_previous() {
        let mut state = AppState::default();
        state.show_notice(Notice::error("first"));
        state.show_notice(Notice::success("second"));
        let notice = state.notice.as_ref().unwrap();
        assert_eq!(notice.message, "second");
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn test_expire_notice_keeps_fresh_notice() {
        let mut state = AppState::default();
        state.show_notice(Notice::error("oops"));
        state.expire_notice();
        assert!(state.notice.is_some());
    }

    #[test]
    fn test_expire_notice_drops_old_notice() {
        let mut state = AppState::default();
        let mut notice = Notice::error("oops");
        notice.shown_at = Instant::now() - NOTICE_DURATION;
        state.notice = Some(notice);
        state.expire_notice();
        assert!(state.notice.is_none());
    }
}
