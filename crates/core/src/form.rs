//! Contact form state machine and the notification-sink boundary.
//!
//! The core never talks to the delivery service itself; it hands a
//! [`Submission`] to whatever [`NotificationSink`] the host wired in and
//! records exactly one of two terminal outcomes as user-visible text.

use lenslight_protocol::SharedStr;
use thiserror::Error;

pub const SENT_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("delivery rejected: {0}")]
    Rejected(String),
    #[error("delivery service unreachable")]
    Unreachable,
}

/// Opaque configuration for the external delivery service. The strings
/// mean nothing to the core; they are passed through to the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    pub service_id: SharedStr,
    pub template_id: SharedStr,
    pub public_key: SharedStr,
}

/// One completed set of form field values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl Submission {
    fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.service.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

/// External send operation. Asynchronous from the page's point of view:
/// the host invokes it between `begin_submit` and `complete_submit`.
pub trait NotificationSink {
    fn send(&mut self, config: &SinkConfig, submission: &Submission) -> Result<(), SinkError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// Submit control disabled; a send is in flight.
    Sending,
    Sent,
    Failed,
}

/// The contact form: field values plus submission status.
///
/// Submission is two-phase so the send can run off the state machine:
/// `begin_submit` flips to `Sending` and yields the values, the host
/// performs the send, `complete_submit` records the terminal state.
/// `Failed` is recoverable — the user may edit and resubmit. No retry
/// happens on its own.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub fields: Submission,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Whether the submit control is disabled.
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// The status line under the form, if any.
    pub fn status_message(&self) -> Option<&'static str> {
        match self.status {
            SubmitStatus::Sent => Some(SENT_MESSAGE),
            SubmitStatus::Failed => Some(FAILED_MESSAGE),
            SubmitStatus::Idle | SubmitStatus::Sending => None,
        }
    }

    /// Start a submission. Returns the values to hand to the sink, or
    /// `None` when a send is already in flight or a required field is
    /// still empty (the control stays enabled, nothing changes).
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.is_submitting() || !self.fields.is_complete() {
            return None;
        }
        self.status = SubmitStatus::Sending;
        Some(self.fields.clone())
    }

    /// Record the sink's outcome. Success resets the form to a blank
    /// state; failure keeps the fields for a resubmit.
    pub fn complete_submit(&mut self, result: Result<(), SinkError>) {
        match result.err() {
            None => {
                self.fields = Submission::default();
                self.status = SubmitStatus::Sent;
            }
            Some(_) => self.status = SubmitStatus::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Submission {
        Submission {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
            service: "wedding".into(),
            message: "Tell me about availability in June.".into(),
        }
    }

    struct FlakySink {
        fail: bool,
    }

    impl NotificationSink for FlakySink {
        fn send(&mut self, _: &SinkConfig, _: &Submission) -> Result<(), SinkError> {
            if self.fail {
                Err(SinkError::Unreachable)
            } else {
                Ok(())
            }
        }
    }

    fn config() -> SinkConfig {
        SinkConfig {
            service_id: "svc_1".into(),
            template_id: "tpl_1".into(),
            public_key: "pk_1".into(),
        }
    }

    #[test]
    fn incomplete_fields_block_submission() {
        let mut form = ContactForm::new();
        form.fields.first_name = "John".into();
        assert!(form.begin_submit().is_none());
        assert_eq!(*form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn successful_send_clears_fields() {
        let mut form = ContactForm::new();
        form.fields = filled();
        let submission = form.begin_submit();
        assert!(submission.is_some());
        assert!(form.is_submitting());

        let mut sink = FlakySink { fail: false };
        let outcome = submission
            .map(|s| sink.send(&config(), &s))
            .unwrap_or(Err(SinkError::Unreachable));
        form.complete_submit(outcome);

        assert_eq!(*form.status(), SubmitStatus::Sent);
        assert_eq!(form.status_message(), Some(SENT_MESSAGE));
        assert_eq!(form.fields, Submission::default());
    }

    #[test]
    fn failure_is_surfaced_and_recoverable() {
        let mut form = ContactForm::new();
        form.fields = filled();
        let submission = form.begin_submit();
        let mut sink = FlakySink { fail: true };
        let outcome = submission
            .map(|s| sink.send(&config(), &s))
            .unwrap_or(Err(SinkError::Unreachable));
        form.complete_submit(outcome);

        assert_eq!(*form.status(), SubmitStatus::Failed);
        assert_eq!(form.status_message(), Some(FAILED_MESSAGE));
        // Fields survive for a resubmit, which is allowed again.
        assert_eq!(form.fields, filled());
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn double_submit_is_blocked_while_sending() {
        let mut form = ContactForm::new();
        form.fields = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }
}
