//! Contact form submission flow
//!
//! [`ContactFormState`] owns the field values, the inline errors and the
//! submit button phase. The actual delivery goes through a
//! [`ContactGateway`]; the page ships a gateway that only waits, a real one
//! would post the [`ContactRequest`] to a backend.

use std::future::Future;

use thiserror::Error;

use crate::core::content::ProductKind;
use crate::core::notification::NotificationKind;
use crate::core::validation::{ContactField, ContactForm, ContactRequest, FieldErrors};

/// Delay of the simulated gateway
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 1500;

/// Upper bound for a gateway call before it is reported as failed
pub const SUBMIT_TIMEOUT_MS: u32 = 10_000;

pub const SUBMIT_LABEL: &str = "Wyślij zapytanie";
pub const SENDING_LABEL: &str = "Wysyłanie...";
pub const SUCCESS_MESSAGE: &str =
    "Dziękujemy! Twoja wiadomość została wysłana. Skontaktujemy się z Tobą wkrótce.";
pub const FAILURE_MESSAGE: &str = "Wystąpił błąd. Spróbuj ponownie później.";

/// Delivery failures reported by a gateway
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("rejected by server: {0}")]
    Rejected(String),
}

/// Where contact requests are delivered
pub trait ContactGateway {
    fn submit(&self, request: ContactRequest) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Submit button state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

impl SubmitPhase {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitPhase::Idle => SUBMIT_LABEL,
            SubmitPhase::Sending => SENDING_LABEL,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, SubmitPhase::Sending)
    }
}

/// Notification to raise once a submission settles
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub kind: NotificationKind,
    pub message: &'static str,
}

/// Everything the contact form renders from
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: String) {
        self.form.name = value;
        self.errors.clear(ContactField::Name);
    }

    pub fn set_email(&mut self, value: String) {
        self.form.email = value;
        self.errors.clear(ContactField::Email);
    }

    pub fn set_phone(&mut self, value: String) {
        self.form.phone = value;
        self.errors.clear(ContactField::Phone);
    }

    pub fn set_product(&mut self, value: ProductKind) {
        self.form.product = value;
    }

    pub fn set_message(&mut self, value: String) {
        self.form.message = value;
    }

    pub fn set_consent(&mut self, value: bool) {
        self.form.consent = value;
        self.errors.clear(ContactField::Consent);
    }

    /// Submit pressed.
    ///
    /// Clears the previous errors and validates. On failure the new errors
    /// are stored and `None` is returned; nothing is sent. On success the
    /// button switches to [`SubmitPhase::Sending`] and the request to deliver
    /// is returned. A submit while already sending is ignored.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.phase == SubmitPhase::Sending {
            return None;
        }

        self.errors.clear_all();
        match self.form.validate() {
            Ok(request) => {
                self.phase = SubmitPhase::Sending;
                Some(request)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Gateway answered. Success resets the form; failure keeps the values.
    /// The button is restored either way.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        self.phase = SubmitPhase::Idle;
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                self.errors.clear_all();
                SubmitOutcome {
                    kind: NotificationKind::Success,
                    message: SUCCESS_MESSAGE,
                }
            }
            Err(_) => SubmitOutcome {
                kind: NotificationKind::Error,
                message: FAILURE_MESSAGE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Records requests and answers with a canned result
    struct RecordingGateway {
        result: Result<(), SubmitError>,
        sent: RefCell<Vec<ContactRequest>>,
    }

    impl RecordingGateway {
        fn answering(result: Result<(), SubmitError>) -> Self {
            Self {
                result,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl ContactGateway for RecordingGateway {
        async fn submit(&self, request: ContactRequest) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(request);
            self.result.clone()
        }
    }

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new();
        state.set_name("Jan Kowalski".to_string());
        state.set_email("jan@email.pl".to_string());
        state.set_phone("123456789".to_string());
        state.set_product(ProductKind::Wolnostojaca);
        state.set_message("Pergola przy basenie".to_string());
        state.set_consent(true);
        state
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(SubmitPhase::Idle.label(), "Wyślij zapytanie");
        assert_eq!(SubmitPhase::Sending.label(), "Wysyłanie...");
        assert!(SubmitPhase::Sending.is_disabled());
        assert!(!SubmitPhase::Idle.is_disabled());
    }

    #[test]
    fn test_invalid_submit_sends_nothing() {
        let mut state = filled();
        state.set_name("Jo".to_string());
        assert!(state.begin_submit().is_none());
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert!(state.errors.get(ContactField::Name).is_some());
    }

    #[test]
    fn test_editing_field_clears_its_error() {
        let mut state = ContactFormState::new();
        state.begin_submit();
        assert_eq!(state.errors.len(), 4);

        state.set_phone("1".to_string());
        assert!(state.errors.get(ContactField::Phone).is_none());
        assert_eq!(state.errors.len(), 3);
    }

    #[test]
    fn test_resubmit_replaces_old_errors() {
        let mut state = ContactFormState::new();
        state.begin_submit();
        state.form.name = "Jan".to_string();
        state.form.email = "jan@email.pl".to_string();
        state.begin_submit();
        assert!(state.errors.get(ContactField::Name).is_none());
        assert!(state.errors.get(ContactField::Email).is_none());
        assert_eq!(state.errors.len(), 2);
    }

    #[test]
    fn test_successful_flow_resets_form() {
        let gateway = RecordingGateway::answering(Ok(()));
        let mut state = filled();

        let request = state.begin_submit().unwrap();
        assert_eq!(state.phase, SubmitPhase::Sending);
        assert!(state.phase.is_disabled());

        let result = block_on(gateway.submit(request));
        let outcome = state.finish_submit(result);

        assert_eq!(outcome.kind, NotificationKind::Success);
        assert_eq!(outcome.message, SUCCESS_MESSAGE);
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.phase, SubmitPhase::Idle);

        let sent = gateway.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].product, Some(ProductKind::Wolnostojaca));
        assert_eq!(sent[0].message, "Pergola przy basenie");
    }

    #[test]
    fn test_failed_flow_keeps_values() {
        let gateway =
            RecordingGateway::answering(Err(SubmitError::Transport("offline".to_string())));
        let mut state = filled();
        let before = state.form.clone();

        let request = state.begin_submit().unwrap();
        let outcome = state.finish_submit(block_on(gateway.submit(request)));

        assert_eq!(outcome.kind, NotificationKind::Error);
        assert_eq!(outcome.message, FAILURE_MESSAGE);
        assert_eq!(state.form, before);
        assert_eq!(state.phase, SubmitPhase::Idle);
    }

    #[test]
    fn test_timeout_is_a_failure() {
        let mut state = filled();
        state.begin_submit().unwrap();
        let outcome = state.finish_submit(Err(SubmitError::Timeout(SUBMIT_TIMEOUT_MS)));
        assert_eq!(outcome.kind, NotificationKind::Error);
    }

    #[test]
    fn test_double_submit_is_ignored_while_sending() {
        let mut state = filled();
        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());
        assert_eq!(state.phase, SubmitPhase::Sending);
    }

    #[test]
    fn test_submit_error_display() {
        assert_eq!(
            SubmitError::Timeout(10_000).to_string(),
            "request timed out after 10000 ms"
        );
    }
}
