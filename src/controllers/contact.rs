//! Contact form submission.
//!
//! idle -> validating -> submitting -> idle. The submit control is disabled
//! and relabelled only while submitting; every terminal path restores it.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{SubmitError, ValidationError};
use crate::models::ContactMessage;

pub const SENDING_LABEL: &str = "Sending...";
const IDLE_LABEL: &str = "Send Message";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Raw input values, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn clear(&mut self) {
        *self = ContactFields::default();
    }
}

/// Trim and check the fields
pub fn validate(fields: &ContactFields) -> Result<ContactMessage, ValidationError> {
    let name = fields.name.trim();
    let email = fields.email.trim();
    let message = fields.message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

/// What to tell the visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Invalid(ValidationError),
    Sent { name: String },
    Failed,
    /// A submission is already running; nothing to show
    Busy,
}

impl Feedback {
    pub fn message(&self) -> Option<String> {
        match self {
            Feedback::Invalid(e) => Some(e.to_string()),
            Feedback::Sent { name } => Some(format!(
                "Thank you, {}! Your message has been received. I'll get back to you soon!",
                name
            )),
            Feedback::Failed => Some(
                "Sorry, there was an error sending your message. Please try again later or contact me directly via email."
                    .to_string(),
            ),
            Feedback::Busy => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    phase: SubmissionPhase,
    idle_label: String,
    pending: Option<ContactMessage>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new(IDLE_LABEL)
    }
}

impl ContactFormState {
    pub fn new(idle_label: impl Into<String>) -> Self {
        Self {
            fields: ContactFields::default(),
            phase: SubmissionPhase::Idle,
            idle_label: idle_label.into(),
            pending: None,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn button_label(&self) -> &str {
        if self.phase == SubmissionPhase::Submitting {
            SENDING_LABEL
        } else {
            &self.idle_label
        }
    }

    pub fn button_disabled(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Validate and, if valid, enter `Submitting`. On `Ok` the caller must
    /// perform exactly one backend write and then call `finish`.
    pub fn begin(&mut self) -> Result<ContactMessage, Feedback> {
        if self.phase != SubmissionPhase::Idle {
            return Err(Feedback::Busy);
        }
        self.phase = SubmissionPhase::Validating;
        match validate(&self.fields) {
            Ok(message) => {
                self.phase = SubmissionPhase::Submitting;
                self.pending = Some(message.clone());
                Ok(message)
            }
            Err(e) => {
                self.phase = SubmissionPhase::Idle;
                Err(Feedback::Invalid(e))
            }
        }
    }

    /// Settle a submission. Clears the fields only on success.
    pub fn finish(&mut self, result: Result<(), SubmitError>) -> Feedback {
        self.phase = SubmissionPhase::Idle;
        let pending = self.pending.take();
        match (result, pending) {
            (Ok(()), Some(message)) => {
                self.fields.clear();
                Feedback::Sent { name: message.name }
            }
            (Ok(()), None) => Feedback::Busy,
            (Err(_), _) => Feedback::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use async_trait::async_trait;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::api::ContactBackend;
    use crate::error::FetchError;

    /// Backend double counting writes
    struct FakeBackend {
        calls: Cell<usize>,
        result: Result<(), SubmitError>,
    }

    impl FakeBackend {
        fn new(result: Result<(), SubmitError>) -> Self {
            Self { calls: Cell::new(0), result }
        }
    }

    #[async_trait(?Send)]
    impl ContactBackend for FakeBackend {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn submit(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    /// Same sequence the contact form component runs
    async fn run(state: &mut ContactFormState, backend: &dyn ContactBackend) -> Feedback {
        let message = match state.begin() {
            Ok(message) => message,
            Err(feedback) => return feedback,
        };
        assert!(state.button_disabled());
        assert_eq!(state.button_label(), SENDING_LABEL);
        let result = backend.submit(&message).await;
        state.finish(result)
    }

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new("Send Message");
        state.fields = ContactFields {
            name: "  Ada ".into(),
            email: "ada@example.com".into(),
            message: "Hello there".into(),
        };
        state
    }

    #[test]
    fn test_empty_message_never_hits_network() {
        let backend = FakeBackend::new(Ok(()));
        let mut state = filled();
        state.fields.message = "   ".into();

        let feedback = block_on(run(&mut state, &backend));

        assert_eq!(feedback, Feedback::Invalid(ValidationError::MissingFields));
        assert_eq!(backend.calls.get(), 0);
        assert!(!state.button_disabled());
        assert_eq!(state.button_label(), "Send Message");
        assert_eq!(state.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_success_clears_fields_and_restores_button() {
        let backend = FakeBackend::new(Ok(()));
        let mut state = filled();

        let feedback = block_on(run(&mut state, &backend));

        assert_eq!(feedback, Feedback::Sent { name: "Ada".into() });
        assert_eq!(backend.calls.get(), 1);
        assert_eq!(state.fields, ContactFields::default());
        assert!(!state.button_disabled());
        assert_eq!(state.button_label(), "Send Message");
        assert!(feedback.message().unwrap().starts_with("Thank you, Ada!"));
    }

    #[test]
    fn test_failure_keeps_fields_and_restores_button() {
        let backend = FakeBackend::new(Err(SubmitError::Rejected {
            status: 422,
            message: "spam".into(),
        }));
        let mut state = filled();
        let before = state.fields.clone();

        let feedback = block_on(run(&mut state, &backend));

        assert_eq!(feedback, Feedback::Failed);
        assert_eq!(backend.calls.get(), 1);
        assert_eq!(state.fields, before);
        assert!(!state.button_disabled());
        assert_eq!(state.button_label(), "Send Message");
    }

    #[test]
    fn test_transport_failure_restores_button() {
        let backend = FakeBackend::new(Err(FetchError::Transport("offline".into()).into()));
        let mut state = filled();

        assert_eq!(block_on(run(&mut state, &backend)), Feedback::Failed);
        assert_eq!(state.phase(), SubmissionPhase::Idle);
        assert!(!state.button_disabled());
    }

    #[test]
    fn test_invalid_submit_leaves_state_untouched() {
        let mut state = filled();
        state.fields.email = "not-an-email".into();
        let before = state.clone();

        assert_eq!(state.begin(), Err(Feedback::Invalid(ValidationError::InvalidEmail)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_second_submit_while_busy_is_ignored() {
        let mut state = filled();
        assert!(state.begin().is_ok());
        assert_eq!(state.begin(), Err(Feedback::Busy));
        assert_eq!(Feedback::Busy.message(), None);
    }

    #[test]
    fn test_email_pattern() {
        let mut fields = ContactFields {
            name: "Ada".into(),
            email: String::new(),
            message: "Hi".into(),
        };
        for bad in ["ada", "ada@example", "ada@@example.com", "a da@example.com", "@example.com"] {
            fields.email = bad.into();
            assert_eq!(validate(&fields), Err(ValidationError::InvalidEmail), "{bad}");
        }
        for good in ["ada@example.com", "a.b@mail.example.org", " ada@example.co "] {
            fields.email = good.into();
            assert!(validate(&fields).is_ok(), "{good}");
        }
    }
}
