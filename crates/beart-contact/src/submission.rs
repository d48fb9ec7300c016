//! Submission adapter
//!
//! Bridges validated form values to the external delivery handler and turns
//! whatever comes back into a user-facing notification.

use crate::ContactFormValues;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";
pub const UNEXPECTED_FAILURE: &str = "An unexpected error occurred. Please try again later.";

/// Flat payload handed to the delivery handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<&ContactFormValues> for ContactPayload {
    fn from(values: &ContactFormValues) -> Self {
        Self {
            name: values.name.clone(),
            email: values.email.clone(),
            subject: values.subject.clone(),
            message: values.message.clone(),
        }
    }
}

/// Result reported by the delivery handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(reason.into()),
        }
    }
}

/// Faults raised while invoking the handler
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// External contact delivery mechanism
#[async_trait(?Send)]
pub trait ContactHandler {
    async fn submit(&self, payload: ContactPayload) -> Result<SubmissionResult, HandlerError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// Transient message shown to the visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Fire-and-forget notification channel
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// How a single submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    Rejected { reason: Option<String> },
    Faulted { error: HandlerError },
}

impl SubmissionOutcome {
    /// Classify a handler response, logging faults
    pub fn interpret(response: Result<SubmissionResult, HandlerError>) -> Self {
        match response {
            Ok(result) if result.success => SubmissionOutcome::Sent,
            Ok(result) => SubmissionOutcome::Rejected {
                reason: result.error.filter(|reason| !reason.is_empty()),
            },
            Err(error) => {
                tracing::error!(%error, "Contact form submission error");
                SubmissionOutcome::Faulted { error }
            }
        }
    }

    /// Whether the form should be cleared
    pub fn resets_form(&self) -> bool {
        matches!(self, SubmissionOutcome::Sent)
    }

    pub fn notification(&self) -> Notification {
        match self {
            SubmissionOutcome::Sent => Notification {
                title: "Message Sent!".to_string(),
                description: "Thank you for contacting us. We will get back to you soon."
                    .to_string(),
                variant: NotificationVariant::Default,
            },
            SubmissionOutcome::Rejected { reason } => Notification {
                title: "Sending Failed".to_string(),
                description: reason.clone().unwrap_or_else(|| GENERIC_FAILURE.to_string()),
                variant: NotificationVariant::Destructive,
            },
            SubmissionOutcome::Faulted { .. } => Notification {
                title: "Error".to_string(),
                description: UNEXPECTED_FAILURE.to_string(),
                variant: NotificationVariant::Destructive,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn capture_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    #[test]
    fn test_success_notification() {
        let outcome = SubmissionOutcome::interpret(Ok(SubmissionResult::ok()));
        assert_eq!(outcome, SubmissionOutcome::Sent);
        assert!(outcome.resets_form());

        let note = outcome.notification();
        assert_eq!(note.title, "Message Sent!");
        assert!(!note.is_destructive());
    }

    #[test]
    fn test_failure_uses_reason() {
        let outcome = SubmissionOutcome::interpret(Ok(SubmissionResult::failed("Mailbox full")));
        assert!(!outcome.resets_form());

        let note = outcome.notification();
        assert_eq!(note.title, "Sending Failed");
        assert_eq!(note.description, "Mailbox full");
        assert!(note.is_destructive());
    }

    #[test]
    fn test_failure_without_reason_falls_back() {
        let bare = SubmissionResult {
            success: false,
            error: None,
        };
        let note = SubmissionOutcome::interpret(Ok(bare)).notification();
        assert_eq!(note.description, GENERIC_FAILURE);

        let blank = SubmissionResult::failed("");
        let note = SubmissionOutcome::interpret(Ok(blank)).notification();
        assert_eq!(note.description, GENERIC_FAILURE);
    }

    #[test]
    fn test_fault_is_generic() {
        let error = HandlerError::Transport("connection reset".to_string());
        let outcome = SubmissionOutcome::interpret(Err(error.clone()));
        assert_eq!(outcome, SubmissionOutcome::Faulted { error });

        let note = outcome.notification();
        assert_eq!(note.title, "Error");
        assert_eq!(note.description, UNEXPECTED_FAILURE);
        assert!(!note.description.contains("connection reset"));
    }

    #[test]
    fn test_fault_is_logged() {
        let logs = capture_logs(|| {
            SubmissionOutcome::interpret(Err(HandlerError::Server("smtp down".to_string())));
        });
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("Contact form submission error"));
        assert!(logs.contains("smtp down"));
    }

    #[test]
    fn test_structured_failure_is_not_logged_as_error() {
        let logs = capture_logs(|| {
            SubmissionOutcome::interpret(Ok(SubmissionResult::failed("Mailbox full")));
            SubmissionOutcome::interpret(Ok(SubmissionResult::ok()));
        });
        assert!(!logs.contains("ERROR"));
    }

    #[test]
    fn test_result_wire_shape() {
        let json = serde_json::to_value(SubmissionResult::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));

        let parsed: SubmissionResult =
            serde_json::from_str(r#"{"success":false,"error":"Mailbox full"}"#).unwrap();
        assert_eq!(parsed, SubmissionResult::failed("Mailbox full"));

        let parsed: SubmissionResult = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(parsed.error, None);
    }

    #[test]
    fn test_payload_has_four_named_fields() {
        let payload = ContactPayload::from(&ContactFormValues {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Bonds".to_string(),
            message: "Hello there".to_string(),
        });
        let json = serde_json::to_value(&payload).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for key in ["name", "email", "subject", "message"] {
            assert!(object.contains_key(key));
        }
    }
}
