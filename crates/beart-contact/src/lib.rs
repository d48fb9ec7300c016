//! Beart Contact
//!
//! Framework-independent core of the contact page: the form record, the
//! subject catalog, the validation schema, the form controller and the
//! submission adapter that talks to the delivery handler.

pub mod catalog;
pub mod form;
pub mod links;
pub mod submission;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use catalog::{SubjectCatalog, SubjectCategory, SubjectOption, CATALOG};
pub use form::{FormController, FormPhase, SubmitAttempt};
pub use links::{DirectLink, LinkKind, DIRECT_LINKS};
pub use submission::{
    ContactHandler, ContactPayload, HandlerError, Notification, NotificationVariant, Notifier,
    SubmissionOutcome, SubmissionResult,
};
pub use validation::{validate, validate_field, Field, ValidationError, ValidationErrors};

/// Raw values of the contact form as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// True when every field is still at its default
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values_are_empty() {
        let values = ContactFormValues::default();
        assert!(values.is_empty());
        assert_eq!(values.get(Field::Message), "");
    }

    #[test]
    fn test_set_and_get_by_field() {
        let mut values = ContactFormValues::default();
        values.set(Field::Subject, "Bonds");
        values.set(Field::Email, String::from("a@b.co"));

        assert_eq!(values.subject, "Bonds");
        assert_eq!(values.get(Field::Email), "a@b.co");
        assert!(!values.is_empty());
    }
}
