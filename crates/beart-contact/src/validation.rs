//! Contact form validation schema

use crate::{ContactFormValues, ContactPayload};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minimum message length, counted in characters
pub const MIN_MESSAGE_CHARS: usize = 5;

// Local part and domain checked here; leading dot and ".." are rejected in
// `is_valid_email` because the regex crate has no lookaround.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Wire name used in the submitted payload
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "subject" => Ok(Field::Subject),
            "message" => Ok(Field::Message),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Subject is required")]
    SubjectRequired,

    #[error("Message must be at least 5 characters long")]
    MessageTooShort,
}

/// Field-keyed validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(BTreeMap<Field, ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors in field display order
    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    /// The error of the first invalid field
    pub fn first(&self) -> Option<(Field, ValidationError)> {
        self.iter().next()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

pub fn is_valid_email(value: &str) -> bool {
    let local = value.split('@').next().unwrap_or_default();
    !local.starts_with('.') && !local.contains("..") && EMAIL_PATTERN.is_match(value)
}

/// Check a single field; reports the first failing rule only
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::Name if value.is_empty() => Err(ValidationError::NameRequired),
        Field::Email if value.is_empty() => Err(ValidationError::EmailRequired),
        Field::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmail),
        Field::Subject if value.is_empty() => Err(ValidationError::SubjectRequired),
        Field::Message if value.chars().count() < MIN_MESSAGE_CHARS => {
            Err(ValidationError::MessageTooShort)
        }
        _ => Ok(()),
    }
}

/// Run every rule and produce either the transport payload or all errors
pub fn validate(values: &ContactFormValues) -> Result<ContactPayload, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for field in Field::ALL {
        if let Err(error) = validate_field(field, values.get(field)) {
            errors.insert(field, error);
        }
    }

    if errors.is_empty() {
        Ok(ContactPayload::from(values))
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> ContactFormValues {
        ContactFormValues {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Life Insurance".to_string(),
            message: "Please call me back".to_string(),
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate(&ContactFormValues::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some(ValidationError::NameRequired));
        assert_eq!(errors.get(Field::Email), Some(ValidationError::EmailRequired));
        assert_eq!(errors.get(Field::Subject), Some(ValidationError::SubjectRequired));
        assert_eq!(errors.get(Field::Message), Some(ValidationError::MessageTooShort));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::NameRequired.to_string(), "Name is required");
        assert_eq!(ValidationError::EmailRequired.to_string(), "Email is required");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Invalid email address");
        assert_eq!(ValidationError::SubjectRequired.to_string(), "Subject is required");
        assert_eq!(
            ValidationError::MessageTooShort.to_string(),
            "Message must be at least 5 characters long"
        );
    }

    #[test]
    fn test_valid_values_produce_payload() {
        let payload = validate(&valid_values()).unwrap();
        assert_eq!(payload.name, "Jane Doe");
        assert_eq!(payload.subject, "Life Insurance");
    }

    #[test]
    fn test_email_syntax() {
        for good in ["jane@example.com", "j.doe+tag@mail.example.co.in", "O'Neil@Example.ORG"] {
            assert!(is_valid_email(good), "{} should be valid", good);
        }
        for bad in [
            "jane",
            "jane@",
            "@example.com",
            "jane@example",
            "jane@example.c",
            ".jane@example.com",
            "ja..ne@example.com",
            "jane.@example.com",
            "jane doe@example.com",
            "jane@-example.com",
        ] {
            assert!(!is_valid_email(bad), "{} should be invalid", bad);
        }
    }

    #[test]
    fn test_email_letters_are_ascii_only() {
        assert!(!is_valid_email("jane@example.\u{212A}\u{212A}"));
        assert!(!is_valid_email("jane@example.\u{017F}s"));
        assert!(!is_valid_email("j\u{212A}@example.com"));
    }

    #[test]
    fn test_unknown_domain_still_valid() {
        assert_eq!(validate_field(Field::Email, "someone@no-such-domain.zz"), Ok(()));
    }

    #[test]
    fn test_email_required_before_invalid() {
        assert_eq!(validate_field(Field::Email, ""), Err(ValidationError::EmailRequired));
        assert_eq!(validate_field(Field::Email, "nope"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_message_length_counts_chars() {
        assert_eq!(validate_field(Field::Message, "abcd"), Err(ValidationError::MessageTooShort));
        assert_eq!(validate_field(Field::Message, "abcde"), Ok(()));
        // 4 chars, 12 bytes
        assert_eq!(validate_field(Field::Message, "नमस्"), Err(ValidationError::MessageTooShort));
        assert_eq!(validate_field(Field::Message, "héllo"), Ok(()));
    }

    #[test]
    fn test_subject_outside_catalog_passes() {
        assert_eq!(validate_field(Field::Subject, "Something else"), Ok(()));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert_eq!(validate_field(Field::Name, " "), Ok(()));
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
        assert!("phone".parse::<Field>().is_err());
    }

    #[test]
    fn test_errors_display_in_field_order() {
        let mut values = valid_values();
        values.message = "hi".to_string();
        values.name = String::new();
        let errors = validate(&values).unwrap_err();

        assert_eq!(errors.first(), Some((Field::Name, ValidationError::NameRequired)));
        assert_eq!(
            errors.to_string(),
            "name: Name is required; message: Message must be at least 5 characters long"
        );
    }
}
