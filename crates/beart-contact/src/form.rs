//! Form controller
//!
//! Owns the field values and per-field errors of one contact form instance
//! and guards submission with a busy flag. Transitions:
//! `Idle -> Submitting -> Idle`, whatever the handler does.

use crate::catalog::CATALOG;
use crate::submission::{
    ContactHandler, ContactPayload, HandlerError, Notification, Notifier, SubmissionOutcome,
    SubmissionResult,
};
use crate::validation::{self, Field, ValidationError, ValidationErrors};
use crate::ContactFormValues;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Result of trying to start a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A submission is already in flight
    Busy,
    /// Validation failed; nothing was sent
    Invalid(ValidationErrors),
    /// Busy flag taken; the payload must be handed to the handler
    Dispatched(ContactPayload),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    values: ContactFormValues,
    errors: ValidationErrors,
    phase: FormPhase,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ContactFormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(field)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Update one field and re-check it. Ignored while submitting.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }
        self.values.set(field, value);
        self.revalidate(field);
    }

    /// Re-check a single field, e.g. on blur
    pub fn revalidate(&mut self, field: Field) {
        match validation::validate_field(field, self.values.get(field)) {
            Ok(()) => self.errors.clear(field),
            Err(error) => self.errors.insert(field, error),
        }
    }

    /// Pre-select a subject from a `service` query value if it is in the catalog
    pub fn prefill_subject(&mut self, service: &str) -> bool {
        if self.is_submitting() || !CATALOG.contains(service) {
            return false;
        }
        self.values.set(Field::Subject, service);
        true
    }

    /// Back to empty defaults with no errors
    pub fn reset(&mut self) {
        self.values = ContactFormValues::default();
        self.errors = ValidationErrors::new();
    }

    /// Validate and, if valid, take the busy flag
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            return SubmitAttempt::Busy;
        }

        match validation::validate(&self.values) {
            Ok(payload) => {
                self.errors = ValidationErrors::new();
                self.phase = FormPhase::Submitting;
                SubmitAttempt::Dispatched(payload)
            }
            Err(errors) => {
                self.errors = errors.clone();
                SubmitAttempt::Invalid(errors)
            }
        }
    }

    /// Apply the handler response and release the busy flag
    pub fn finish_submit(&mut self, response: Result<SubmissionResult, HandlerError>) -> Notification {
        let outcome = SubmissionOutcome::interpret(response);
        if outcome.resets_form() {
            self.reset();
        }
        self.phase = FormPhase::Idle;
        outcome.notification()
    }

    /// Full submit flow: validate, call the handler once, notify
    pub async fn submit<H, N>(&mut self, handler: &H, notifier: &N) -> SubmitAttempt
    where
        H: ContactHandler + ?Sized,
        N: Notifier + ?Sized,
    {
        let attempt = self.begin_submit();
        if let SubmitAttempt::Dispatched(payload) = &attempt {
            let response = handler.submit(payload.clone()).await;
            notifier.notify(self.finish_submit(response));
        }
        attempt
    }
}
