//! Contact submission handler
//!
//! `submit_contact` is a Leptos server function: the browser posts the four
//! form fields url-encoded to `/api`, the server re-checks them and records
//! the enquiry. [`ServerFnHandler`] plugs it into the form controller.

use async_trait::async_trait;
use beart_contact::{ContactHandler, ContactPayload, HandlerError, SubmissionResult};
use leptos::*;

#[cfg(feature = "ssr")]
use beart_contact::{validate, ContactFormValues, CATALOG};
#[cfg(feature = "ssr")]
use serde::Serialize;

#[server(SubmitContact, "/api")]
pub async fn submit_contact(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<SubmissionResult, ServerFnError> {
    Ok(accept_enquiry(ContactFormValues {
        name,
        email,
        subject,
        message,
    }))
}

/// Validate and record an enquiry. Delivery beyond the log is not done here.
#[cfg(feature = "ssr")]
pub fn accept_enquiry(values: ContactFormValues) -> SubmissionResult {
    let payload = match validate(&values) {
        Ok(payload) => payload,
        Err(errors) => {
            tracing::warn!(%errors, "Rejected contact enquiry");
            let reason = errors
                .first()
                .map(|(_, error)| error.to_string())
                .unwrap_or_default();
            return SubmissionResult::failed(reason);
        }
    };

    if !CATALOG.contains(&payload.subject) {
        tracing::warn!(
            subject = %payload.subject,
            catalog = CATALOG.version(),
            "Contact enquiry subject is not in the catalog"
        );
    }

    tracing::info!(
        name = %payload.name,
        email = %payload.email,
        subject = %payload.subject,
        message_chars = payload.message.chars().count(),
        "Contact enquiry received"
    );

    SubmissionResult::ok()
}

/// Calls the `submit_contact` server function
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnHandler;

#[async_trait(?Send)]
impl ContactHandler for ServerFnHandler {
    async fn submit(&self, payload: ContactPayload) -> Result<SubmissionResult, HandlerError> {
        submit_contact(payload.name, payload.email, payload.subject, payload.message)
            .await
            .map_err(|err| match err {
                ServerFnError::ServerError(message) => HandlerError::Server(message),
                other => HandlerError::Transport(other.to_string()),
            })
    }
}

#[cfg(feature = "ssr")]
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(feature = "ssr")]
pub async fn health_check() -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
