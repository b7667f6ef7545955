//! Contact Backends
//!
//! Two interchangeable targets for the contact form, chosen once from
//! `SiteConfig`.

use std::rc::Rc;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use web_sys::Response;

use super::{read_json, send};
use crate::config::{ContactBackendKind, SiteConfig};
use crate::error::{FetchError, SubmitError};
use crate::models::ContactMessage;

/// Something that accepts a validated contact message
#[async_trait(?Send)]
pub trait ContactBackend {
    /// Short name for diagnostics
    fn name(&self) -> &'static str;

    /// Deliver the message. Exactly one network write per call.
    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// Error body returned by both backends
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

const DEFAULT_FAILURE: &str = "Failed to send message";

fn rejected(status: u16, body: Result<ErrorBody, FetchError>) -> SubmitError {
    let message = body
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| DEFAULT_FAILURE.to_string());
    SubmitError::Rejected { status, message }
}

async fn rejection(response: &Response) -> SubmitError {
    rejected(response.status(), read_json::<ErrorBody>(response).await)
}

/// Settle an API submission. The API always answers with JSON, so an
/// undecodable success body counts as a failure.
fn api_outcome(ok: bool, status: u16, body: Result<ErrorBody, FetchError>) -> Result<(), SubmitError> {
    if !ok {
        return Err(rejected(status, body));
    }
    body.map(|_| ()).map_err(SubmitError::from)
}

// ========================
// Hosted Form Service
// ========================

pub struct FormServiceBackend {
    endpoint: String,
}

impl FormServiceBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

/// `application/x-www-form-urlencoded` body for a contact message
pub fn form_encode(message: &ContactMessage) -> String {
    [
        ("name", &message.name),
        ("email", &message.email),
        ("message", &message.message),
    ]
    .iter()
    .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, NON_ALPHANUMERIC)))
    .collect::<Vec<_>>()
    .join("&")
}

#[async_trait(?Send)]
impl ContactBackend for FormServiceBackend {
    fn name(&self) -> &'static str {
        "form-service"
    }

    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        let body = form_encode(message);
        let response = send(
            "POST",
            &self.endpoint,
            Some(&body),
            &[
                ("Accept", "application/json"),
                ("Content-Type", "application/x-www-form-urlencoded"),
            ],
        )
        .await?;

        if response.ok() {
            Ok(())
        } else {
            Err(rejection(&response).await)
        }
    }
}

// ========================
// Portfolio API
// ========================

pub struct ApiBackend {
    url: String,
}

impl ApiBackend {
    pub fn new(config: &SiteConfig) -> Self {
        Self { url: config.endpoint("contact") }
    }
}

#[async_trait(?Send)]
impl ContactBackend for ApiBackend {
    fn name(&self) -> &'static str {
        "api"
    }

    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        let body = serde_json::to_string(message).map_err(|e| FetchError::Decode(e.to_string()))?;
        let response = send(
            "POST",
            &self.url,
            Some(&body),
            &[("Content-Type", "application/json"), ("Accept", "application/json")],
        )
        .await?;

        let body = read_json::<ErrorBody>(&response).await;
        api_outcome(response.ok(), response.status(), body)
    }
}

/// Build the backend selected by configuration
pub fn contact_backend(config: &SiteConfig) -> Rc<dyn ContactBackend> {
    match &config.contact {
        ContactBackendKind::FormService { endpoint } => Rc::new(FormServiceBackend::new(endpoint.clone())),
        ContactBackendKind::Api => Rc::new(ApiBackend::new(config)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn body(json: &str) -> Result<ErrorBody, FetchError> {
        serde_json::from_str(json).map_err(|e| FetchError::Decode(e.to_string()))
    }

    #[test]
    fn test_api_success_needs_json_body() {
        assert_eq!(api_outcome(true, 200, body(r#"{"success":true}"#)), Ok(()));

        let outcome = api_outcome(true, 200, body("<html>proxy page</html>"));
        assert!(matches!(outcome, Err(SubmitError::Request(FetchError::Decode(_)))));
    }

    #[test]
    fn test_api_rejection_message() {
        assert_eq!(
            api_outcome(false, 400, body(r#"{"error":"Email is invalid"}"#)),
            Err(SubmitError::Rejected { status: 400, message: "Email is invalid".into() })
        );
        assert_eq!(
            api_outcome(false, 502, body("Bad Gateway")),
            Err(SubmitError::Rejected { status: 502, message: DEFAULT_FAILURE.into() })
        );
    }

    #[test]
    fn test_form_encode_escapes_values() {
        let msg = ContactMessage {
            name: "Ada L".into(),
            email: "ada+site@example.com".into(),
            message: "Hi & bye".into(),
        };
        assert_eq!(
            form_encode(&msg),
            "name=Ada%20L&email=ada%2Bsite%40example%2Ecom&message=Hi%20%26%20bye"
        );
    }

    #[test]
    fn test_backend_selection() {
        let mut config = SiteConfig::for_host("me.dev");
        config.contact = ContactBackendKind::Api;
        assert_eq!(contact_backend(&config).name(), "api");

        config.contact = ContactBackendKind::FormService { endpoint: "https://forms.example/f/x".into() };
        assert_eq!(contact_backend(&config).name(), "form-service");
    }
}
