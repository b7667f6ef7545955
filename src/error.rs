//! Error Types
//!
//! Failures of content loading and contact submission.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a single network read or write
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn transport(err: JsValue) -> Self {
        FetchError::Transport(describe_js(&err))
    }
}

impl From<serde_wasm_bindgen::Error> for FetchError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Contact submission failure. Never shown verbatim to the visitor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Request(#[from] FetchError),

    #[error("Rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// Local, pre-network form validation failure
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
