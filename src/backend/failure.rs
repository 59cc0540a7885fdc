//! Failure normalization for the backend client boundary.

use serde_json::Value;
use thiserror::Error;

/// The normalized error value crossing the client/backend boundary.
///
/// Carries a human-readable message, the HTTP status when a response was
/// received, and the raw body for diagnostics. A missing status means the
/// request never produced a response at all (transport failure).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiFailure {
    pub message: String,
    pub status: Option<u16>,
    pub body: Option<Value>,
}

impl ApiFailure {
    /// Builds a failure for a request that never produced a response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            body: None,
        }
    }

    /// Builds a failure from a non-success HTTP response.
    ///
    /// The message is extracted from the body by checking, in order, a
    /// `message` field, an `error` field, a `msg` field, a raw string body,
    /// and finally a synthesized `HTTP error <status>` fallback.
    pub fn from_response(status: u16, body: Option<Value>) -> Self {
        let message = extract_message(status, body.as_ref());
        Self {
            message,
            status: Some(status),
            body,
        }
    }

    /// True when the request failed before any response arrived.
    pub fn is_transport(&self) -> bool {
        self.status.is_none()
    }

    /// Coarse classification used by every consumer to pick user-facing
    /// behavior. No component retries automatically on any of these.
    pub fn kind(&self) -> FailureKind {
        match self.status {
            None => FailureKind::NetworkUnreachable,
            Some(404) => FailureKind::NotFound,
            Some(409) => FailureKind::Conflict,
            Some(s) if (400..500).contains(&s) => FailureKind::ValidationFailed,
            Some(_) => FailureKind::ServerError,
        }
    }
}

/// Coarse failure taxonomy surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NetworkUnreachable,
    ValidationFailed,
    Conflict,
    NotFound,
    ServerError,
}

/// Fine-grained classification of a failed create-link call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateFailureKind {
    /// The requested custom code is already taken (HTTP 409).
    CodeUnavailable,
    /// The backend rejected the destination URL.
    InvalidUrl,
    /// The backend rejected the custom code.
    InvalidCode,
    /// Anything else, classified coarsely.
    Other(FailureKind),
}

/// Classifies a create-link failure into user-actionable categories.
///
/// Validation failures are split into URL-shape and code-shape errors by
/// substring-matching the failure message and body (`code`/`custom` versus
/// `url`/`invalid`). The backend exposes no structured error codes, so this
/// function is the one place fragile to backend wording changes; keep the
/// heuristic here and nowhere else.
pub fn classify_create_failure(failure: &ApiFailure) -> CreateFailureKind {
    match failure.kind() {
        FailureKind::Conflict => CreateFailureKind::CodeUnavailable,
        FailureKind::ValidationFailed => {
            let mut haystack = failure.message.to_lowercase();
            if let Some(body) = &failure.body {
                haystack.push(' ');
                haystack.push_str(&body.to_string().to_lowercase());
            }

            // Code-shaped wording is checked first: "invalid custom code"
            // would otherwise match the generic "invalid" probe.
            if haystack.contains("code") || haystack.contains("custom") {
                CreateFailureKind::InvalidCode
            } else if haystack.contains("url") || haystack.contains("invalid") {
                CreateFailureKind::InvalidUrl
            } else {
                CreateFailureKind::Other(FailureKind::ValidationFailed)
            }
        }
        other => CreateFailureKind::Other(other),
    }
}

/// Extracts a human-readable message from an error response body.
fn extract_message(status: u16, body: Option<&Value>) -> String {
    if let Some(body) = body {
        for field in ["message", "error", "msg"] {
            if let Some(text) = body.get(field).and_then(Value::as_str) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }

        if let Some(text) = body.as_str() {
            if !text.is_empty() {
                return text.to_string();
            }
        }
    }

    format!("HTTP error {status}")
}
