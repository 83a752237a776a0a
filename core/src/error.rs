//! Error types for the blog API client.
//!
//! # Design
//! Every non-2xx response lands in `Http` with the raw status and body,
//! since the server reports its reason in the body text. Whether a 404 means
//! "no such post" is up to the individual parser.

use thiserror::Error;

/// Errors produced while building, executing or parsing a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    #[error("HTTP Error {status}: {}", reason_phrase(.status))]
    Http { status: u16, body: String },

    /// The request never produced a response: connection refused, DNS
    /// failure, timeout.
    #[error("{0}")]
    Transport(String),

    /// The response body was not the JSON we expected.
    #[error("invalid JSON response: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// An error message that was already rendered for the caller, e.g. one
    /// carried by an `ApiResult::Error`.
    #[error("{0}")]
    Message(String),
}

fn reason_phrase(status: &u16) -> &'static str {
    ureq::http::StatusCode::from_u16(*status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Status")
}

impl ApiError {
    /// The message surfaced to callers when the server's own explanation is
    /// wanted: the response body for HTTP errors, `Display` for the rest.
    pub fn body_or_message(&self) -> String {
        match self {
            ApiError::Http { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}
