//! The uniform outcome of a `BlogApiClient` call.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Success, not-found, or an error message. Never a panic, never a `Result`:
/// callers branch on the shape.
///
/// Serializes to exactly what the API caller would print: the decoded body,
/// `null`, or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResult {
    Success(Value),
    NotFound,
    Error { error: String },
}

impl ApiResult {
    pub fn error(message: impl Into<String>) -> Self {
        ApiResult::Error {
            error: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiResult::NotFound)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ApiResult::Error { error } => Some(error),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            ApiResult::Success(v) => Some(v),
            _ => None,
        }
    }

    /// Decode a success body into a typed value.
    ///
    /// `NotFound` yields `Ok(None)`; an `Error` result is turned back into
    /// `ApiError::Message` carrying its text unchanged.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Option<T>, ApiError> {
        match self {
            ApiResult::Success(v) => serde_json::from_value(v)
                .map(Some)
                .map_err(|e| ApiError::Deserialization(e.to_string())),
            ApiResult::NotFound => Ok(None),
            ApiResult::Error { error } => Err(ApiError::Message(error)),
        }
    }
}
