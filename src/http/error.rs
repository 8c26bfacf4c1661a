//! API Error Types
//!
//! Failure taxonomy for API calls: the transport failed, the server
//! answered with a non-success status, or a success body did not decode.

use thiserror::Error;

use super::transport::TransportError;

/// Reason shown when a failed response carries no `detail`
pub const GENERIC_FAILURE: &str = "Request failed";

/// API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No response was received
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// Non-success status; `detail` is the server's message if it sent one
    #[error("{}", .detail.as_deref().unwrap_or(GENERIC_FAILURE))]
    Status { status: u16, detail: Option<String> },

    /// A success response whose body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a failed response body.
    ///
    /// Only a JSON object with a string `detail` field counts; anything else
    /// (HTML error pages, empty bodies) leaves `detail` empty.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
            .filter(|d| !d.is_empty());

        ApiError::Status { status, detail }
    }

    /// The user-facing failure reason
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Like [`message`](Self::message) but with a caller-chosen fallback
    /// for status errors that carry no `detail`
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { detail: None, .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;
