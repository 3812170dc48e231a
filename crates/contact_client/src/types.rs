use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A contact record on the wire. Identity key is `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    /// Non-2xx response. `detail` carries the server's JSON error message
    /// when one was present in the body.
    #[error("http status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Completion of a command issued through `ClientHandle`.
///
/// Every command resolves to exactly one event, whether it succeeded or
/// failed; callers rely on that to release in-flight flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEvent {
    RefreshCompleted {
        result: Result<Vec<Contact>, ApiError>,
    },
    CreateCompleted {
        result: Result<(), ApiError>,
    },
    DeleteCompleted {
        email: String,
        result: Result<(), ApiError>,
    },
}
