//! Error types for the API client.

/// Errors that can occur when validating parameters or making API requests.
///
/// Request failures carry the operation name and its key argument (an
/// article uuid, a searched name, or the resource path) together with the
/// underlying cause, so callers can tell a dropped connection apart from a
/// permanent 4xx answer.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A parameter was rejected before any request was sent.
    #[error("invalid value for `{field}`: {reason}")]
    Validation { field: String, reason: String },

    /// The HTTP request could not be completed (DNS, connect, timeout, body read).
    #[error("{operation} failed for {target}: request error")]
    Network {
        operation: &'static str,
        target: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API returned a non-success status with a body snippet.
    #[error("{operation} failed for {target}: status {status}")]
    HttpStatus {
        operation: &'static str,
        target: String,
        status: u16,
        body: String,
    },

    /// The response body was not the JSON the operation expects.
    #[error("{operation} failed for {target}: invalid JSON response")]
    Decode {
        operation: &'static str,
        target: String,
        #[source]
        source: serde_json::Error,
    },

    /// The base URL and path did not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// A blocking operation dispatched by `AsyncClient` panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(String),
}

impl Error {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status code, when the server answered with a non-success status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Network { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Name of the client operation that failed, if a request was attempted.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::Network { operation, .. }
            | Error::HttpStatus { operation, .. }
            | Error::Decode { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Key argument of the failed operation (uuid, name or resource path).
    pub fn target(&self) -> Option<&str> {
        match self {
            Error::Network { target, .. }
            | Error::HttpStatus { target, .. }
            | Error::Decode { target, .. } => Some(target.as_str()),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// True for failures that may succeed when retried: network errors,
    /// 429 and 5xx responses.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Network { .. } => true,
            Error::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
