//! Error types for the Graph page API client.
//!
//! Construction problems surface as [`ConfigError`]. Once a client exists,
//! every failed operation yields exactly one [`UpstreamError`], whose message
//! starts with the operation's fixed description and whose [`ErrorCause`]
//! keeps the underlying transport or remote failure.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::request::Operation;

/// Errors raised while building a client or its configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application id was empty or absent
    #[error("Configuration error: app id cannot be empty")]
    MissingAppId,

    /// The application secret was empty or absent
    #[error("Configuration error: app secret cannot be empty")]
    MissingAppSecret,

    /// The API version was explicitly set to an empty string
    #[error("Configuration error: api version cannot be empty")]
    InvalidApiVersion,

    /// The base origin is not an absolute http(s) URL
    #[error("Configuration error: invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A default header has an invalid name or value
    #[error("Configuration error: invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The underlying HTTP client could not be initialized
    #[error("Configuration error: HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// The root failure behind an [`UpstreamError`].
#[derive(Debug, Error)]
pub enum ErrorCause {
    /// Network or protocol failure from reqwest, with the request URL removed
    #[error("HTTP error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The remote service answered with a non-2xx status
    #[error("Request failed with status {status}: {raw}")]
    Status {
        status: StatusCode,
        /// Decoded Graph error envelope, when the body was one
        body: Option<GraphErrorResponse>,
        /// Raw response body text
        raw: String,
    },

    /// Request body encoding or response decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A successful response lacked a field the operation extracts
    #[error("Missing field '{0}' in response")]
    MissingField(&'static str),

    /// A required identifier or token was empty; nothing was sent
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

// The request URL carries tokens and the app secret in its query string.
impl From<reqwest::Error> for ErrorCause {
    fn from(err: reqwest::Error) -> Self {
        ErrorCause::Transport(err.without_url())
    }
}

impl ErrorCause {
    /// Remote error detail when present, otherwise this cause's own text.
    pub fn detail(&self) -> String {
        match self {
            ErrorCause::Status {
                body: Some(body), ..
            } => body
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| self.to_string()),
            _ => self.to_string(),
        }
    }
}

/// A failed operation.
///
/// The message reads `"{description}. Error details: {detail}"`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct UpstreamError {
    operation: Operation,
    message: String,
    #[source]
    cause: ErrorCause,
}

impl UpstreamError {
    /// Wrap a cause with the fixed description of `operation`.
    pub fn new(operation: Operation, cause: ErrorCause) -> Self {
        let message = format!(
            "{}. Error details: {}",
            operation.description(),
            cause.detail()
        );
        Self {
            operation,
            message,
            cause,
        }
    }

    /// The operation that failed.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The preserved root failure.
    pub fn cause(&self) -> &ErrorCause {
        &self.cause
    }

    /// Consume the error, keeping only the root failure.
    pub fn into_cause(self) -> ErrorCause {
        self.cause
    }

    /// HTTP status, for remote failures and status-bearing transport errors.
    pub fn status(&self) -> Option<StatusCode> {
        match &self.cause {
            ErrorCause::Status { status, .. } => Some(*status),
            ErrorCause::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// The Graph error object, when the remote returned one.
    pub fn graph_error(&self) -> Option<&GraphError> {
        match &self.cause {
            ErrorCause::Status {
                body: Some(body), ..
            } => Some(&body.error),
            _ => None,
        }
    }
}

/// Result type alias for facade operations.
pub type ApiResult<T> = Result<T, UpstreamError>;

/// Error envelope returned by the Graph API on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphErrorResponse {
    pub error: GraphError,
}

impl GraphErrorResponse {
    /// The remote message, if non-empty.
    pub fn message(&self) -> Option<&str> {
        self.error.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// Graph API error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphError {
    #[serde(default)]
    pub message: Option<String>,
    /// Error family, e.g. `OAuthException`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub error_subcode: Option<i64>,
    #[serde(default)]
    pub fbtrace_id: Option<String>,
}
