//! Error taxonomy for API calls.
//!
//! Every call either yields its typed result or one of the [`ApiError`]
//! variants below. Nothing is retried and nothing is recovered locally.

use auraflow_http::HttpError;
use http::StatusCode;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Error body returned by the backend for a rejected call
///
/// The backend answers with Spring's default error document
/// (`{timestamp, status, error, message, path}`). The raw body is always
/// kept; the known fields are extracted when the body is that JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorPayload {
    /// Raw body, truncated to the transport's error preview limit
    pub body: String,
    pub message: Option<String>,
    pub error: Option<String>,
    pub path: Option<String>,
}

#[derive(Deserialize)]
struct SpringError {
    message: Option<String>,
    error: Option<String>,
    path: Option<String>,
}

impl ErrorPayload {
    #[must_use]
    pub fn from_body(body: impl Into<String>) -> Self {
        let body = body.into();
        let parsed = serde_json::from_str::<SpringError>(&body).ok();
        let (message, error, path) = match parsed {
            Some(spring) => (spring.message, spring.error, spring.path),
            None => (None, None, None),
        };
        Self {
            body,
            message: message.filter(|m| !m.is_empty()),
            error,
            path,
        }
    }

    /// Best human-readable description: `message`, then `error`, then the raw body
    #[must_use]
    pub fn summary(&self) -> &str {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or(&self.body)
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.summary())
    }
}

/// Failure of a single API call
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// No usable response: connection, TLS, timeout, body limit
    #[error("transport failure: {0}")]
    Transport(#[source] HttpError),

    /// The session is missing or expired (HTTP 401)
    #[error("not authenticated: {payload}")]
    Unauthorized { payload: ErrorPayload },

    /// Any other 4xx: validation, permission, not found, conflict
    #[error("request rejected ({status}): {payload}")]
    Client {
        status: StatusCode,
        payload: ErrorPayload,
    },

    /// 5xx from the backend
    #[error("server error ({status}): {payload}")]
    Server {
        status: StatusCode,
        payload: ErrorPayload,
    },

    /// A 1xx or 3xx status reached the client
    #[error("unexpected status {status}")]
    UnexpectedStatus {
        status: StatusCode,
        payload: ErrorPayload,
    },

    /// 2xx with a body that does not match the expected type
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The call could not be built (bad base URL, unencodable query, zero page size)
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Classify a non-2xx response
    #[must_use]
    pub fn from_status(status: StatusCode, payload: ErrorPayload) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            Self::Unauthorized { payload }
        } else if status.is_client_error() {
            Self::Client { status, payload }
        } else if status.is_server_error() {
            Self::Server { status, payload }
        } else {
            Self::UnexpectedStatus { status, payload }
        }
    }

    /// HTTP status of the response that caused the error, if one arrived
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            Self::Client { status, .. }
            | Self::Server { status, .. }
            | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) | Self::InvalidRequest(_) => None,
        }
    }

    /// Backend error body, if one arrived
    #[must_use]
    pub fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            Self::Unauthorized { payload }
            | Self::Client { payload, .. }
            | Self::Server { payload, .. }
            | Self::UnexpectedStatus { payload, .. } => Some(payload),
            Self::Transport(_) | Self::Decode(_) | Self::InvalidRequest(_) => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::HttpStatus {
                status,
                body_preview,
                ..
            } => Self::from_status(status, ErrorPayload::from_body(body_preview)),
            other => Self::Transport(other),
        }
    }
}

/// A string that names none of an enum's wire values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {type_name} value '{value}'")]
pub struct UnknownVariant {
    pub type_name: &'static str,
    pub value: String,
}
