use http::StatusCode;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a request URL was refused before any connection was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidUrlKind {
    /// Not a URL at all
    Malformed,
    /// No scheme or host; the client never resolves relative paths
    NotAbsolute,
    /// A scheme other than `https`, or `http` on a TLS-only client
    SchemeNotAllowed,
}

impl fmt::Display for InvalidUrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Malformed => "malformed",
            Self::NotAbsolute => "scheme and host are required",
            Self::SchemeNotAllowed => "scheme not allowed by transport security",
        })
    }
}

/// Transport-level failure
///
/// A non-2xx answer is not an error until the body is read through
/// [`HttpResponse::checked_bytes`](crate::HttpResponse::checked_bytes) or
/// [`HttpResponse::json`](crate::HttpResponse::json), which report it as
/// [`HttpError::HttpStatus`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HttpError {
    #[error("invalid URL '{url}': {kind}")]
    InvalidUrl { url: String, kind: InvalidUrlKind },

    #[error("invalid header '{name}'")]
    InvalidHeader { name: String },

    #[error("cannot assemble request: {0}")]
    Build(#[from] http::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("transport failure: {0}")]
    Transport(#[source] BoxError),

    #[error("TLS setup failed: {0}")]
    Tls(#[source] BoxError),

    /// The request queue in front of the pool is full
    #[error("too many requests in flight")]
    Overloaded,

    #[error("client is shut down")]
    Closed,

    #[error("response body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    /// Non-2xx answer; `body_preview` holds at most
    /// [`ERROR_BODY_PREVIEW_LIMIT`](crate::ERROR_BODY_PREVIEW_LIMIT) bytes
    #[error("HTTP {status}: {body_preview}")]
    HttpStatus {
        status: StatusCode,
        body_preview: String,
        content_type: Option<String>,
    },
}

impl HttpError {
    /// The request may never have reached the backend
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_) | Self::Closed)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_names_url_and_reason() {
        let err = HttpError::InvalidUrl {
            url: "ftp://x".to_owned(),
            kind: InvalidUrlKind::SchemeNotAllowed,
        };
        let text = err.to_string();
        assert!(text.contains("ftp://x"));
        assert!(text.contains("scheme not allowed"));
    }

    #[test]
    fn status_error_shows_preview() {
        let err = HttpError::HttpStatus {
            status: StatusCode::CONFLICT,
            body_preview: r#"{"message":"Email taken"}"#.to_owned(),
            content_type: None,
        };
        assert!(err.to_string().starts_with("HTTP 409"));
        assert!(err.to_string().contains("Email taken"));
    }

    #[test]
    fn transport_classification() {
        assert!(HttpError::Timeout(Duration::from_secs(1)).is_transport());
        assert!(HttpError::Closed.is_transport());
        assert!(!HttpError::Overloaded.is_transport());
        assert!(!HttpError::BodyTooLarge { limit: 1 }.is_transport());
    }
}
