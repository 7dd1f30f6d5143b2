use crate::error::{BoxError, HttpError};
use bytes::Bytes;
use http::{HeaderMap, Response, StatusCode, header};
use http_body_util::BodyExt;
use http_body_util::combinators::BoxBody;
use serde::de::DeserializeOwned;

/// Cap on the error payload kept in [`HttpError::HttpStatus`]
pub const ERROR_BODY_PREVIEW_LIMIT: usize = 8 * 1024;

/// Decompressed, type-erased body
pub type ResponseBody = BoxBody<Bytes, BoxError>;

const PREVIEW_PLACEHOLDER: &str = "<error body too large to show>";

/// Answer from the backend with an unread body
///
/// Any status is a successful `send`; the body readers decide what counts as
/// failure. Reads stop at the client's `max_body_size`.
#[derive(Debug)]
pub struct HttpResponse {
    inner: Response<ResponseBody>,
    max_body_size: usize,
}

impl HttpResponse {
    pub(crate) fn new(inner: Response<ResponseBody>, max_body_size: usize) -> Self {
        Self {
            inner,
            max_body_size,
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Whole body, whatever the status
    ///
    /// # Errors
    /// `BodyTooLarge` past the size limit, `Transport` when the stream breaks.
    pub async fn bytes(self) -> Result<Bytes, HttpError> {
        collect_limited(self.inner.into_body(), self.max_body_size).await
    }

    /// Whole body of a 2xx answer
    ///
    /// # Errors
    /// `HttpStatus` with a bounded preview of the payload for any other
    /// status, plus the errors of [`bytes`](Self::bytes).
    pub async fn checked_bytes(self) -> Result<Bytes, HttpError> {
        let status = self.inner.status();
        if status.is_success() {
            return self.bytes().await;
        }

        let content_type = self
            .inner
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let limit = self.max_body_size.min(ERROR_BODY_PREVIEW_LIMIT);
        let body_preview = match collect_limited(self.inner.into_body(), limit).await {
            Ok(body) => String::from_utf8_lossy(&body).into_owned(),
            Err(HttpError::BodyTooLarge { .. }) => PREVIEW_PLACEHOLDER.to_owned(),
            Err(err) => return Err(err),
        };
        Err(HttpError::HttpStatus {
            status,
            body_preview,
            content_type,
        })
    }

    /// # Errors
    /// Those of [`checked_bytes`](Self::checked_bytes), or `Json` when the
    /// body does not decode as `T`.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, HttpError> {
        let body = self.checked_bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Stops at `limit` decompressed bytes
async fn collect_limited(body: ResponseBody, limit: usize) -> Result<Bytes, HttpError> {
    let mut body = std::pin::pin!(body);
    let mut collected = Vec::new();

    while let Some(frame) = body.frame().await {
        let frame = frame.map_err(HttpError::Transport)?;
        let Some(chunk) = frame.data_ref() else {
            continue;
        };
        if collected.len() + chunk.len() > limit {
            return Err(HttpError::BodyTooLarge { limit });
        }
        collected.extend_from_slice(chunk);
    }

    Ok(Bytes::from(collected))
}
