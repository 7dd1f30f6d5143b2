use crate::auth::{NoopUnauthorized, UnauthorizedEvent, UnauthorizedHandler};
use crate::error::{ApiError, ErrorPayload};
use crate::query::QueryString;
use auraflow_http::{HttpClient, HttpError};
use bytes::Bytes;
use http::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use url::Url;

const DEFAULT_LOGIN_PATH: &str = "/login";

/// JSON round-trips against the AuraFlow backend
///
/// Resolves resource paths against the base URL, sends one request per call
/// and maps the outcome onto [`ApiError`]. There is no retry and no local
/// state beyond the transport's cookie jar. A 401 runs the installed
/// [`UnauthorizedHandler`] before the error is returned.
///
/// Cloning is cheap; clones share the transport and the handler.
#[derive(Clone)]
pub struct RestClient {
    http: HttpClient,
    base_url: Url,
    login_url: Url,
    unauthorized: Arc<dyn UnauthorizedHandler>,
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("http", &self.http)
            .field("base_url", &self.base_url.as_str())
            .field("login_url", &self.login_url.as_str())
            .finish_non_exhaustive()
    }
}

fn parse_http_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw)
        .map_err(|e| ApiError::InvalidRequest(format!("invalid URL '{raw}': {e}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidRequest(format!(
            "URL '{raw}' must be an absolute http(s) URL"
        )));
    }
    Ok(url)
}

impl RestClient {
    /// # Errors
    /// Returns `ApiError::InvalidRequest` if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(http: HttpClient, base_url: &str) -> Result<Self, ApiError> {
        let base_url = parse_http_url(base_url)?;
        let login_url = join_path(&base_url, DEFAULT_LOGIN_PATH);
        Ok(Self {
            http,
            base_url,
            login_url,
            unauthorized: Arc::new(NoopUnauthorized),
        })
    }

    /// Install the hook run on every 401
    #[must_use]
    pub fn with_unauthorized_handler(mut self, handler: Arc<dyn UnauthorizedHandler>) -> Self {
        self.unauthorized = handler;
        self
    }

    /// Set the login page: an absolute URL, or a path under the base URL
    ///
    /// # Errors
    /// Returns `ApiError::InvalidRequest` for an absolute URL that is not http(s).
    pub fn with_login_url(mut self, login: &str) -> Result<Self, ApiError> {
        self.login_url = if login.contains("://") {
            parse_http_url(login)?
        } else {
            join_path(&self.base_url, login)
        };
        Ok(self)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn login_url(&self) -> &Url {
        &self.login_url
    }

    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Absolute URL for `path`, with the encoded query when it is non-empty
    ///
    /// # Errors
    /// Returns `ApiError::InvalidRequest` if the query cannot be encoded.
    pub fn endpoint(&self, path: &str, query: Option<&QueryString>) -> Result<Url, ApiError> {
        let mut url = join_path(&self.base_url, path);
        match query {
            Some(q) if !q.is_empty() => url.set_query(Some(&q.encode()?)),
            _ => url.set_query(None),
        }
        Ok(url)
    }

    /// GET and decode
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute::<()>(Method::GET, path, None, None).await?;
        decode(&body)
    }

    /// GET with a query string and decode
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryString,
    ) -> Result<T, ApiError> {
        let body = self
            .execute::<()>(Method::GET, path, Some(query), None)
            .await?;
        decode(&body)
    }

    /// GET a resource the backend may answer with an empty body or `null`
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        let body = self.execute::<()>(Method::GET, path, None, None).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        decode(&body)
    }

    /// POST a JSON body and decode the response
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.execute(Method::POST, path, None, Some(body)).await?;
        decode(&body)
    }

    /// POST without a body, ignoring the response body
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.execute::<()>(Method::POST, path, None, None).await?;
        Ok(())
    }

    /// PUT a JSON body and decode the response
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.execute(Method::PUT, path, None, Some(body)).await?;
        decode(&body)
    }

    /// PUT without a body and decode the response
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute::<()>(Method::PUT, path, None, None).await?;
        decode(&body)
    }

    /// PUT without a body, ignoring the response body
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn put_unit(&self, path: &str) -> Result<(), ApiError> {
        self.execute::<()>(Method::PUT, path, None, None).await?;
        Ok(())
    }

    /// DELETE, ignoring the response body
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute::<()>(Method::DELETE, path, None, None).await?;
        Ok(())
    }

    /// DELETE and decode the response
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn delete_returning<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute::<()>(Method::DELETE, path, None, None).await?;
        decode(&body)
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryString>,
        body: Option<&B>,
    ) -> Result<Bytes, ApiError> {
        let url = self.endpoint(path, query)?;
        let mut request = self.http.request(method.clone(), url.as_str());
        if let Some(body) = body {
            request = request.json(body).map_err(|e| match e {
                HttpError::Json(e) => {
                    ApiError::InvalidRequest(format!("cannot serialize request body: {e}"))
                }
                other => ApiError::Transport(other),
            })?;
        }

        let response = request.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        tracing::debug!(method = %method, path, status = status.as_u16(), "api call");

        if status.is_success() {
            return response.bytes().await.map_err(ApiError::Transport);
        }

        let payload = match response.checked_bytes().await {
            Err(HttpError::HttpStatus { body_preview, .. }) => {
                ErrorPayload::from_body(body_preview)
            }
            Ok(body) => ErrorPayload::from_body(String::from_utf8_lossy(&body)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to read error body");
                ErrorPayload::default()
            }
        };
        let error = ApiError::from_status(status, payload);

        if error.is_unauthorized() {
            tracing::warn!(method = %method, path, "session rejected (401), running unauthorized handler");
            self.unauthorized.on_unauthorized(&UnauthorizedEvent {
                method,
                path: path.to_owned(),
                login_url: self.login_url.clone(),
            });
        }

        Err(error)
    }
}

fn join_path(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let joined = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&joined);
    url.set_query(None);
    url.set_fragment(None);
    url
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(ApiError::Decode)
}
