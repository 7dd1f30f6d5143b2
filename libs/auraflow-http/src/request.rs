use crate::client::HttpClient;
use crate::config::TransportSecurity;
use crate::error::{HttpError, InvalidUrlKind};
use crate::response::HttpResponse;
use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http::{HeaderMap, Method, Request, Uri};
use http_body_util::Full;
use serde::Serialize;

/// One outgoing call, started by [`HttpClient::request`]
///
/// The URL is taken as final; compose query strings before (for example with
/// `url::Url`). A bad header is remembered and reported by
/// [`send`](Self::send) so calls keep chaining.
#[must_use = "nothing is sent until .send() is awaited"]
#[derive(Debug)]
pub struct RequestBuilder {
    client: HttpClient,
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Bytes>,
    deferred: Option<HttpError>,
}

impl RequestBuilder {
    pub(crate) fn new(client: HttpClient, method: Method, url: String) -> Self {
        Self {
            client,
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            deferred: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        if self.deferred.is_some() {
            return self;
        }
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.append(name, value);
            }
            _ => {
                self.deferred = Some(HttpError::InvalidHeader {
                    name: name.to_owned(),
                });
            }
        }
        self
    }

    /// Serialize `body` as the payload; `Content-Type: application/json`
    /// unless a content type was set already
    ///
    /// # Errors
    /// A header error recorded earlier, or `Json` when serialization fails.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, HttpError> {
        if let Some(err) = self.deferred.take() {
            return Err(err);
        }
        self.body = Some(Bytes::from(serde_json::to_vec(body)?));
        self.headers
            .entry(CONTENT_TYPE)
            .or_insert(HeaderValue::from_static("application/json"));
        Ok(self)
    }

    /// # Errors
    /// `InvalidUrl` or `InvalidHeader` before anything is dialed; otherwise
    /// the transport errors of [`HttpError`]. A non-2xx answer is `Ok`.
    pub async fn send(self) -> Result<HttpResponse, HttpError> {
        if let Some(err) = self.deferred {
            return Err(err);
        }
        let uri = check_url(&self.url, self.client.transport)?;

        let mut request = Request::builder()
            .method(self.method)
            .uri(uri)
            .body(Full::new(self.body.unwrap_or_default()))?;
        *request.headers_mut() = self.headers;

        self.client.dispatch(request).await
    }
}

/// Absolute URL whose scheme `transport` permits
fn check_url(url: &str, transport: TransportSecurity) -> Result<Uri, HttpError> {
    let invalid = |kind| HttpError::InvalidUrl {
        url: url.to_owned(),
        kind,
    };

    let uri: Uri = url.parse().map_err(|_| invalid(InvalidUrlKind::Malformed))?;
    if uri.authority().is_none() {
        return Err(invalid(InvalidUrlKind::NotAbsolute));
    }
    match uri.scheme_str() {
        Some("https") => Ok(uri),
        Some("http") if transport.allows_plain_http() => Ok(uri),
        Some(_) => Err(invalid(InvalidUrlKind::SchemeNotAllowed)),
        None => Err(invalid(InvalidUrlKind::NotAbsolute)),
    }
}
