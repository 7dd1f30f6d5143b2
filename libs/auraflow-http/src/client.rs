use crate::builder::HttpClientBuilder;
use crate::config::TransportSecurity;
use crate::cookie::CookieJar;
use crate::error::{BoxError, HttpError};
use crate::request::RequestBuilder;
use crate::response::{HttpResponse, ResponseBody};
use bytes::Bytes;
use http::{Method, Request, Response};
use http_body_util::Full;
use std::future::{Future, poll_fn};
use std::pin::Pin;
use std::task::Poll;
use tower::Service;
use tower::buffer::Buffer;

pub type StackFuture =
    Pin<Box<dyn Future<Output = Result<Response<ResponseBody>, HttpError>> + Send>>;

/// Queue in front of the middleware stack; every client clone holds a handle
pub type SharedStack = Buffer<Request<Full<Bytes>>, StackFuture>;

/// Pooled HTTP client
///
/// Cheap to clone. Clones share connections, the request queue and, in
/// credentialed mode, the [`CookieJar`]. Built by [`HttpClientBuilder`].
#[derive(Clone)]
pub struct HttpClient {
    pub(crate) stack: SharedStack,
    pub(crate) max_body_size: usize,
    pub(crate) transport: TransportSecurity,
    pub(crate) cookies: Option<CookieJar>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("transport", &self.transport)
            .field("max_body_size", &self.max_body_size)
            .field("cookies", &self.cookies)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    #[must_use]
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// The session jar, present in credentialed mode
    #[must_use]
    pub fn cookies(&self) -> Option<&CookieJar> {
        self.cookies.as_ref()
    }

    /// `url` must be absolute; see [`RequestBuilder::send`] for what is
    /// rejected
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        RequestBuilder::new(self.clone(), method, url.to_owned())
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    pub fn put(&self, url: &str) -> RequestBuilder {
        self.request(Method::PUT, url)
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }

    pub(crate) async fn dispatch(
        &self,
        request: Request<Full<Bytes>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut stack = self.stack.clone();

        // A full queue fails now instead of parking the caller
        match poll_fn(|cx| Poll::Ready(stack.poll_ready(cx))).await {
            Poll::Ready(Ok(())) => {}
            Poll::Ready(Err(err)) => return Err(unwrap_queue_error(err)),
            Poll::Pending => return Err(HttpError::Overloaded),
        }

        let response = stack.call(request).await.map_err(unwrap_queue_error)?;
        Ok(HttpResponse::new(response, self.max_body_size))
    }
}

/// The queue boxes errors of the stack; anything else means its worker died
fn unwrap_queue_error(err: BoxError) -> HttpError {
    err.downcast::<HttpError>().map_or_else(
        |err| {
            tracing::error!(error = %err, "request queue worker stopped");
            HttpError::Closed
        },
        |err| *err,
    )
}
