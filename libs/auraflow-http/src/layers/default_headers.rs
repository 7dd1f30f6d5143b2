use crate::error::HttpError;
use http::header::{ACCEPT, USER_AGENT};
use http::{HeaderMap, HeaderValue, Request};
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Fills in `User-Agent` and `Accept: application/json` on requests that
/// lack them
#[derive(Clone, Debug)]
pub struct DefaultHeadersLayer {
    defaults: HeaderMap,
}

impl DefaultHeadersLayer {
    /// # Errors
    /// `InvalidHeader` when `user_agent` is not a legal header value.
    pub fn new(user_agent: &str) -> Result<Self, HttpError> {
        let agent = HeaderValue::from_str(user_agent).map_err(|_| HttpError::InvalidHeader {
            name: USER_AGENT.to_string(),
        })?;
        let mut defaults = HeaderMap::with_capacity(2);
        defaults.insert(USER_AGENT, agent);
        defaults.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(Self { defaults })
    }
}

impl<S> Layer<S> for DefaultHeadersLayer {
    type Service = DefaultHeadersService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        DefaultHeadersService {
            inner,
            defaults: self.defaults.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DefaultHeadersService<S> {
    inner: S,
    defaults: HeaderMap,
}

impl<S, B> Service<Request<B>> for DefaultHeadersService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let headers = req.headers_mut();
        for (name, value) in &self.defaults {
            if !headers.contains_key(name) {
                headers.insert(name, value.clone());
            }
        }
        self.inner.call(req)
    }
}
