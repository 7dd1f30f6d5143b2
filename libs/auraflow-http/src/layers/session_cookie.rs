use crate::cookie::CookieJar;
use http::{Request, Response};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Tower layer implementing credentialed requests against a [`CookieJar`]
///
/// Outgoing requests get a `Cookie` header built from the jar unless the
/// caller set one. Every `Set-Cookie` on the response is written back to the
/// jar, including on error statuses (a 401 may carry a cleared session).
#[derive(Clone, Debug)]
pub struct SessionCookieLayer {
    jar: CookieJar,
}

impl SessionCookieLayer {
    #[must_use]
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }
}

impl<S> Layer<S> for SessionCookieLayer {
    type Service = SessionCookieService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SessionCookieService {
            inner,
            jar: self.jar.clone(),
        }
    }
}

/// Service produced by [`SessionCookieLayer`]
#[derive(Clone, Debug)]
pub struct SessionCookieService<S> {
    inner: S,
    jar: CookieJar,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for SessionCookieService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        if !req.headers().contains_key(http::header::COOKIE)
            && let Some(cookie) = self.jar.header_value()
        {
            req.headers_mut().insert(http::header::COOKIE, cookie);
        }

        let jar = self.jar.clone();
        let fut = self.inner.call(req);
        Box::pin(async move {
            let response = fut.await?;
            for value in response.headers().get_all(http::header::SET_COOKIE) {
                jar.absorb(value);
            }
            Ok(response)
        })
    }
}
