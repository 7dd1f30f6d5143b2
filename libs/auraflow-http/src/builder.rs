use crate::client::{HttpClient, SharedStack};
use crate::config::{HttpClientConfig, TlsRootConfig, TransportSecurity};
use crate::cookie::CookieJar;
use crate::error::{BoxError, HttpError};
use crate::layers::{DefaultHeadersLayer, SessionCookieLayer};
use crate::response::ResponseBody;
use crate::tls;
use bytes::Bytes;
use http::Response;
use http_body_util::{BodyExt, Full};
use hyper_util::client::legacy::Client;
use hyper_util::rt::{TokioExecutor, TokioTimer};
use std::time::Duration;
use tower::buffer::Buffer;
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower::{Layer, ServiceBuilder, ServiceExt};
use tower_http::decompression::DecompressionLayer;

/// Assembles an [`HttpClient`]
///
/// Layers, outermost first: request queue, session cookies (when a jar is
/// given), timeout, default headers, decompression, hyper pool. Redirects are
/// never followed and nothing is retried.
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    config: HttpClientConfig,
    cookies: Option<CookieJar>,
}

impl HttpClientBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: HttpClientConfig) -> Self {
        Self {
            config,
            cookies: None,
        }
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn max_body_size(mut self, bytes: usize) -> Self {
        self.config.max_body_size = bytes;
        self
    }

    #[must_use]
    pub fn transport(mut self, transport: TransportSecurity) -> Self {
        self.config.transport = transport;
        self
    }

    /// Shorthand for `.transport(TransportSecurity::AllowInsecureHttp)`,
    /// compiled into debug builds or with the `allow-insecure-http` feature
    #[must_use]
    #[cfg(any(debug_assertions, feature = "allow-insecure-http"))]
    pub fn allow_insecure_http(self) -> Self {
        self.transport(TransportSecurity::AllowInsecureHttp)
    }

    #[must_use]
    pub fn tls_roots(mut self, roots: TlsRootConfig) -> Self {
        self.config.tls_roots = roots;
        self
    }

    /// Zero is raised to one
    #[must_use]
    pub fn max_queued_requests(mut self, limit: usize) -> Self {
        self.config.max_queued_requests = limit;
        self
    }

    #[must_use]
    pub fn idle_connection_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.idle_connection_timeout = timeout;
        self
    }

    /// Credentialed mode: every request carries the cookies in `jar` and
    /// every `Set-Cookie` lands in it, error responses included
    #[must_use]
    pub fn session_cookies(mut self, jar: CookieJar) -> Self {
        self.cookies = Some(jar);
        self
    }

    /// # Errors
    /// `Tls` when the root store cannot be loaded, `InvalidHeader` for an
    /// unusable user agent.
    ///
    /// # Panics
    /// Outside a Tokio runtime: the request queue spawns its worker task here.
    pub fn build(self) -> Result<HttpClient, HttpError> {
        let Self { config, cookies } = self;
        if config.transport.allows_plain_http() {
            tracing::warn!(
                target: "auraflow_http::security",
                "plain HTTP allowed; traffic to http:// URLs is not encrypted"
            );
        }

        let connector = tls::https_connector(config.tls_roots, config.transport)?;
        let pool = Client::builder(TokioExecutor::new())
            .pool_timer(TokioTimer::new())
            .pool_idle_timeout(config.idle_connection_timeout)
            .build::<_, Full<Bytes>>(connector);

        let timeout = config.request_timeout;
        let core = ServiceBuilder::new()
            .layer(TimeoutLayer::new(timeout))
            .layer(DefaultHeadersLayer::new(&config.user_agent)?)
            .layer(DecompressionLayer::new())
            .service(pool)
            .map_response(erase_body)
            .map_err(move |err: BoxError| classify(err, timeout))
            .boxed_clone();

        let stack = match &cookies {
            Some(jar) => SessionCookieLayer::new(jar.clone())
                .layer(core)
                .boxed_clone(),
            None => core,
        };
        let stack: SharedStack = Buffer::new(stack, config.max_queued_requests.max(1));

        Ok(HttpClient {
            stack,
            max_body_size: config.max_body_size,
            transport: config.transport,
            cookies,
        })
    }
}

fn erase_body<B>(response: Response<B>) -> Response<ResponseBody>
where
    B: hyper::body::Body<Data = Bytes> + Send + Sync + 'static,
    B::Error: Into<BoxError>,
{
    response.map(|body| body.map_err(Into::into).boxed())
}

fn classify(err: BoxError, timeout: Duration) -> HttpError {
    if err.is::<Elapsed>() {
        return HttpError::Timeout(timeout);
    }
    err.downcast::<HttpError>()
        .map_or_else(HttpError::Transport, |err| *err)
}
