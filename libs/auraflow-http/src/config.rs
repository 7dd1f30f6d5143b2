use std::time::Duration;

/// `User-Agent` sent when the caller configures none
pub const DEFAULT_USER_AGENT: &str = concat!("auraflow-http/", env!("CARGO_PKG_VERSION"));

/// Where trusted root certificates come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TlsRootConfig {
    /// Mozilla bundle shipped in `webpki-roots`
    #[default]
    WebPki,
    /// The operating system store
    Native,
}

/// URL schemes a client will dial
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportSecurity {
    #[default]
    TlsOnly,
    /// `http://` is accepted too; for a backend on localhost or a mock server
    AllowInsecureHttp,
}

impl TransportSecurity {
    #[must_use]
    pub const fn allows_plain_http(self) -> bool {
        matches!(self, Self::AllowInsecureHttp)
    }
}

/// Transport settings behind [`HttpClientBuilder`](crate::HttpClientBuilder)
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Budget for one request, headers included, body excluded
    pub request_timeout: Duration,
    /// Larger response bodies fail with `BodyTooLarge`
    pub max_body_size: usize,
    pub user_agent: String,
    pub transport: TransportSecurity,
    pub tls_roots: TlsRootConfig,
    /// Requests allowed to wait for the connection pool; one more fails
    /// with `Overloaded`
    pub max_queued_requests: usize,
    /// How long an unused pooled connection stays open (`None` keeps it)
    pub idle_connection_timeout: Option<Duration>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            max_body_size: 10 * 1024 * 1024,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            transport: TransportSecurity::default(),
            tls_roots: TlsRootConfig::default(),
            max_queued_requests: 256,
            idle_connection_timeout: Some(Duration::from_secs(90)),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_https_only_with_bundled_roots() {
        let config = HttpClientConfig::default();
        assert_eq!(config.transport, TransportSecurity::TlsOnly);
        assert_eq!(config.tls_roots, TlsRootConfig::WebPki);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_body_size, 10 * 1024 * 1024);
        assert!(config.user_agent.starts_with("auraflow-http/"));
    }

    #[test]
    fn only_insecure_mode_allows_http() {
        assert!(!TransportSecurity::TlsOnly.allows_plain_http());
        assert!(TransportSecurity::AllowInsecureHttp.allows_plain_http());
    }
}
