#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

//! HTTP transport for `AuraFlow` API clients
//!
//! A pooled hyper client behind a small tower stack. It speaks rustls TLS
//! (HTTPS only unless plain HTTP is allowed), bounds every request by a
//! timeout and fills in `User-Agent` and `Accept`. Compressed bodies are
//! inflated transparently.
//!
//! In credentialed mode a shared [`CookieJar`] replays the session cookie on
//! every request and absorbs each `Set-Cookie`, the way a browser would.
//!
//! Nothing is retried and redirects are not followed: every status, 4xx and
//! 5xx included, comes back to the caller as an [`HttpResponse`].
//!
//! # Example
//!
//! ```ignore
//! use auraflow_http::{CookieJar, HttpClient};
//! use std::time::Duration;
//!
//! let jar = CookieJar::new();
//! let client = HttpClient::builder()
//!     .timeout(Duration::from_secs(10))
//!     .session_cookies(jar.clone())
//!     .build()?;
//!
//! let resp = client.get("https://auraflow.example.com/api/users/me").send().await?;
//! ```

mod builder;
mod client;
mod config;
mod cookie;
mod error;
mod layers;
mod request;
mod response;
mod tls;

pub use builder::HttpClientBuilder;
pub use client::HttpClient;
pub use config::{DEFAULT_USER_AGENT, HttpClientConfig, TlsRootConfig, TransportSecurity};
pub use cookie::CookieJar;
pub use error::{BoxError, HttpError, InvalidUrlKind};
pub use layers::{
    DefaultHeadersLayer, DefaultHeadersService, SessionCookieLayer, SessionCookieService,
};
pub use request::RequestBuilder;
pub use response::{ERROR_BODY_PREVIEW_LIMIT, HttpResponse, ResponseBody};
