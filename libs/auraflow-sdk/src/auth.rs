//! Global reaction to an expired or missing session.
//!
//! Every 401, whichever call received it, reaches the single
//! [`UnauthorizedHandler`] installed on the [`RestClient`](crate::RestClient)
//! before the call fails with [`ApiError::Unauthorized`](crate::ApiError::Unauthorized).

use auraflow_http::CookieJar;
use http::Method;
use parking_lot::Mutex;
use url::Url;

/// Details of the call that was rejected with 401
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnauthorizedEvent {
    pub method: Method,
    /// Request path, without query string
    pub path: String,
    /// Where the user should be sent to sign in again
    pub login_url: Url,
}

/// Hook run once for every 401 response
pub trait UnauthorizedHandler: Send + Sync {
    fn on_unauthorized(&self, event: &UnauthorizedEvent);
}

/// Does nothing; the caller only sees the returned error
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopUnauthorized;

impl UnauthorizedHandler for NoopUnauthorized {
    fn on_unauthorized(&self, _event: &UnauthorizedEvent) {}
}

/// Records a pending redirect to the login page and drops the session cookies
///
/// A UI shell polls [`take_redirect`](Self::take_redirect) to navigate; the
/// CLI prints the URL. Repeated 401s keep the most recent login URL.
#[derive(Debug, Default)]
pub struct RedirectToLogin {
    pending: Mutex<Option<Url>>,
    jar: Option<CookieJar>,
}

impl RedirectToLogin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also clear `jar` when a 401 arrives
    #[must_use]
    pub fn with_cookie_jar(mut self, jar: CookieJar) -> Self {
        self.jar = Some(jar);
        self
    }

    /// Pending login URL, clearing it
    pub fn take_redirect(&self) -> Option<Url> {
        self.pending.lock().take()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.lock().is_some()
    }
}

impl UnauthorizedHandler for RedirectToLogin {
    fn on_unauthorized(&self, event: &UnauthorizedEvent) {
        if let Some(jar) = &self.jar {
            jar.clear();
        }
        *self.pending.lock() = Some(event.login_url.clone());
    }
}
