//! Session cookie storage for credentialed requests.
//!
//! The backend authenticates with an HTTP-only session cookie. A browser keeps
//! that cookie on its own; here a [`CookieJar`] shared by the client plays the
//! same role. The jar is scoped to one client (one backend origin), so cookies
//! are keyed by name only and `Domain`/`Path` attributes are ignored.

use http::HeaderValue;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

/// Shared, cloneable cookie store
///
/// Clones share the same storage, so the jar handed to the client builder can
/// be kept by the application to seed, inspect or clear the session.
#[derive(Clone, Default)]
pub struct CookieJar {
    inner: Arc<RwLock<BTreeMap<String, String>>>,
}

impl fmt::Debug for CookieJar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values are session credentials; only names are printed.
        let names: Vec<String> = self.inner.read().keys().cloned().collect();
        f.debug_struct("CookieJar").field("names", &names).finish()
    }
}

impl CookieJar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a jar seeded with a single cookie
    #[must_use]
    pub fn with_cookie(name: impl Into<String>, value: impl Into<String>) -> Self {
        let jar = Self::new();
        jar.set(name, value);
        jar
    }

    /// Store or replace a cookie
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.write().insert(name.into(), value.into());
    }

    /// Current value of a cookie
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.inner.read().get(name).cloned()
    }

    pub fn remove(&self, name: &str) {
        self.inner.write().remove(name);
    }

    /// Drop every stored cookie
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Render the `Cookie` request header, `None` when the jar is empty
    pub(crate) fn header_value(&self) -> Option<HeaderValue> {
        let guard = self.inner.read();
        if guard.is_empty() {
            return None;
        }
        let joined = guard
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        drop(guard);

        match HeaderValue::from_str(&joined) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("stored cookies are not a valid header value; sending none");
                None
            }
        }
    }

    /// Apply one `Set-Cookie` response header
    pub(crate) fn absorb(&self, header: &HeaderValue) {
        let Ok(raw) = header.to_str() else {
            return;
        };
        let Some(parsed) = parse_set_cookie(raw, SystemTime::now()) else {
            return;
        };

        if parsed.expired {
            tracing::debug!(cookie = %parsed.name, "cookie removed by server");
            self.remove(&parsed.name);
        } else {
            tracing::debug!(cookie = %parsed.name, "cookie stored");
            self.set(parsed.name, parsed.value);
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct SetCookie {
    name: String,
    value: String,
    expired: bool,
}

/// Parse the parts of a `Set-Cookie` value that matter for a single-origin jar.
///
/// `Max-Age` wins over `Expires` (RFC 6265 section 5.3). An empty value is
/// treated as a deletion, which is how the backend clears the session on logout.
fn parse_set_cookie(raw: &str, now: SystemTime) -> Option<SetCookie> {
    let mut parts = raw.split(';');
    let (name, value) = parts.next()?.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let value = value.trim().trim_matches('"');

    let mut max_age: Option<i64> = None;
    let mut expires: Option<SystemTime> = None;
    for attr in parts {
        let Some((key, val)) = attr.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let val = val.trim();
        if key.eq_ignore_ascii_case("max-age") {
            max_age = val.parse().ok();
        } else if key.eq_ignore_ascii_case("expires") {
            expires = httpdate::parse_http_date(val).ok();
        }
    }

    let expired = value.is_empty()
        || match (max_age, expires) {
            (Some(age), _) => age <= 0,
            (None, Some(at)) => at <= now,
            (None, None) => false,
        };

    Some(SetCookie {
        name: name.to_owned(),
        value: value.to_owned(),
        expired,
    })
}
