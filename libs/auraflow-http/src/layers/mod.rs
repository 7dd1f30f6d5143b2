//! Tower layers of the client stack

mod default_headers;
mod session_cookie;

pub use default_headers::{DefaultHeadersLayer, DefaultHeadersService};
pub use session_cookie::{SessionCookieLayer, SessionCookieService};
