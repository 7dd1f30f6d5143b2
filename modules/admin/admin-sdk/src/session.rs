//! Signed-in user context with an explicit lifecycle.
//!
//! A [`SessionContext`] is created empty, filled by [`load`](SessionContext::load)
//! and emptied by [`clear`](SessionContext::clear) or
//! [`logout`](SessionContext::logout). It is passed to whatever needs the
//! current user; nothing reads it implicitly.

use arc_swap::ArcSwapOption;
use auraflow_sdk::ApiError;
use std::sync::Arc;

use crate::api::ProfileApi;
use crate::models::{CurrentUser, Role};

#[derive(Debug, Default)]
pub struct SessionContext {
    user: ArcSwapOption<CurrentUser>,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the current user and keep it
    ///
    /// A failed load leaves the previous user in place.
    ///
    /// # Errors
    /// Whatever [`ProfileApi::me`] returns, `Unauthorized` included.
    pub async fn load(&self, profile: &dyn ProfileApi) -> Result<Arc<CurrentUser>, ApiError> {
        let user = Arc::new(profile.me().await?);
        self.user.store(Some(Arc::clone(&user)));
        Ok(user)
    }

    /// Replace the user, e.g. with the result of a profile update
    pub fn set(&self, user: CurrentUser) {
        self.user.store(Some(Arc::new(user)));
    }

    #[must_use]
    pub fn user(&self) -> Option<Arc<CurrentUser>> {
        self.user.load_full()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.user.load().is_some()
    }

    /// Level of the user's most privileged role
    ///
    /// `None` when no user is loaded or the user has no roles.
    #[must_use]
    pub fn role_level(&self) -> Option<i32> {
        self.user.load().as_ref().and_then(|u| u.role_level())
    }

    /// Whether the user may enter an area limited to `max_level`
    ///
    /// Lower levels are more privileged, so this holds when the user's
    /// level is at most `max_level`. A user without roles never qualifies.
    #[must_use]
    pub fn has_role_level(&self, max_level: i32) -> bool {
        self.role_level().is_some_and(|level| level <= max_level)
    }

    /// The subset of `roles` the user may assign to others
    #[must_use]
    pub fn assignable<'a>(&self, roles: &'a [Role]) -> Vec<&'a Role> {
        let Some(level) = self.role_level() else {
            return Vec::new();
        };
        roles.iter().filter(|r| r.is_assignable_by(level)).collect()
    }

    pub fn clear(&self) {
        self.user.store(None);
    }

    /// End the session on the server and forget the user
    ///
    /// The context is cleared even when the backend call fails.
    ///
    /// # Errors
    /// Whatever [`ProfileApi::logout`] returns.
    pub async fn logout(&self, profile: &dyn ProfileApi) -> Result<(), ApiError> {
        let result = profile.logout().await;
        self.clear();
        result
    }
}
