//! HTTP implementations of the [`api`](crate::api) traits over a shared
//! [`RestClient`].
//!
//! The clients are thin: they pick the path, encode the query and let
//! [`RestClient`] do the round-trip. Cloning any of them is cheap.

mod dashboard;
mod departments;
mod divisions;
mod profile;
mod roles;
mod tenant_users;
mod tenants;
mod user_roles;
mod users;

pub use dashboard::DashboardClient;
pub use departments::DepartmentsClient;
pub use divisions::DivisionsClient;
pub use profile::ProfileClient;
pub use roles::RolesClient;
pub use tenant_users::TenantUsersClient;
pub use tenants::TenantsClient;
pub use user_roles::UserRolesClient;
pub use users::UsersClient;

use auraflow_sdk::RestClient;

/// Entry point handing out one client per resource, all sharing one
/// [`RestClient`] (and therefore one connection pool, cookie jar and
/// unauthorized handler)
#[derive(Debug, Clone)]
pub struct AdminClient {
    rest: RestClient,
}

impl AdminClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    #[must_use]
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    #[must_use]
    pub fn tenants(&self) -> TenantsClient {
        TenantsClient::new(self.rest.clone())
    }

    #[must_use]
    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.rest.clone())
    }

    #[must_use]
    pub fn tenant_users(&self) -> TenantUsersClient {
        TenantUsersClient::new(self.rest.clone())
    }

    #[must_use]
    pub fn roles(&self) -> RolesClient {
        RolesClient::new(self.rest.clone())
    }

    #[must_use]
    pub fn user_roles(&self) -> UserRolesClient {
        UserRolesClient::new(self.rest.clone())
    }

    #[must_use]
    pub fn divisions(&self) -> DivisionsClient {
        DivisionsClient::new(self.rest.clone())
    }

    #[must_use]
    pub fn departments(&self) -> DepartmentsClient {
        DepartmentsClient::new(self.rest.clone())
    }

    #[must_use]
    pub fn profile(&self) -> ProfileClient {
        ProfileClient::new(self.rest.clone())
    }

    #[must_use]
    pub fn dashboard(&self) -> DashboardClient {
        DashboardClient::new(self.rest.clone())
    }
}
