//! Public API traits of the administration endpoints.
//!
//! Each trait covers one resource. The HTTP clients in [`crate::client`]
//! implement them; consumers that only need a subset (such as
//! [`SessionContext`](crate::SessionContext), which only needs
//! [`ProfileApi`]) take `&dyn Trait` so tests can substitute fakes.
//!
//! Every call is a single request/response round-trip: no retry, no local
//! caching, no optimistic update. After a successful mutation the caller
//! re-reads whatever listing it shows.
//!
//! # Errors
//!
//! All methods fail with [`ApiError`]:
//!
//! - `Transport` when no response was received
//! - `Unauthorized` on 401, after the client's unauthorized handler ran
//! - `Client` / `Server` for other 4xx / 5xx, carrying the backend message
//! - `Decode` when a 2xx body does not match the model

use async_trait::async_trait;
use auraflow_sdk::{ApiError, Id, PagedResponse};

use crate::models::{
    CreateDepartmentRequest, CreateDivisionRequest, CurrentUser, DashboardStats, Department,
    DepartmentQuery, DepartmentRef, Division, DivisionQuery, DivisionRef, InviteResponse,
    MemberQuery, Role, RoleQuery, RoleRequest, Tenant, TenantQuery, TenantRequest,
    TenantUserQuery, UpdateDepartmentRequest, UpdateDivisionRequest, UpdateProfileRequest,
    UpdateUserRequest, User, UserQuery,
};

/// Tenant management (`/api/tenants`)
#[async_trait]
pub trait TenantsApi: Send + Sync {
    /// One page of tenants matching `query`
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn list(&self, query: &TenantQuery) -> Result<PagedResponse<Tenant>, ApiError>;

    /// # Errors
    /// `Client` with status 404 when the tenant does not exist.
    async fn get(&self, id: Id) -> Result<Tenant, ApiError>;

    /// # Errors
    /// `Client` when the backend rejects the payload.
    async fn create(&self, request: &TenantRequest) -> Result<Tenant, ApiError>;

    /// # Errors
    /// `Client` when the backend rejects the payload or the tenant is unknown.
    async fn update(&self, id: Id, request: &TenantRequest) -> Result<Tenant, ApiError>;

    /// Set the status to `ACTIVE`, keeping the name
    ///
    /// # Errors
    /// See [`update`](Self::update).
    async fn activate(&self, tenant: &Tenant) -> Result<Tenant, ApiError>;

    /// Set the status to `INACTIVE`, keeping the name
    ///
    /// # Errors
    /// See [`update`](Self::update).
    async fn deactivate(&self, tenant: &Tenant) -> Result<Tenant, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn delete(&self, id: Id) -> Result<(), ApiError>;
}

/// Platform-wide user management (`/api/users`)
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// # Errors
    /// See the [module docs](self).
    async fn list(&self, query: &UserQuery) -> Result<PagedResponse<User>, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn get(&self, id: Id) -> Result<User, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn update(&self, id: Id, request: &UpdateUserRequest) -> Result<User, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn activate(&self, id: Id) -> Result<User, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn deactivate(&self, id: Id) -> Result<User, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn delete(&self, id: Id) -> Result<(), ApiError>;
}

/// User management inside the caller's own tenant (`/api/admin/users`)
///
/// Kept apart from [`UsersApi`]: the filter set differs and the backend
/// scopes every call to the caller's tenant.
#[async_trait]
pub trait TenantUsersApi: Send + Sync {
    /// # Errors
    /// See the [module docs](self).
    async fn list(&self, query: &TenantUserQuery) -> Result<PagedResponse<User>, ApiError>;

    /// Invite a new user by email
    ///
    /// # Errors
    /// `Client` when the email is taken or invalid.
    async fn invite(&self, email: &str) -> Result<InviteResponse, ApiError>;

    /// Roles the caller may hand out
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn available_roles(&self) -> Result<Vec<Role>, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn update(&self, id: Id, request: &UpdateUserRequest) -> Result<User, ApiError>;

    /// Replace the user's roles with `role_ids`
    ///
    /// # Errors
    /// `Client` when a role is not assignable by the caller.
    async fn assign_roles(&self, id: Id, role_ids: &[Id]) -> Result<User, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn activate(&self, id: Id) -> Result<User, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn deactivate(&self, id: Id) -> Result<User, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn delete(&self, id: Id) -> Result<(), ApiError>;
}

/// Role catalogue (`/api/roles`)
#[async_trait]
pub trait RolesApi: Send + Sync {
    /// # Errors
    /// See the [module docs](self).
    async fn list(&self, query: &RoleQuery) -> Result<PagedResponse<Role>, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn get(&self, id: Id) -> Result<Role, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn create(&self, request: &RoleRequest) -> Result<Role, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn update(&self, id: Id, request: &RoleRequest) -> Result<Role, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn delete(&self, id: Id) -> Result<(), ApiError>;
}

/// Role assignment (`/api/user-roles`)
#[async_trait]
pub trait UserRolesApi: Send + Sync {
    /// Add `role_ids` to the user
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn assign(&self, user_id: Id, role_ids: &[Id]) -> Result<User, ApiError>;

    /// Remove one role from the user
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn unassign(&self, user_id: Id, role_id: Id) -> Result<User, ApiError>;

    /// The user with their roles
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn get(&self, user_id: Id) -> Result<User, ApiError>;
}

/// Divisions of the caller's tenant (`/api/admin/divisions`)
#[async_trait]
pub trait DivisionsApi: Send + Sync {
    /// # Errors
    /// See the [module docs](self).
    async fn list(&self, query: &DivisionQuery) -> Result<PagedResponse<Division>, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn create(&self, request: &CreateDivisionRequest) -> Result<Division, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn update(&self, id: Id, request: &UpdateDivisionRequest)
    -> Result<Division, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn delete(&self, id: Id) -> Result<(), ApiError>;
}

/// Departments of the caller's tenant and their members
/// (`/api/admin/departments`)
#[async_trait]
pub trait DepartmentsApi: Send + Sync {
    /// # Errors
    /// See the [module docs](self).
    async fn list(&self, query: &DepartmentQuery) -> Result<PagedResponse<Department>, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn get(&self, id: Id) -> Result<Department, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn create(&self, request: &CreateDepartmentRequest) -> Result<Department, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn update(
        &self,
        id: Id,
        request: &UpdateDepartmentRequest,
    ) -> Result<Department, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn delete(&self, id: Id) -> Result<(), ApiError>;

    /// Users currently in the department
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn members(&self, id: Id, query: &MemberQuery)
    -> Result<PagedResponse<User>, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn assign_member(&self, id: Id, user_id: Id) -> Result<(), ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn remove_member(&self, id: Id, user_id: Id) -> Result<(), ApiError>;

    /// Users of the tenant that could be added to the department
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn available_users(
        &self,
        id: Id,
        query: &MemberQuery,
    ) -> Result<PagedResponse<User>, ApiError>;
}

/// The signed-in user's own profile and session
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// # Errors
    /// `Unauthorized` when there is no valid session.
    async fn me(&self) -> Result<CurrentUser, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn update_me(&self, request: &UpdateProfileRequest) -> Result<CurrentUser, ApiError>;

    /// All divisions of the tenant, unpaged, for pickers
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn divisions(&self) -> Result<Vec<DivisionRef>, ApiError>;

    /// All departments of the tenant, unpaged, for pickers
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn departments(&self) -> Result<Vec<DepartmentRef>, ApiError>;

    /// End the server-side session
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn logout(&self) -> Result<(), ApiError>;
}

#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// # Errors
    /// See the [module docs](self).
    async fn stats(&self) -> Result<DashboardStats, ApiError>;
}
