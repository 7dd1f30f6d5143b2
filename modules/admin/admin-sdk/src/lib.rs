#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Admin SDK
//!
//! Typed clients for the `AuraFlow` administration endpoints:
//!
//! - [`api`] - one trait per resource ([`TenantsApi`], [`UsersApi`], ...)
//! - [`client`] - their HTTP implementations and the [`AdminClient`] entry point
//! - [`models`] - request/response bodies and list query structs
//! - [`SessionContext`] - the signed-in user with an explicit load/clear lifecycle
//!
//! ## Usage
//!
//! ```ignore
//! use admin_sdk::{AdminClient, TenantQuery, TenantsApi, TenantStatus};
//!
//! let admin = AdminClient::new(rest);
//! let page = admin
//!     .tenants()
//!     .list(&TenantQuery { status: TenantStatus::Active.into(), ..Default::default() })
//!     .await?;
//! ```

pub mod api;
pub mod client;
pub mod models;
pub mod session;

pub use api::{
    DashboardApi, DepartmentsApi, DivisionsApi, ProfileApi, RolesApi, TenantUsersApi, TenantsApi,
    UserRolesApi, UsersApi,
};
pub use client::{
    AdminClient, DashboardClient, DepartmentsClient, DivisionsClient, ProfileClient, RolesClient,
    TenantUsersClient, TenantsClient, UserRolesClient, UsersClient,
};
pub use models::{
    CreateDepartmentRequest, CreateDivisionRequest, CurrentUser, DashboardStats, Department,
    DepartmentQuery, DepartmentRef, Division, DivisionQuery, DivisionRef, InviteResponse,
    MemberQuery, Role, RoleQuery, RoleRequest, Tenant, TenantQuery, TenantRequest, TenantStatus,
    TenantUserQuery, UpdateDepartmentRequest, UpdateDivisionRequest, UpdateProfileRequest,
    UpdateUserRequest, User, UserQuery, UserStatus,
};
pub use session::SessionContext;
