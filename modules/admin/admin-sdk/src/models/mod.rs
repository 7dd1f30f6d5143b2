//! Request and response models of the administration endpoints.
//!
//! Field names follow the backend's camelCase JSON. Query structs turn
//! their typed filters into a [`QueryString`](auraflow_sdk::QueryString)
//! with `to_query`.

mod dashboard;
mod org;
mod profile;
mod role;
mod tenant;
mod user;

pub use dashboard::{DashboardStats, TenantUserCount, UserStatusCount};
pub use org::{
    AVAILABLE_USERS_PAGE_SIZE, CreateDepartmentRequest, CreateDivisionRequest, Department,
    DepartmentQuery, Division, DivisionQuery, MemberQuery, UpdateDepartmentRequest,
    UpdateDivisionRequest,
};
pub use profile::{
    CurrentUser, DepartmentRef, DivisionRef, InviteRequest, InviteResponse, UpdateProfileRequest,
};
pub use role::{Role, RoleQuery, RoleRequest};
pub use tenant::{Tenant, TenantQuery, TenantRequest, TenantStatus};
pub use user::{
    AssignRolesRequest, TenantUserQuery, UpdateUserRequest, User, UserQuery, UserRoleAssignment,
    UserStatus,
};
