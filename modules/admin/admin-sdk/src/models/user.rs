use super::role::Role;
use auraflow_sdk::{Filter, Id, PageRequest, QueryString, StatusFilter, Timestamp};
use serde::{Deserialize, Serialize};

auraflow_sdk::wire_enum! {
    /// Account state; `Invited` users have not signed in yet
    pub enum UserStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Invited => "INVITED",
    }
}

/// User as listed by both the global and the tenant-scoped endpoints
///
/// `roles` is only filled in by the tenant-scoped endpoints and the
/// user-role calls. `None` division or department means unassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub tenant_id: Id,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub division_id: Option<Id>,
    #[serde(default)]
    pub department_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Role>,
    pub status: UserStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// "First Last" when either part is known, the email otherwise
    #[must_use]
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }
}

/// Partial update; unset fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<Id>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRolesRequest {
    pub role_ids: Vec<Id>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleAssignment {
    pub user_id: Id,
    pub role_ids: Vec<Id>,
}

/// Filters of the global user listing (`/api/users`)
///
/// `division_id` and `department_id` are tri-state: [`Filter::Empty`]
/// selects users without a division or department.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub page: PageRequest,
    pub id: Option<Id>,
    pub email: Option<String>,
    pub status: StatusFilter<UserStatus>,
    pub tenant_id: Option<Id>,
    pub division_id: Filter<Id>,
    pub department_id: Filter<Id>,
    pub role_level: Option<i32>,
}

impl UserQuery {
    #[must_use]
    pub fn to_query(&self) -> QueryString {
        QueryString::paged(self.page)
            .value("id", self.id)
            .text("email", self.email.as_deref())
            .status("status", &self.status)
            .value("tenantId", self.tenant_id)
            .tri_state("divisionId", &self.division_id)
            .tri_state("departmentId", &self.department_id)
            .value("roleLevel", self.role_level)
    }
}

/// Filters of the tenant-scoped user listing (`/api/admin/users`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantUserQuery {
    pub page: PageRequest,
    pub email: Option<String>,
    pub status: StatusFilter<UserStatus>,
    pub role_level: Option<i32>,
}

impl TenantUserQuery {
    #[must_use]
    pub fn to_query(&self) -> QueryString {
        QueryString::paged(self.page)
            .text("email", self.email.as_deref())
            .status("status", &self.status)
            .value("roleLevel", self.role_level)
    }
}
