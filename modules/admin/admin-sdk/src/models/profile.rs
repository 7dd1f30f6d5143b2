use super::role::Role;
use super::user::UserStatus;
use auraflow_sdk::{Filter, Id, Timestamp};
use serde::{Deserialize, Serialize};

/// Division as embedded in the profile and the unpaged lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionRef {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRef {
    pub id: Id,
    pub tenant_id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The signed-in user (`/api/users/me`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
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
    pub division: Option<DivisionRef>,
    #[serde(default)]
    pub department: Option<DepartmentRef>,
    #[serde(default)]
    pub roles: Vec<Role>,
    pub status: UserStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CurrentUser {
    /// Level of the most privileged role, `None` without roles
    #[must_use]
    pub fn role_level(&self) -> Option<i32> {
        self.roles.iter().map(|r| r.level).min()
    }
}

/// Self-service profile update
///
/// `division_id` and `department_id` distinguish "leave unchanged"
/// ([`Filter::Absent`], field omitted) from "unassign" ([`Filter::Empty`],
/// sent as `null`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Filter::is_absent")]
    pub division_id: Filter<Id>,
    #[serde(skip_serializing_if = "Filter::is_absent")]
    pub department_id: Filter<Id>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteResponse {
    pub message: String,
}
