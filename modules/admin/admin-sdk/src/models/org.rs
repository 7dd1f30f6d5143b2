use auraflow_sdk::{Filter, Id, PageRequest, QueryString, Timestamp};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Page size the available-users picker asks for
pub const AVAILABLE_USERS_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(100) {
    Some(size) => size,
    None => panic!("page size must be non-zero"),
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub id: Id,
    pub tenant_id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDivisionRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDivisionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DivisionQuery {
    pub page: PageRequest,
    pub name: Option<String>,
}

impl DivisionQuery {
    #[must_use]
    pub fn to_query(&self) -> QueryString {
        QueryString::paged(self.page).text("name", self.name.as_deref())
    }
}

/// Department, optionally placed under a division
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: Id,
    pub tenant_id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub division_id: Option<Id>,
    #[serde(default)]
    pub division_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_id: Option<Id>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_id: Option<Id>,
}

/// Filters of the department listing; `division_id` is tri-state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentQuery {
    pub page: PageRequest,
    pub name: Option<String>,
    pub division_id: Filter<Id>,
}

impl DepartmentQuery {
    #[must_use]
    pub fn to_query(&self) -> QueryString {
        QueryString::paged(self.page)
            .text("name", self.name.as_deref())
            .tri_state("divisionId", &self.division_id)
    }
}

/// Paging and free-text search over users of one department
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberQuery {
    pub page: PageRequest,
    pub search: Option<String>,
}

impl MemberQuery {
    /// First page of [`AVAILABLE_USERS_PAGE_SIZE`] users
    #[must_use]
    pub fn available_users() -> Self {
        Self {
            page: PageRequest::first(AVAILABLE_USERS_PAGE_SIZE),
            search: None,
        }
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn to_query(&self) -> QueryString {
        QueryString::paged(self.page).text("search", self.search.as_deref())
    }
}
