use auraflow_sdk::{Id, PageRequest, QueryString, StatusFilter, Timestamp};
use serde::{Deserialize, Serialize};

auraflow_sdk::wire_enum! {
    /// Lifecycle state of a tenant
    pub enum TenantStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Suspended => "SUSPENDED",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Id,
    pub name: String,
    pub status: TenantStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of tenant create and update calls
///
/// The backend applies its default status when `status` is left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TenantStatus>,
}

impl TenantRequest {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: TenantStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Same tenant name, new status
    #[must_use]
    pub fn status_change(tenant: &Tenant, status: TenantStatus) -> Self {
        Self::new(tenant.name.clone()).with_status(status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantQuery {
    pub page: PageRequest,
    pub id: Option<Id>,
    pub name: Option<String>,
    pub status: StatusFilter<TenantStatus>,
}

impl TenantQuery {
    #[must_use]
    pub fn to_query(&self) -> QueryString {
        QueryString::paged(self.page)
            .value("id", self.id)
            .text("name", self.name.as_deref())
            .status("status", &self.status)
    }
}
