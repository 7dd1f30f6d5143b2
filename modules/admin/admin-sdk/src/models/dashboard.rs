use auraflow_sdk::Id;
use serde::{Deserialize, Serialize};

/// Platform-wide counters for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_tenants: u64,
    pub total_users: u64,
    pub active_users: u64,
    pub total_roles: u64,
    #[serde(default)]
    pub users_by_tenant: Vec<TenantUserCount>,
    #[serde(default)]
    pub users_by_status: Vec<UserStatusCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantUserCount {
    pub tenant_id: Id,
    pub tenant_name: String,
    pub user_count: u64,
}

/// Status is kept as sent; the backend groups by its own status names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatusCount {
    pub status: String,
    pub count: u64,
}
