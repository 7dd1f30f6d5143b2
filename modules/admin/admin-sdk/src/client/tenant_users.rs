use async_trait::async_trait;
use auraflow_sdk::{ApiError, Id, PagedResponse, RestClient};

use crate::api::TenantUsersApi;
use crate::models::{
    AssignRolesRequest, InviteRequest, InviteResponse, Role, TenantUserQuery, UpdateUserRequest,
    User,
};

const BASE: &str = "/api/admin/users";

#[derive(Debug, Clone)]
pub struct TenantUsersClient {
    rest: RestClient,
}

impl TenantUsersClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl TenantUsersApi for TenantUsersClient {
    async fn list(&self, query: &TenantUserQuery) -> Result<PagedResponse<User>, ApiError> {
        self.rest.get_with(BASE, &query.to_query()).await
    }

    async fn invite(&self, email: &str) -> Result<InviteResponse, ApiError> {
        let request = InviteRequest {
            email: email.to_owned(),
        };
        self.rest.post(&format!("{BASE}/invite"), &request).await
    }

    async fn available_roles(&self) -> Result<Vec<Role>, ApiError> {
        self.rest.get(&format!("{BASE}/roles/available")).await
    }

    async fn update(&self, id: Id, request: &UpdateUserRequest) -> Result<User, ApiError> {
        self.rest.put(&format!("{BASE}/{id}"), request).await
    }

    async fn assign_roles(&self, id: Id, role_ids: &[Id]) -> Result<User, ApiError> {
        let request = AssignRolesRequest {
            role_ids: role_ids.to_vec(),
        };
        self.rest.put(&format!("{BASE}/{id}/roles"), &request).await
    }

    async fn activate(&self, id: Id) -> Result<User, ApiError> {
        self.rest.put_empty(&format!("{BASE}/{id}/activate")).await
    }

    async fn deactivate(&self, id: Id) -> Result<User, ApiError> {
        self.rest.put_empty(&format!("{BASE}/{id}/deactivate")).await
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.rest.delete(&format!("{BASE}/{id}")).await
    }
}
