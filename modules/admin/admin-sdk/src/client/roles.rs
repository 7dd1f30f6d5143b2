use async_trait::async_trait;
use auraflow_sdk::{ApiError, Id, PagedResponse, RestClient};

use crate::api::RolesApi;
use crate::models::{Role, RoleQuery, RoleRequest};

const BASE: &str = "/api/roles";

#[derive(Debug, Clone)]
pub struct RolesClient {
    rest: RestClient,
}

impl RolesClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl RolesApi for RolesClient {
    async fn list(&self, query: &RoleQuery) -> Result<PagedResponse<Role>, ApiError> {
        self.rest.get_with(BASE, &query.to_query()).await
    }

    async fn get(&self, id: Id) -> Result<Role, ApiError> {
        self.rest.get(&format!("{BASE}/{id}")).await
    }

    async fn create(&self, request: &RoleRequest) -> Result<Role, ApiError> {
        self.rest.post(BASE, request).await
    }

    async fn update(&self, id: Id, request: &RoleRequest) -> Result<Role, ApiError> {
        self.rest.put(&format!("{BASE}/{id}"), request).await
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.rest.delete(&format!("{BASE}/{id}")).await
    }
}
