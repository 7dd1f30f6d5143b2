use async_trait::async_trait;
use auraflow_sdk::{ApiError, Id, PagedResponse, RestClient};

use crate::api::TenantsApi;
use crate::models::{Tenant, TenantQuery, TenantRequest, TenantStatus};

const BASE: &str = "/api/tenants";

#[derive(Debug, Clone)]
pub struct TenantsClient {
    rest: RestClient,
}

impl TenantsClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl TenantsApi for TenantsClient {
    async fn list(&self, query: &TenantQuery) -> Result<PagedResponse<Tenant>, ApiError> {
        self.rest.get_with(BASE, &query.to_query()).await
    }

    async fn get(&self, id: Id) -> Result<Tenant, ApiError> {
        self.rest.get(&format!("{BASE}/{id}")).await
    }

    async fn create(&self, request: &TenantRequest) -> Result<Tenant, ApiError> {
        self.rest.post(BASE, request).await
    }

    async fn update(&self, id: Id, request: &TenantRequest) -> Result<Tenant, ApiError> {
        self.rest.put(&format!("{BASE}/{id}"), request).await
    }

    async fn activate(&self, tenant: &Tenant) -> Result<Tenant, ApiError> {
        let request = TenantRequest::status_change(tenant, TenantStatus::Active);
        self.update(tenant.id, &request).await
    }

    async fn deactivate(&self, tenant: &Tenant) -> Result<Tenant, ApiError> {
        let request = TenantRequest::status_change(tenant, TenantStatus::Inactive);
        self.update(tenant.id, &request).await
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.rest.delete(&format!("{BASE}/{id}")).await
    }
}
