use async_trait::async_trait;
use auraflow_sdk::{ApiError, Id, PagedResponse, RestClient};

use crate::api::DivisionsApi;
use crate::models::{CreateDivisionRequest, Division, DivisionQuery, UpdateDivisionRequest};

const BASE: &str = "/api/admin/divisions";

#[derive(Debug, Clone)]
pub struct DivisionsClient {
    rest: RestClient,
}

impl DivisionsClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl DivisionsApi for DivisionsClient {
    async fn list(&self, query: &DivisionQuery) -> Result<PagedResponse<Division>, ApiError> {
        self.rest.get_with(BASE, &query.to_query()).await
    }

    async fn create(&self, request: &CreateDivisionRequest) -> Result<Division, ApiError> {
        self.rest.post(BASE, request).await
    }

    async fn update(
        &self,
        id: Id,
        request: &UpdateDivisionRequest,
    ) -> Result<Division, ApiError> {
        self.rest.put(&format!("{BASE}/{id}"), request).await
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.rest.delete(&format!("{BASE}/{id}")).await
    }
}
