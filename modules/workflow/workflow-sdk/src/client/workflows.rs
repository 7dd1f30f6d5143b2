use async_trait::async_trait;
use auraflow_sdk::{ApiError, Id, PageRequest, PagedResponse, QueryString, RestClient};

use crate::api::WorkflowsApi;
use crate::models::{CreateWorkflowRequest, UpdateWorkflowRequest, Workflow, WorkflowDetail};

const BASE: &str = "/api/workflows";

#[derive(Debug, Clone)]
pub struct WorkflowsClient {
    rest: RestClient,
}

impl WorkflowsClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl WorkflowsApi for WorkflowsClient {
    async fn list(&self, page: PageRequest) -> Result<PagedResponse<Workflow>, ApiError> {
        self.rest.get_with(BASE, &QueryString::paged(page)).await
    }

    async fn get(&self, id: Id) -> Result<WorkflowDetail, ApiError> {
        self.rest.get(&format!("{BASE}/{id}")).await
    }

    async fn create(&self, request: &CreateWorkflowRequest) -> Result<WorkflowDetail, ApiError> {
        request.validate()?;
        self.rest.post(BASE, request).await
    }

    async fn update(
        &self,
        id: Id,
        request: &UpdateWorkflowRequest,
    ) -> Result<WorkflowDetail, ApiError> {
        request.validate()?;
        self.rest.put(&format!("{BASE}/{id}"), request).await
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.rest.delete(&format!("{BASE}/{id}")).await
    }
}
