use async_trait::async_trait;
use auraflow_sdk::{ApiError, Id, PagedResponse, RestClient};

use crate::api::TasksApi;
use crate::models::{CreateTaskRequest, Task, TaskQuery, UpdateTaskRequest};

const BASE: &str = "/api/tasks";

#[derive(Debug, Clone)]
pub struct TasksClient {
    rest: RestClient,
}

impl TasksClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl TasksApi for TasksClient {
    async fn list(&self, query: &TaskQuery) -> Result<PagedResponse<Task>, ApiError> {
        self.rest.get_with(BASE, &query.to_query()).await
    }

    async fn get(&self, id: Id) -> Result<Task, ApiError> {
        self.rest.get(&format!("{BASE}/{id}")).await
    }

    async fn create(&self, request: &CreateTaskRequest) -> Result<Task, ApiError> {
        self.rest.post(BASE, request).await
    }

    async fn update(&self, id: Id, request: &UpdateTaskRequest) -> Result<Task, ApiError> {
        self.rest.put(&format!("{BASE}/{id}"), request).await
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.rest.delete(&format!("{BASE}/{id}")).await
    }
}
