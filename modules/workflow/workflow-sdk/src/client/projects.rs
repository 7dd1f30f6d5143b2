use async_trait::async_trait;
use auraflow_sdk::{ApiError, Id, PagedResponse, RestClient};

use crate::api::ProjectsApi;
use crate::models::{CreateProjectRequest, Project, ProjectQuery, UpdateProjectRequest};

const BASE: &str = "/api/projects";

#[derive(Debug, Clone)]
pub struct ProjectsClient {
    rest: RestClient,
}

impl ProjectsClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl ProjectsApi for ProjectsClient {
    async fn list(&self, query: &ProjectQuery) -> Result<PagedResponse<Project>, ApiError> {
        self.rest.get_with(BASE, &query.to_query()).await
    }

    async fn get(&self, id: Id) -> Result<Project, ApiError> {
        self.rest.get(&format!("{BASE}/{id}")).await
    }

    async fn create(&self, request: &CreateProjectRequest) -> Result<Project, ApiError> {
        self.rest.post(BASE, request).await
    }

    async fn update(&self, id: Id, request: &UpdateProjectRequest) -> Result<Project, ApiError> {
        self.rest.put(&format!("{BASE}/{id}"), request).await
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.rest.delete(&format!("{BASE}/{id}")).await
    }
}
