use async_trait::async_trait;
use auraflow_sdk::{ApiError, Id, PagedResponse, RestClient};

use crate::api::DepartmentsApi;
use crate::models::{
    CreateDepartmentRequest, Department, DepartmentQuery, MemberQuery, UpdateDepartmentRequest,
    User,
};

const BASE: &str = "/api/admin/departments";

#[derive(Debug, Clone)]
pub struct DepartmentsClient {
    rest: RestClient,
}

impl DepartmentsClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl DepartmentsApi for DepartmentsClient {
    async fn list(&self, query: &DepartmentQuery) -> Result<PagedResponse<Department>, ApiError> {
        self.rest.get_with(BASE, &query.to_query()).await
    }

    async fn get(&self, id: Id) -> Result<Department, ApiError> {
        self.rest.get(&format!("{BASE}/{id}")).await
    }

    async fn create(&self, request: &CreateDepartmentRequest) -> Result<Department, ApiError> {
        self.rest.post(BASE, request).await
    }

    async fn update(
        &self,
        id: Id,
        request: &UpdateDepartmentRequest,
    ) -> Result<Department, ApiError> {
        self.rest.put(&format!("{BASE}/{id}"), request).await
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.rest.delete(&format!("{BASE}/{id}")).await
    }

    async fn members(
        &self,
        id: Id,
        query: &MemberQuery,
    ) -> Result<PagedResponse<User>, ApiError> {
        self.rest
            .get_with(&format!("{BASE}/{id}/members"), &query.to_query())
            .await
    }

    async fn assign_member(&self, id: Id, user_id: Id) -> Result<(), ApiError> {
        self.rest
            .put_unit(&format!("{BASE}/{id}/members/{user_id}"))
            .await
    }

    async fn remove_member(&self, id: Id, user_id: Id) -> Result<(), ApiError> {
        self.rest
            .delete(&format!("{BASE}/{id}/members/{user_id}"))
            .await
    }

    async fn available_users(
        &self,
        id: Id,
        query: &MemberQuery,
    ) -> Result<PagedResponse<User>, ApiError> {
        self.rest
            .get_with(&format!("{BASE}/{id}/available-users"), &query.to_query())
            .await
    }
}
