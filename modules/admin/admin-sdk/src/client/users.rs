use async_trait::async_trait;
use auraflow_sdk::{ApiError, Id, PagedResponse, RestClient};

use crate::api::UsersApi;
use crate::models::{UpdateUserRequest, User, UserQuery};

const BASE: &str = "/api/users";

#[derive(Debug, Clone)]
pub struct UsersClient {
    rest: RestClient,
}

impl UsersClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl UsersApi for UsersClient {
    async fn list(&self, query: &UserQuery) -> Result<PagedResponse<User>, ApiError> {
        self.rest.get_with(BASE, &query.to_query()).await
    }

    async fn get(&self, id: Id) -> Result<User, ApiError> {
        self.rest.get(&format!("{BASE}/{id}")).await
    }

    async fn update(&self, id: Id, request: &UpdateUserRequest) -> Result<User, ApiError> {
        self.rest.put(&format!("{BASE}/{id}"), request).await
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
