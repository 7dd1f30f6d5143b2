use async_trait::async_trait;
use auraflow_sdk::{ApiError, RestClient};

use crate::api::ProfileApi;
use crate::models::{CurrentUser, DepartmentRef, DivisionRef, UpdateProfileRequest};

const ME: &str = "/api/users/me";

#[derive(Debug, Clone)]
pub struct ProfileClient {
    rest: RestClient,
}

impl ProfileClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl ProfileApi for ProfileClient {
    async fn me(&self) -> Result<CurrentUser, ApiError> {
        self.rest.get(ME).await
    }

    async fn update_me(&self, request: &UpdateProfileRequest) -> Result<CurrentUser, ApiError> {
        self.rest.put(ME, request).await
    }

    async fn divisions(&self) -> Result<Vec<DivisionRef>, ApiError> {
        self.rest.get("/api/divisions").await
    }

    async fn departments(&self) -> Result<Vec<DepartmentRef>, ApiError> {
        self.rest.get("/api/departments").await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.rest.post_empty("/api/auth/logout").await
    }
}
