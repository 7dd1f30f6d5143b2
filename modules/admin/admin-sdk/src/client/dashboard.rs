use async_trait::async_trait;
use auraflow_sdk::{ApiError, RestClient};

use crate::api::DashboardApi;
use crate::models::DashboardStats;

#[derive(Debug, Clone)]
pub struct DashboardClient {
    rest: RestClient,
}

impl DashboardClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl DashboardApi for DashboardClient {
    async fn stats(&self) -> Result<DashboardStats, ApiError> {
        self.rest.get("/api/dashboard/stats").await
    }
}
