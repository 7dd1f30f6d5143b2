use async_trait::async_trait;
use auraflow_sdk::{ApiError, Id, RestClient};

use crate::api::StepTasksApi;
use crate::models::{ExecuteActionRequest, StepTask, StepTaskAction, StepTaskDetail, Task};

const BASE: &str = "/api/step-tasks";

#[derive(Debug, Clone)]
pub struct StepTasksClient {
    rest: RestClient,
}

impl StepTasksClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl StepTasksApi for StepTasksClient {
    async fn for_task(&self, task_id: Id) -> Result<Vec<StepTask>, ApiError> {
        self.rest.get(&format!("{BASE}/task/{task_id}")).await
    }

    async fn current(&self, task_id: Id) -> Result<Option<StepTask>, ApiError> {
        self.rest
            .get_optional(&format!("{BASE}/task/{task_id}/current"))
            .await
    }

    async fn is_assignee(&self, task_id: Id) -> Result<bool, ApiError> {
        self.rest
            .get(&format!("{BASE}/task/{task_id}/is-assignee"))
            .await
    }

    async fn actions(&self, task_id: Id) -> Result<Vec<StepTaskAction>, ApiError> {
        self.rest.get(&format!("{BASE}/task/{task_id}/actions")).await
    }

    async fn execute_action(
        &self,
        task_id: Id,
        request: &ExecuteActionRequest,
    ) -> Result<Task, ApiError> {
        self.rest
            .post(&format!("{BASE}/task/{task_id}/execute-action"), request)
            .await
    }

    async fn my_assigned(&self) -> Result<Vec<StepTask>, ApiError> {
        self.rest.get(&format!("{BASE}/my-assigned")).await
    }

    async fn my_assigned_workspace(&self) -> Result<Vec<StepTask>, ApiError> {
        self.rest.get(&format!("{BASE}/my-assigned-workspace")).await
    }

    async fn my_recent_activity(&self) -> Result<Vec<StepTaskAction>, ApiError> {
        self.rest.get(&format!("{BASE}/my-recent-activity")).await
    }

    async fn detail(&self, step_task_id: Id) -> Result<StepTaskDetail, ApiError> {
        self.rest.get(&format!("{BASE}/{step_task_id}/detail")).await
    }
}
