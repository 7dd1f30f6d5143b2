//! HTTP implementations of the [`api`](crate::api) traits.

mod projects;
mod step_tasks;
mod tasks;
mod workflows;

pub use projects::ProjectsClient;
pub use step_tasks::StepTasksClient;
pub use tasks::TasksClient;
pub use workflows::WorkflowsClient;

use auraflow_sdk::RestClient;

/// Entry point handing out the work-management clients over one
/// [`RestClient`]
#[derive(Debug, Clone)]
pub struct WorkflowClient {
    rest: RestClient,
}

impl WorkflowClient {
    #[must_use]
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    #[must_use]
    pub fn projects(&self) -> ProjectsClient {
        ProjectsClient::new(self.rest.clone())
    }

    #[must_use]
    pub fn tasks(&self) -> TasksClient {
        TasksClient::new(self.rest.clone())
    }

    #[must_use]
    pub fn workflows(&self) -> WorkflowsClient {
        WorkflowsClient::new(self.rest.clone())
    }

    #[must_use]
    pub fn step_tasks(&self) -> StepTasksClient {
        StepTasksClient::new(self.rest.clone())
    }
}
