//! Public API traits of the work-management endpoints.
//!
//! # Errors
//!
//! Every method fails with [`ApiError`] as described in
//! [`auraflow_sdk::error`]. Workflow create/update additionally fail with
//! `ApiError::InvalidRequest`, without a request being sent, when the
//! definition breaks a [`DefinitionError`](crate::DefinitionError) rule.

use async_trait::async_trait;
use auraflow_sdk::{ApiError, Id, PageRequest, PagedResponse};

use crate::models::{
    CreateProjectRequest, CreateTaskRequest, CreateWorkflowRequest, ExecuteActionRequest, Project,
    ProjectQuery, StepTask, StepTaskAction, StepTaskDetail, Task, TaskQuery, UpdateProjectRequest,
    UpdateTaskRequest, UpdateWorkflowRequest, Workflow, WorkflowDetail,
};

/// Projects (`/api/projects`)
#[async_trait]
pub trait ProjectsApi: Send + Sync {
    /// # Errors
    /// See the [module docs](self).
    async fn list(&self, query: &ProjectQuery) -> Result<PagedResponse<Project>, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn get(&self, id: Id) -> Result<Project, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn create(&self, request: &CreateProjectRequest) -> Result<Project, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn update(&self, id: Id, request: &UpdateProjectRequest) -> Result<Project, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn delete(&self, id: Id) -> Result<(), ApiError>;
}

/// Tasks (`/api/tasks`)
#[async_trait]
pub trait TasksApi: Send + Sync {
    /// # Errors
    /// See the [module docs](self).
    async fn list(&self, query: &TaskQuery) -> Result<PagedResponse<Task>, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn get(&self, id: Id) -> Result<Task, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn create(&self, request: &CreateTaskRequest) -> Result<Task, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn update(&self, id: Id, request: &UpdateTaskRequest) -> Result<Task, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn delete(&self, id: Id) -> Result<(), ApiError>;
}

/// Workflow definitions (`/api/workflows`)
#[async_trait]
pub trait WorkflowsApi: Send + Sync {
    /// # Errors
    /// See the [module docs](self).
    async fn list(&self, page: PageRequest) -> Result<PagedResponse<Workflow>, ApiError>;

    /// Workflow with steps and transitions
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn get(&self, id: Id) -> Result<WorkflowDetail, ApiError>;

    /// # Errors
    /// `InvalidRequest` for a broken definition, see the [module docs](self).
    async fn create(&self, request: &CreateWorkflowRequest) -> Result<WorkflowDetail, ApiError>;

    /// # Errors
    /// `InvalidRequest` for a broken definition; `Client` while tasks still
    /// use the workflow.
    async fn update(
        &self,
        id: Id,
        request: &UpdateWorkflowRequest,
    ) -> Result<WorkflowDetail, ApiError>;

    /// # Errors
    /// `Client` while tasks still use the workflow.
    async fn delete(&self, id: Id) -> Result<(), ApiError>;
}

/// Step-task assignment and execution (`/api/step-tasks`)
#[async_trait]
pub trait StepTasksApi: Send + Sync {
    /// Every step task of a task, in step order
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn for_task(&self, task_id: Id) -> Result<Vec<StepTask>, ApiError>;

    /// Open step task of a task, `None` once the task is finished
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn current(&self, task_id: Id) -> Result<Option<StepTask>, ApiError>;

    /// Whether the caller is assigned to the task's current step
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn is_assignee(&self, task_id: Id) -> Result<bool, ApiError>;

    /// Actions already executed on a task
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn actions(&self, task_id: Id) -> Result<Vec<StepTaskAction>, ApiError>;

    /// Execute a transition on the task's current step
    ///
    /// # Errors
    /// `Client` when the caller is not the assignee or the action does not
    /// exist for the current step.
    async fn execute_action(
        &self,
        task_id: Id,
        request: &ExecuteActionRequest,
    ) -> Result<Task, ApiError>;

    /// Step tasks assigned to the caller
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn my_assigned(&self) -> Result<Vec<StepTask>, ApiError>;

    /// Step tasks assigned to the caller, as shown in the workspace view
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn my_assigned_workspace(&self) -> Result<Vec<StepTask>, ApiError>;

    /// Latest actions taken by the caller
    ///
    /// # Errors
    /// See the [module docs](self).
    async fn my_recent_activity(&self) -> Result<Vec<StepTaskAction>, ApiError>;

    /// # Errors
    /// See the [module docs](self).
    async fn detail(&self, step_task_id: Id) -> Result<StepTaskDetail, ApiError>;
}
