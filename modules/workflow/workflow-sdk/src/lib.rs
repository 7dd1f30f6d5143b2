#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Workflow SDK
//!
//! Typed clients for projects, tasks, workflow definitions and the step
//! tasks a running workflow assigns to users:
//!
//! - [`api`] - [`ProjectsApi`], [`TasksApi`], [`WorkflowsApi`], [`StepTasksApi`]
//! - [`client`] - their HTTP implementations and the [`WorkflowClient`] entry point
//! - [`models`] - request/response bodies and list query structs
//! - [`DefinitionError`] - local checks on workflow definitions

pub mod api;
pub mod client;
pub mod error;
pub mod models;

pub use api::{ProjectsApi, StepTasksApi, TasksApi, WorkflowsApi};
pub use client::{ProjectsClient, StepTasksClient, TasksClient, WorkflowClient, WorkflowsClient};
pub use error::DefinitionError;
pub use models::{
    CreateProjectRequest, CreateTaskRequest, CreateWorkflowRequest, ExecuteActionRequest, Project,
    ProjectQuery, ProjectStatus, StepDefinition, StepTask, StepTaskAction, StepTaskDetail,
    StepTaskStatus, Task, TaskPriority, TaskQuery, TaskStatus, TransitionDefinition,
    UpdateProjectRequest, UpdateTaskRequest, UpdateWorkflowRequest, Workflow, WorkflowDetail,
    WorkflowStepType,
};
