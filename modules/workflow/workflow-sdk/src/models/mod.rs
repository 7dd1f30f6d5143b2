//! Request and response models of the work-management endpoints.

mod project;
mod step_task;
mod task;
mod workflow;

pub use project::{
    CreateProjectRequest, Project, ProjectQuery, ProjectStatus, UpdateProjectRequest,
};
pub use step_task::{
    ExecuteActionRequest, StepTask, StepTaskAction, StepTaskData, StepTaskDetail, StepTaskFile,
    StepTaskStatus,
};
pub use task::{
    CreateTaskRequest, TASK_PAGE_SIZE, Task, TaskPriority, TaskQuery, TaskStatus,
    UpdateTaskRequest,
};
pub use workflow::{
    CreateWorkflowRequest, StepDefinition, TransitionDefinition, UpdateWorkflowRequest, Workflow,
    WorkflowDetail, WorkflowStep, WorkflowStepType, WorkflowTransition,
};
