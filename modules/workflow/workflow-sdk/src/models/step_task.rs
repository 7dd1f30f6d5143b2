use auraflow_sdk::{Id, Timestamp};
use serde::{Deserialize, Serialize};

use super::task::TaskPriority;

auraflow_sdk::wire_enum! {
    pub enum StepTaskStatus {
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Skipped => "SKIPPED",
        Cancelled => "CANCELLED",
    }
}

/// One step of a task, assigned to one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTask {
    pub id: Id,
    pub task_id: Id,
    pub workflow_step_id: Id,
    #[serde(default)]
    pub workflow_step_name: Option<String>,
    #[serde(default)]
    pub step_sequence: Option<i32>,
    pub status: StepTaskStatus,
    #[serde(default)]
    pub assigned_user_id: Option<Id>,
    #[serde(default)]
    pub assigned_user_name: Option<String>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub begin_date: Option<Timestamp>,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
    #[serde(default)]
    pub note: Option<String>,
}

impl StepTask {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == StepTaskStatus::InProgress
    }
}

/// Recorded execution of a transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTaskAction {
    pub id: Id,
    pub task_id: Id,
    #[serde(default)]
    pub step_task_id: Option<Id>,
    #[serde(default)]
    pub from_step_id: Option<Id>,
    #[serde(default)]
    pub from_step_name: Option<String>,
    #[serde(default)]
    pub to_step_id: Option<Id>,
    #[serde(default)]
    pub to_step_name: Option<String>,
    pub action_name: String,
    #[serde(default)]
    pub actor_id: Option<Id>,
    #[serde(default)]
    pub actor_name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTaskData {
    pub id: Id,
    #[serde(default)]
    pub data_body: Option<String>,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub created_by_id: Option<Id>,
    #[serde(default)]
    pub created_by_name: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTaskFile {
    pub id: Id,
    pub file_name: String,
    #[serde(default)]
    pub object_name: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub uploaded_by_id: Option<Id>,
    #[serde(default)]
    pub uploaded_by_name: Option<String>,
    pub created_at: Timestamp,
}

/// Step task with what was attached to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTaskDetail {
    pub step_task: StepTask,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub data: Vec<StepTaskData>,
    #[serde(default)]
    pub files: Vec<StepTaskFile>,
}

/// Move the task along the transition named `action_name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteActionRequest {
    pub action_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ExecuteActionRequest {
    #[must_use]
    pub fn new(action_name: impl Into<String>) -> Self {
        Self {
            action_name: action_name.into(),
            comment: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
