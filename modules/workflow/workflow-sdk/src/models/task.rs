use auraflow_sdk::{Id, PageRequest, QueryString, StatusFilter, Timestamp};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Default page size of task listings
pub const TASK_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(20) {
    Some(size) => size,
    None => panic!("page size must be non-zero"),
};

auraflow_sdk::wire_enum! {
    pub enum TaskStatus {
        Pending => "PENDING",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
    }
}

auraflow_sdk::wire_enum! {
    /// Priority of tasks and of the step tasks they spawn
    pub enum TaskPriority {
        Low => "LOW",
        Normal => "NORMAL",
        High => "HIGH",
    }
}

/// A request moving through the steps of a workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Id,
    #[serde(default)]
    pub project_id: Option<Id>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub workflow_id: Option<Id>,
    #[serde(default)]
    pub workflow_name: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub current_step_id: Option<Id>,
    #[serde(default)]
    pub current_step_name: Option<String>,
    #[serde(default)]
    pub creator_id: Option<Id>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub begin_date: Option<Timestamp>,
    #[serde(default)]
    pub end_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Task {
    /// Completed and cancelled tasks accept no further actions
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status, TaskStatus::Completed | TaskStatus::Cancelled)
    }
}

/// New task; the backend starts it at the workflow's START step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub project_id: Id,
    pub workflow_id: Id,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
}

/// Filters of the task listing; pages hold [`TASK_PAGE_SIZE`] tasks by default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    pub page: PageRequest,
    /// `Some(0)` is sent as no filter
    pub project_id: Option<Id>,
    pub title: Option<String>,
    pub status: StatusFilter<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl Default for TaskQuery {
    fn default() -> Self {
        Self {
            page: PageRequest::first(TASK_PAGE_SIZE),
            project_id: None,
            title: None,
            status: StatusFilter::All,
            priority: None,
        }
    }
}

impl TaskQuery {
    #[must_use]
    pub fn to_query(&self) -> QueryString {
        QueryString::paged(self.page)
            .value("projectId", self.project_id.filter(|&id| id != 0))
            .text("title", self.title.as_deref())
            .status("status", &self.status)
            .value("priority", self.priority)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_size_is_twenty() {
        assert_eq!(TaskQuery::default().to_query().encode().unwrap(), "page=0&size=20");
    }

    #[test]
    fn test_filters() {
        let query = TaskQuery {
            project_id: Some(4),
            title: Some("Expense report".to_owned()),
            status: TaskStatus::InProgress.into(),
            priority: Some(TaskPriority::High),
            ..Default::default()
        };
        assert_eq!(
            query.to_query().encode().unwrap(),
            "page=0&size=20&projectId=4&title=Expense+report&status=IN_PROGRESS&priority=HIGH"
        );
    }

    #[test]
    fn test_zero_project_is_unfiltered() {
        let query = TaskQuery {
            project_id: Some(0),
            priority: Some(TaskPriority::Low),
            ..Default::default()
        };
        assert_eq!(
            query.to_query().encode().unwrap(),
            "page=0&size=20&priority=LOW"
        );
    }

    #[test]
    fn test_task_with_nulls() {
        let task: Task = serde_json::from_value(serde_json::json!({
            "id": 11,
            "projectId": null,
            "projectName": null,
            "workflowId": 2,
            "workflowName": "Approval",
            "title": "Laptop",
            "description": null,
            "status": "COMPLETED",
            "priority": null,
            "currentStepId": null,
            "currentStepName": null,
            "creatorId": 1,
            "creatorName": "Ann Lee",
            "beginDate": null,
            "endDate": null,
            "createdAt": "2025-03-01T00:00:00Z",
            "updatedAt": "2025-03-02T00:00:00Z",
        }))
        .unwrap();
        assert!(task.is_finished());
        assert_eq!(task.priority, None);
    }
}
