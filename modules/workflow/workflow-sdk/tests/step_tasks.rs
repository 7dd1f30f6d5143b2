#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Step-task assignment flow against a mock backend.

use auraflow_http::HttpClientBuilder;
use auraflow_sdk::RestClient;
use httpmock::prelude::*;
use serde_json::json;
use workflow_sdk::{ExecuteActionRequest, StepTaskStatus, StepTasksApi, TaskStatus, WorkflowClient};

fn client(server: &MockServer) -> WorkflowClient {
    let http = HttpClientBuilder::new()
        .allow_insecure_http()
        .build()
        .expect("http client");
    WorkflowClient::new(RestClient::new(http, &server.base_url()).expect("rest client"))
}

fn step_task_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "taskId": 11,
        "workflowStepId": 20 + id,
        "workflowStepName": "Manager review",
        "stepSequence": 2,
        "status": status,
        "assignedUserId": 3,
        "assignedUserName": "Bob",
        "priority": "HIGH",
        "beginDate": "2025-03-01T09:30:00Z",
        "endDate": null,
        "note": null,
    })
}

fn task_json(status: &str) -> serde_json::Value {
    json!({
        "id": 11,
        "projectId": 4,
        "projectName": "Procurement",
        "workflowId": 2,
        "workflowName": "Approval",
        "title": "New laptop",
        "description": null,
        "status": status,
        "priority": "HIGH",
        "currentStepId": null,
        "currentStepName": null,
        "creatorId": 1,
        "creatorName": "Ann Lee",
        "beginDate": null,
        "endDate": null,
        "createdAt": "2025-03-01T09:00:00Z",
        "updatedAt": "2025-03-02T09:00:00Z",
    })
}

#[tokio::test]
async fn assignee_executes_current_step() {
    let server = MockServer::start();
    let current = server.mock(|when, then| {
        when.method(GET).path("/api/step-tasks/task/11/current");
        then.status(200).json_body(step_task_json(5, "IN_PROGRESS"));
    });
    let is_assignee = server.mock(|when, then| {
        when.method(GET).path("/api/step-tasks/task/11/is-assignee");
        then.status(200).body("true");
    });
    let execute = server.mock(|when, then| {
        when.method(POST)
            .path("/api/step-tasks/task/11/execute-action")
            .json_body(json!({"actionName": "approve", "comment": "ok"}));
        then.status(200).json_body(task_json("COMPLETED"));
    });

    let step_tasks = client(&server).step_tasks();
    let open = step_tasks.current(11).await.unwrap().unwrap();
    assert!(open.is_open());
    assert!(step_tasks.is_assignee(11).await.unwrap());
    let task = step_tasks
        .execute_action(11, &ExecuteActionRequest::new("approve").with_comment("ok"))
        .await
        .unwrap();

    current.assert();
    is_assignee.assert();
    execute.assert();
    assert_eq!(task.status, TaskStatus::Completed);
}

#[tokio::test]
async fn finished_task_has_no_current_step() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/api/step-tasks/task/11/current");
        then.status(200);
    });

    let current = client(&server).step_tasks().current(11).await.unwrap();
    assert!(current.is_none());
}

#[tokio::test]
async fn my_assignments_and_activity() {
    let server = MockServer::start();
    let _assigned = server.mock(|when, then| {
        when.method(GET).path("/api/step-tasks/my-assigned");
        then.status(200).json_body(json!([
            step_task_json(5, "IN_PROGRESS"),
            step_task_json(6, "COMPLETED"),
        ]));
    });
    let _activity = server.mock(|when, then| {
        when.method(GET).path("/api/step-tasks/my-recent-activity");
        then.status(200).json_body(json!([{
            "id": 1,
            "taskId": 11,
            "stepTaskId": 5,
            "fromStepId": 21,
            "fromStepName": "Submit",
            "toStepId": 22,
            "toStepName": "Manager review",
            "actionName": "submit",
            "actorId": 1,
            "actorName": "Ann Lee",
            "comment": null,
            "createdAt": "2025-03-01T09:30:00Z",
        }]));
    });

    let step_tasks = client(&server).step_tasks();
    let assigned = step_tasks.my_assigned().await.unwrap();
    let activity = step_tasks.my_recent_activity().await.unwrap();

    let statuses: Vec<_> = assigned.iter().map(|s| s.status).collect();
    assert_eq!(statuses, vec![StepTaskStatus::InProgress, StepTaskStatus::Completed]);
    assert_eq!(activity[0].to_step_name.as_deref(), Some("Manager review"));
}

#[tokio::test]
async fn step_task_detail() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/api/step-tasks/5/detail");
        then.status(200).json_body(json!({
            "stepTask": step_task_json(5, "COMPLETED"),
            "comment": "approved",
            "data": [{
                "id": 1,
                "dataBody": "{\"amount\": 1200}",
                "dataType": "FORM",
                "createdById": 3,
                "createdByName": "Bob",
                "createdAt": "2025-03-01T10:00:00Z",
            }],
            "files": [{
                "id": 2,
                "fileName": "quote.pdf",
                "objectName": "tenant-1/quote.pdf",
                "fileSize": 48213,
                "uploadedById": 3,
                "uploadedByName": "Bob",
                "createdAt": "2025-03-01T10:00:00Z",
            }],
        }));
    });

    let detail = client(&server).step_tasks().detail(5).await.unwrap();
    assert_eq!(detail.comment.as_deref(), Some("approved"));
    assert_eq!(detail.files[0].file_size, Some(48_213));
    assert_eq!(detail.data.len(), 1);
}
