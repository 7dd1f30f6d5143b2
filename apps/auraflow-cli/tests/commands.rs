#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Runs the auraflow binary against a mock backend and checks the requests it
//! sends and the JSON it prints.

use httpmock::prelude::*;
use serde_json::{Value, json};
use std::process::{Command, Output};

fn run_against(server: &MockServer, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_auraflow"))
        .arg("--base-url")
        .arg(server.base_url())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute auraflow")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn empty_page(size: u32) -> Value {
    json!({"content": [], "totalElements": 0, "totalPages": 0, "size": size, "number": 0})
}

fn tenant(id: i64, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "createdAt": "2025-01-01T00:00:00",
        "updatedAt": "2025-01-01T00:00:00",
    })
}

#[test]
fn me_sends_session_cookie() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/users/me")
            .header("cookie", "AURAFLOW_SESSION=abc123");
        then.status(200).json_body(json!({
            "id": 1,
            "tenantId": 1,
            "email": "admin@auraflow.io",
            "roles": [],
            "status": "ACTIVE",
            "createdAt": "2025-01-01T00:00:00",
            "updatedAt": "2025-01-01T00:00:00",
        }));
    });

    let output = run_against(&server, &["--session-cookie", "abc123", "me"]);

    mock.assert();
    assert_eq!(stdout_json(&output)["email"], "admin@auraflow.io");
}

#[test]
fn tenants_list_omits_all_status() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/tenants")
            .query_param("page", "0")
            .query_param("size", "10")
            .query_param_missing("status")
            .query_param_missing("name");
        then.status(200).json_body(empty_page(10));
    });

    let output = run_against(&server, &["tenants", "list", "--status", "all"]);

    mock.assert();
    assert_eq!(stdout_json(&output)["totalElements"], 0);
}

#[test]
fn tenants_list_all_walks_pages() {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET)
            .path("/api/tenants")
            .query_param("page", "0")
            .query_param("status", "ACTIVE");
        then.status(200).json_body(json!({
            "content": [tenant(1, "Acme", "ACTIVE"), tenant(2, "Globex", "ACTIVE")],
            "totalElements": 3, "totalPages": 2, "size": 2, "number": 0,
        }));
    });
    let second = server.mock(|when, then| {
        when.method(GET)
            .path("/api/tenants")
            .query_param("page", "1")
            .query_param("status", "ACTIVE");
        then.status(200).json_body(json!({
            "content": [tenant(3, "Initech", "ACTIVE")],
            "totalElements": 3, "totalPages": 2, "size": 2, "number": 1,
        }));
    });

    let output = run_against(
        &server,
        &["tenants", "list", "--status", "active", "--size", "2", "--all"],
    );

    first.assert();
    second.assert();
    let names: Vec<_> = stdout_json(&output)
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(names, ["Acme", "Globex", "Initech"]);
}

#[test]
fn tenant_deactivate_puts_full_body() {
    let server = MockServer::start();
    let _get = server.mock(|when, then| {
        when.method(GET).path("/api/tenants/7");
        then.status(200).json_body(tenant(7, "Acme", "ACTIVE"));
    });
    let put = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/tenants/7")
            .json_body(json!({"name": "Acme", "status": "INACTIVE"}));
        then.status(200).json_body(tenant(7, "Acme", "INACTIVE"));
    });

    let output = run_against(&server, &["tenants", "deactivate", "7"]);

    put.assert();
    assert_eq!(stdout_json(&output)["status"], "INACTIVE");
}

#[test]
fn users_list_division_none_sends_null() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/users")
            .query_param("divisionId", "null")
            .query_param("departmentId", "0")
            .query_param_missing("status");
        then.status(200).json_body(empty_page(10));
    });

    let output = run_against(
        &server,
        &["users", "list", "--division-id", "none", "--department-id", "0"],
    );

    mock.assert();
    stdout_json(&output);
}

#[test]
fn tasks_list_uses_task_page_size() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/tasks")
            .query_param("size", "20")
            .query_param("priority", "HIGH");
        then.status(200).json_body(empty_page(20));
    });

    let output = run_against(&server, &["tasks", "list", "--priority", "high"]);

    mock.assert();
    assert_eq!(stdout_json(&output)["size"], 20);
}

#[test]
fn unauthorized_prints_login_url() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/api/dashboard/stats");
        then.status(401)
            .json_body(json!({"status": 401, "error": "Unauthorized"}));
    });

    let output = run_against(&server, &["dashboard"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&server.url("/login")),
        "Should point at the login page: {stderr}"
    );
}

#[test]
fn rejected_request_reports_backend_message() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(POST).path("/api/tenants");
        then.status(400)
            .json_body(json!({"status": 400, "message": "Tenant name already exists"}));
    });

    let output = run_against(&server, &["tenants", "create", "Acme"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Tenant name already exists"), "{stderr}");
}
