#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Mutation round-trips: request bodies, verbs and the refetch that follows.

use admin_sdk::{
    AdminClient, CreateDivisionRequest, DepartmentsApi, DivisionsApi, ProfileApi, RolesApi,
    TenantQuery, TenantRequest, TenantStatus, TenantUsersApi, TenantsApi, UpdateProfileRequest,
    UserRolesApi, UsersApi,
};
use auraflow_http::HttpClientBuilder;
use auraflow_sdk::{ApiError, Filter, RestClient, StatusCode};
use httpmock::prelude::*;
use serde_json::json;

fn admin(server: &MockServer) -> AdminClient {
    let http = HttpClientBuilder::new()
        .allow_insecure_http()
        .build()
        .expect("http client");
    AdminClient::new(RestClient::new(http, &server.base_url()).expect("rest client"))
}

fn tenant_json(id: i64, name: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "createdAt": "2025-03-01T09:30:00",
        "updatedAt": "2025-03-01T09:30:00",
    })
}

fn user_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "tenantId": 1,
        "email": format!("user{id}@example.com"),
        "firstName": "Ann",
        "lastName": "Lee",
        "roles": [{"id": 3, "name": "Staff", "level": 3, "description": null,
                   "createdAt": "2025-01-01T00:00:00", "updatedAt": "2025-01-01T00:00:00"}],
        "status": status,
        "createdAt": "2025-01-01T00:00:00",
        "updatedAt": "2025-01-01T00:00:00",
    })
}

#[tokio::test]
async fn created_tenant_is_found_by_name() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/tenants")
            .header("content-type", "application/json")
            .json_body(json!({"name": "Acme"}));
        then.status(201)
            .json_body(tenant_json(42, "Acme", "ACTIVE"));
    });
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/api/tenants")
            .query_param("name", "Acme");
        then.status(200).json_body(json!({
            "content": [tenant_json(42, "Acme", "ACTIVE")],
            "totalElements": 1,
            "totalPages": 1,
            "size": 10,
            "number": 0,
        }));
    });

    let tenants = admin(&server).tenants();
    let created = tenants.create(&TenantRequest::new("Acme")).await.unwrap();
    let page = tenants
        .list(&TenantQuery {
            name: Some("Acme".to_owned()),
            ..Default::default()
        })
        .await
        .unwrap();

    create.assert();
    list.assert();
    assert_eq!(page.content, vec![created.clone()]);
    assert_eq!(created.name, "Acme");
    assert_eq!(created.status, TenantStatus::Active);
}

#[tokio::test]
async fn tenant_deactivate_sends_name_and_status() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/tenants/7")
            .json_body(json!({"name": "Globex", "status": "INACTIVE"}));
        then.status(200)
            .json_body(tenant_json(7, "Globex", "INACTIVE"));
    });

    let tenants = admin(&server).tenants();
    let tenant = serde_json::from_value(tenant_json(7, "Globex", "ACTIVE")).unwrap();
    let updated = tenants.deactivate(&tenant).await.unwrap();

    mock.assert();
    assert_eq!(updated.status, TenantStatus::Inactive);
}

#[tokio::test]
async fn user_activation_has_no_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT).path("/api/users/9/activate").body("");
        then.status(200).json_body(user_json(9, "ACTIVE"));
    });

    let user = admin(&server).users().activate(9).await.unwrap();

    mock.assert();
    assert_eq!(user.roles.len(), 1);
    assert_eq!(user.display_name(), "Ann Lee");
}

#[tokio::test]
async fn tenant_user_invite_and_role_assignment() {
    let server = MockServer::start();
    let invite = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/users/invite")
            .json_body(json!({"email": "new@example.com"}));
        then.status(202)
            .json_body(json!({"message": "Invitation sent to new@example.com"}));
    });
    let assign = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/admin/users/9/roles")
            .json_body(json!({"roleIds": [3, 4]}));
        then.status(200).json_body(user_json(9, "ACTIVE"));
    });

    let tenant_users = admin(&server).tenant_users();
    let response = tenant_users.invite("new@example.com").await.unwrap();
    tenant_users.assign_roles(9, &[3, 4]).await.unwrap();

    invite.assert();
    assign.assert();
    assert_eq!(response.message, "Invitation sent to new@example.com");
}

#[tokio::test]
async fn user_role_assign_and_unassign() {
    let server = MockServer::start();
    let assign = server.mock(|when, then| {
        when.method(POST)
            .path("/api/user-roles/assign")
            .json_body(json!({"userId": 9, "roleIds": [3]}));
        then.status(200).json_body(user_json(9, "ACTIVE"));
    });
    let unassign = server.mock(|when, then| {
        when.method(DELETE).path("/api/user-roles/9/roles/3");
        then.status(200).json_body(user_json(9, "ACTIVE"));
    });

    let user_roles = admin(&server).user_roles();
    user_roles.assign(9, &[3]).await.unwrap();
    let user = user_roles.unassign(9, 3).await.unwrap();

    assign.assert();
    unassign.assert();
    assert_eq!(user.id, 9);
}

#[tokio::test]
async fn department_membership_calls() {
    let server = MockServer::start();
    let add = server.mock(|when, then| {
        when.method(PUT).path("/api/admin/departments/4/members/9");
        then.status(200);
    });
    let remove = server.mock(|when, then| {
        when.method(DELETE).path("/api/admin/departments/4/members/9");
        then.status(204);
    });

    let departments = admin(&server).departments();
    departments.assign_member(4, 9).await.unwrap();
    departments.remove_member(4, 9).await.unwrap();

    add.assert();
    remove.assert();
}

#[tokio::test]
async fn validation_error_carries_backend_message() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/admin/divisions");
        then.status(400).json_body(json!({
            "timestamp": "2025-03-01T09:30:00",
            "status": 400,
            "error": "Bad Request",
            "message": "Division name already exists",
            "path": "/api/admin/divisions",
        }));
    });

    let err = admin(&server)
        .divisions()
        .create(&CreateDivisionRequest {
            name: "North".to_owned(),
            description: None,
        })
        .await
        .unwrap_err();

    mock.assert_calls(1);
    match err {
        ApiError::Client { status, payload } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(payload.summary(), "Division name already exists");
        }
        other => panic!("expected client error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_role_is_not_found() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/api/roles/404");
        then.status(404);
    });

    let err = admin(&server).roles().get(404).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn profile_update_can_unassign_division() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/users/me")
            .json_body(json!({"title": "Lead", "divisionId": null}));
        then.status(200).json_body(json!({
            "id": 1,
            "tenantId": 1,
            "email": "ann@example.com",
            "title": "Lead",
            "division": null,
            "department": null,
            "roles": [],
            "status": "ACTIVE",
            "createdAt": "2025-01-01T00:00:00",
            "updatedAt": "2025-01-02T00:00:00",
        }));
    });

    let me = admin(&server)
        .profile()
        .update_me(&UpdateProfileRequest {
            title: Some("Lead".to_owned()),
            division_id: Filter::Empty,
            ..Default::default()
        })
        .await
        .unwrap();

    mock.assert();
    assert!(me.division.is_none());
}
