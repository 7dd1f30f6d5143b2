#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Session lifecycle against a mock backend, including the global 401 hook.

use admin_sdk::{AdminClient, SessionContext, TenantQuery, TenantsApi};
use auraflow_http::{CookieJar, HttpClientBuilder};
use auraflow_sdk::{RedirectToLogin, RestClient};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;

const COOKIE: &str = "AURAFLOW_SESSION";

struct Harness {
    admin: AdminClient,
    jar: CookieJar,
    redirect: Arc<RedirectToLogin>,
}

fn harness(server: &MockServer) -> Harness {
    let jar = CookieJar::with_cookie(COOKIE, "abc123");
    let http = HttpClientBuilder::new()
        .allow_insecure_http()
        .session_cookies(jar.clone())
        .build()
        .expect("http client");
    let redirect = Arc::new(RedirectToLogin::new().with_cookie_jar(jar.clone()));
    let rest = RestClient::new(http, &server.base_url())
        .expect("rest client")
        .with_unauthorized_handler(redirect.clone());
    Harness {
        admin: AdminClient::new(rest),
        jar,
        redirect,
    }
}

fn me_json() -> serde_json::Value {
    json!({
        "id": 1,
        "tenantId": 1,
        "email": "ann@example.com",
        "division": {"id": 2, "name": "North", "description": null},
        "department": {"id": 5, "tenantId": 1, "name": "Support", "description": null},
        "roles": [
            {"id": 1, "name": "Tenant Admin", "level": 2, "description": null,
             "createdAt": "2025-01-01T00:00:00", "updatedAt": "2025-01-01T00:00:00"}
        ],
        "status": "ACTIVE",
        "createdAt": "2025-01-01T00:00:00",
        "updatedAt": "2025-01-01T00:00:00",
    })
}

#[tokio::test]
async fn load_sends_session_cookie() {
    let server = MockServer::start();
    let me = server.mock(|when, then| {
        when.method(GET)
            .path("/api/users/me")
            .header("cookie", "AURAFLOW_SESSION=abc123");
        then.status(200).json_body(me_json());
    });

    let h = harness(&server);
    let ctx = SessionContext::new();
    let user = ctx.load(&h.admin.profile()).await.unwrap();

    me.assert();
    assert_eq!(user.department.as_ref().unwrap().name, "Support");
    assert_eq!(ctx.role_level(), Some(2));
    assert!(ctx.has_role_level(2));
    assert!(!ctx.has_role_level(1));
}

#[tokio::test]
async fn any_401_redirects_to_login_and_drops_cookie() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(GET).path("/api/tenants");
        then.status(401).json_body(json!({"status": 401, "error": "Unauthorized"}));
    });

    let h = harness(&server);
    let err = h
        .admin
        .tenants()
        .list(&TenantQuery::default())
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(
        h.redirect.take_redirect().unwrap().as_str(),
        server.url("/login")
    );
    assert!(h.jar.get(COOKIE).is_none());
}

#[tokio::test]
async fn logout_clears_context() {
    let server = MockServer::start();
    let _me = server.mock(|when, then| {
        when.method(GET).path("/api/users/me");
        then.status(200).json_body(me_json());
    });
    let logout = server.mock(|when, then| {
        when.method(POST).path("/api/auth/logout");
        then.status(200);
    });

    let h = harness(&server);
    let profile = h.admin.profile();
    let ctx = SessionContext::new();
    ctx.load(&profile).await.unwrap();
    ctx.logout(&profile).await.unwrap();

    logout.assert();
    assert!(!ctx.is_loaded());
}
