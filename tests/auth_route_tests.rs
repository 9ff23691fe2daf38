mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{TEST_USERNAME, TestApp};

#[tokio::test]
async fn login_with_configured_credentials_returns_token() {
    let app = TestApp::spawn("auth-login-ok").await;

    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({
                "username": TEST_USERNAME,
                "password": common::TEST_PASSWORD,
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["admin"]["username"], TEST_USERNAME);
    assert_eq!(body["admin"]["role"], "admin");
    let token = body["token"].as_str().expect("token missing");
    assert_eq!(token.len(), 64);
    assert!(body["expiresAt"].as_i64().expect("expiresAt missing") > 0);
}

#[tokio::test]
async fn login_with_wrong_credentials_is_rejected() {
    let app = TestApp::spawn("auth-login-wrong").await;

    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "username": TEST_USERNAME, "password": "nope" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn login_with_missing_fields_is_rejected() {
    let app = TestApp::spawn("auth-login-missing").await;

    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "username": TEST_USERNAME })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Username and password are required");
}

#[tokio::test]
async fn verify_reports_admin_identity() {
    let app = TestApp::spawn("auth-verify-ok").await;
    let token = app.login().await;

    let (status, body) = app
        .request("POST", "/api/auth/verify", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["admin"]["username"], TEST_USERNAME);
}

#[tokio::test]
async fn verify_rejects_unknown_token() {
    let app = TestApp::spawn("auth-verify-unknown").await;

    let (status, body) = app
        .request("POST", "/api/auth/verify", Some("not-a-real-token"), None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn verify_rejects_missing_token() {
    let app = TestApp::spawn("auth-verify-missing").await;

    let (status, _body) = app.request("POST", "/api/auth/verify", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_invalidates_token() {
    let app = TestApp::spawn("auth-logout").await;
    let token = app.login().await;

    let (status, body) = app
        .request("POST", "/api/auth/logout", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _body) = app
        .request("POST", "/api/auth/verify", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_without_token_still_succeeds() {
    let app = TestApp::spawn("auth-logout-anon").await;

    let (status, body) = app.request("POST", "/api/auth/logout", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn mutating_routes_require_a_token() {
    let app = TestApp::spawn("auth-guard").await;

    let listing = json!({
        "title": "Logo design",
        "subtitle": "Brand mark",
        "category": "branding",
        "price": 15000,
        "image": "/uploads/logo.png",
    });

    let (status, _body) = app
        .request("POST", "/api/listings", None, Some(listing))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _body) = app
        .request("DELETE", "/api/listings/some-id", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
