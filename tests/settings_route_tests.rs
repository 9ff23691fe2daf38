mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::TestApp;

#[tokio::test]
async fn settings_are_null_before_first_write() {
    let app = TestApp::spawn("settings-empty").await;

    let (status, body) = app.request("GET", "/api/settings", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn hero_patch_upserts_the_singleton() {
    let app = TestApp::spawn("settings-hero").await;
    let token = app.login().await;

    let (status, body) = app
        .request(
            "PUT",
            "/api/settings/hero",
            Some(&token),
            Some(json!({
                "title": "Design that sells",
                "subtitle": "Yasa Graphics",
                "description": "Logos, packaging, and more",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["heroTitle"], "Design that sells");
    assert_eq!(body["heroSubtitle"], "Yasa Graphics");

    let (status, body) = app.request("GET", "/api/settings", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["heroTitle"], "Design that sells");
    assert!(body["updatedAt"].as_i64().expect("updatedAt missing") > 0);
}

#[tokio::test]
async fn patches_merge_into_one_row() {
    let app = TestApp::spawn("settings-merge").await;
    let token = app.login().await;

    let (status, _body) = app
        .request(
            "PUT",
            "/api/settings/navbar",
            Some(&token),
            Some(json!({ "text": "Yasa Graphics Studio" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _body) = app
        .request(
            "PUT",
            "/api/settings/feed-news",
            Some(&token),
            Some(json!({ "feedNews": "New package deals|Festive discounts" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.request("GET", "/api/settings", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["navbarText"], "Yasa Graphics Studio");
    assert_eq!(body["feedNews"], "New package deals|Festive discounts");
}

#[tokio::test]
async fn portfolio_images_roundtrip() {
    let app = TestApp::spawn("settings-portfolio").await;
    let token = app.login().await;

    let images = json!([
        { "id": 1, "img": "/uploads/a.png", "title": "Brand A" },
        { "id": 2, "img": "/uploads/b.png", "title": "Brand B" },
    ]);

    let (status, body) = app
        .request(
            "PUT",
            "/api/settings/portfolio-images",
            Some(&token),
            Some(json!({ "images": images })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["portfolioImages"], images);

    let (status, body) = app.request("GET", "/api/settings", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["portfolioImages"], images);
}

#[tokio::test]
async fn settings_patches_require_a_token() {
    let app = TestApp::spawn("settings-guard").await;

    let (status, _body) = app
        .request(
            "PUT",
            "/api/settings/navbar",
            None,
            Some(json!({ "text": "nope" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
