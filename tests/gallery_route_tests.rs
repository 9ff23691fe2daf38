mod common;

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

fn gallery_item(title: &str) -> serde_json::Value {
    json!({
        "category": "logos",
        "title": title,
        "description": "Client work",
        "image_url": "/uploads/sample.png",
    })
}

#[tokio::test]
async fn create_requires_category_title_description() {
    let app = TestApp::spawn("gallery-missing-fields").await;
    let token = app.login().await;

    let (status, body) = app
        .request(
            "POST",
            "/api/listings/gallery/add",
            Some(&token),
            Some(json!({ "title": "Only a title", "image_url": "/uploads/x.png" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "Missing required fields: category, title, description"
    );
}

#[tokio::test]
async fn create_requires_some_media_reference() {
    let app = TestApp::spawn("gallery-no-media").await;
    let token = app.login().await;

    let (status, body) = app
        .request(
            "POST",
            "/api/listings/gallery/add",
            Some(&token),
            Some(json!({
                "category": "logos",
                "title": "Bare item",
                "description": "No media at all",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "At least one of image, video, or URL is required"
    );
}

#[tokio::test]
async fn create_accepts_external_url_alone() {
    let app = TestApp::spawn("gallery-url-only").await;
    let token = app.login().await;

    let (status, body) = app
        .request(
            "POST",
            "/api/listings/gallery/add",
            Some(&token),
            Some(json!({
                "category": "sites",
                "title": "Live site",
                "description": "Shipped project",
                "url": "https://example.com",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "https://example.com");
    assert_eq!(body["image_url"], "");
    assert_eq!(body["video_url"], "");
}

#[tokio::test]
async fn list_returns_newest_first() {
    let app = TestApp::spawn("gallery-order").await;
    let token = app.login().await;

    for title in ["first", "second"] {
        let (status, _body) = app
            .request(
                "POST",
                "/api/listings/gallery/add",
                Some(&token),
                Some(gallery_item(title)),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let (status, body) = app
        .request("GET", "/api/listings/gallery/all", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let titles: Vec<&str> = body
        .as_array()
        .expect("expected an array")
        .iter()
        .map(|i| i["title"].as_str().expect("title missing"))
        .collect();
    assert_eq!(titles, vec!["second", "first"]);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let app = TestApp::spawn("gallery-delete").await;
    let token = app.login().await;

    let (status, created) = app
        .request(
            "POST",
            "/api/listings/gallery/add",
            Some(&token),
            Some(gallery_item("Doomed")),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().expect("id missing").to_string();

    for _ in 0..2 {
        let (status, body) = app
            .request(
                "DELETE",
                &format!("/api/listings/gallery/{id}"),
                Some(&token),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }
}

#[tokio::test]
async fn create_requires_a_token() {
    let app = TestApp::spawn("gallery-guard").await;

    let (status, _body) = app
        .request(
            "POST",
            "/api/listings/gallery/add",
            None,
            Some(gallery_item("Nope")),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
