#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;
use yasa_studio::config::{AdminCredentials, Config};
use yasa_studio::router::{StudioState, studio_router};

pub const TEST_USERNAME: &str = "studio-admin";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// A real router over a throwaway SQLite file and uploads directory.
/// Both are deleted on drop.
pub struct TestApp {
    pub app: Router,
    pub uploads_dir: PathBuf,
    db_path: PathBuf,
}

impl TestApp {
    pub async fn spawn(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut db_path = std::env::temp_dir();
        db_path.push(format!(
            "yasa-studio-{tag}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let mut uploads_dir = std::env::temp_dir();
        uploads_dir.push(format!(
            "yasa-studio-uploads-{tag}-{}-{}",
            std::process::id(),
            nanos
        ));
        fs::create_dir_all(&uploads_dir).expect("failed to create uploads dir");

        let database_url = format!("sqlite:{}", db_path.display());
        let storage = yasa_studio::db::spawn(&database_url)
            .await
            .expect("db init failed");

        let mut cfg = Config::default();
        cfg.uploads_dir = uploads_dir.clone();

        let admin = AdminCredentials {
            username: TEST_USERNAME.to_string(),
            password: TEST_PASSWORD.to_string(),
        };
        let state = StudioState::new(storage, admin, &cfg);

        Self {
            app: studio_router(state),
            uploads_dir,
            db_path,
        }
    }

    /// Send a JSON request (body optional) and decode the JSON response.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(value) => builder
                .header("content-type", "application/json")
                .body(Body::from(value.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request");

        let resp = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    /// Log in with the test credentials and return the session token.
    pub async fn login(&self) -> String {
        let (status, body) = self
            .request(
                "POST",
                "/api/auth/login",
                None,
                Some(serde_json::json!({
                    "username": TEST_USERNAME,
                    "password": TEST_PASSWORD,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"].as_str().expect("token missing").to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.db_path);
        let _ = fs::remove_dir_all(&self.uploads_dir);
    }
}
