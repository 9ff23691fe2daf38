use std::num::NonZeroU32;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use url::Url;

use crate::config::{AdminCredentials, Config};
use crate::db::SiteStorage;
use crate::handlers::{auth, gallery, listings, settings, upload};

/// Ten fresh attempts per minute is plenty for one human admin.
const LOGIN_ATTEMPTS_PER_MINUTE: u32 = 10;

/// JSON bodies stay modest; the upload route carries real files.
const JSON_BODY_LIMIT: usize = 50 * 1024 * 1024;
const UPLOAD_BODY_LIMIT: usize = 100 * 1024 * 1024;

#[derive(Clone)]
pub struct StudioState {
    pub storage: SiteStorage,
    pub admin: Arc<AdminCredentials>,
    pub login_limiter: Arc<DefaultDirectRateLimiter>,
    pub uploads_dir: Arc<PathBuf>,
    pub session_ttl_hours: i64,
    frontend_origin: Url,
}

impl StudioState {
    pub fn new(storage: SiteStorage, admin: AdminCredentials, cfg: &Config) -> Self {
        let quota =
            Quota::per_minute(NonZeroU32::new(LOGIN_ATTEMPTS_PER_MINUTE).expect("nonzero quota"));
        Self {
            storage,
            admin: Arc::new(admin),
            login_limiter: Arc::new(RateLimiter::direct(quota)),
            uploads_dir: Arc::new(cfg.uploads_dir.clone()),
            session_ttl_hours: cfg.session_ttl_hours,
            frontend_origin: cfg.frontend_origin.clone(),
        }
    }
}

/// Build the axum router: API routes, CORS for the SPA origin, body
/// limits, and static serving of uploaded files.
pub fn studio_router(state: StudioState) -> Router {
    let cors = cors_layer(&state.frontend_origin);
    let uploads_dir = state.uploads_dir.as_ref().clone();

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/auth/login", post(auth::login_handler))
        .route("/api/auth/verify", post(auth::verify_handler))
        .route("/api/auth/logout", post(auth::logout_handler))
        .route(
            "/api/listings",
            get(listings::list_listings_handler).post(listings::create_listing_handler),
        )
        .route(
            "/api/listings/upload",
            post(upload::upload_handler).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/api/listings/gallery/add",
            post(gallery::create_gallery_item_handler),
        )
        .route(
            "/api/listings/gallery/all",
            get(gallery::list_gallery_items_handler),
        )
        .route(
            "/api/listings/gallery/{id}",
            delete(gallery::delete_gallery_item_handler),
        )
        .route(
            "/api/listings/{id}",
            put(listings::update_listing_handler).delete(listings::delete_listing_handler),
        )
        .route("/api/settings", get(settings::get_settings_handler))
        .route("/api/settings/hero", put(settings::update_hero_handler))
        .route(
            "/api/settings/portfolio-heading",
            put(settings::update_portfolio_heading_handler),
        )
        .route("/api/settings/navbar", put(settings::update_navbar_handler))
        .route(
            "/api/settings/feed-news",
            put(settings::update_feed_news_handler),
        )
        .route(
            "/api/settings/portfolio-images",
            put(settings::update_portfolio_images_handler),
        )
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(frontend_origin: &Url) -> CorsLayer {
    // Url::as_str carries a trailing slash; the Origin header does not.
    let origin = frontend_origin.origin().ascii_serialization();
    let origin =
        HeaderValue::from_str(&origin).expect("frontend origin is a valid header value");
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": { "code": "NOT_FOUND", "message": "Route not found" } })),
    )
        .into_response()
}
