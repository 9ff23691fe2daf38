use axum::{Json, extract::State};
use chrono::Utc;
use tracing::info;

use crate::error::StudioError;
use crate::middleware::AdminSession;
use crate::router::StudioState;
use crate::types::settings::{
    FeedNewsPayload, HeroPayload, NavbarPayload, PortfolioHeadingPayload, PortfolioImagesPayload,
    SiteSettings,
};

/// GET /api/settings -> the singleton, or `null` before the first write.
pub async fn get_settings_handler(
    State(state): State<StudioState>,
) -> Result<Json<Option<SiteSettings>>, StudioError> {
    Ok(Json(state.storage.get_settings().await?.map(SiteSettings::from)))
}

/// PUT /api/settings/hero (admin only)
pub async fn update_hero_handler(
    State(state): State<StudioState>,
    _admin: AdminSession,
    Json(payload): Json<HeroPayload>,
) -> Result<Json<SiteSettings>, StudioError> {
    state
        .storage
        .update_hero(&payload.title, &payload.subtitle, &payload.description, Utc::now())
        .await?;
    info!("hero section updated");
    current_settings(&state).await
}

/// PUT /api/settings/portfolio-heading (admin only)
pub async fn update_portfolio_heading_handler(
    State(state): State<StudioState>,
    _admin: AdminSession,
    Json(payload): Json<PortfolioHeadingPayload>,
) -> Result<Json<SiteSettings>, StudioError> {
    state
        .storage
        .update_portfolio_heading(&payload.heading, Utc::now())
        .await?;
    info!("portfolio heading updated");
    current_settings(&state).await
}

/// PUT /api/settings/navbar (admin only)
pub async fn update_navbar_handler(
    State(state): State<StudioState>,
    _admin: AdminSession,
    Json(payload): Json<NavbarPayload>,
) -> Result<Json<SiteSettings>, StudioError> {
    state.storage.update_navbar_text(&payload.text, Utc::now()).await?;
    info!("navbar text updated");
    current_settings(&state).await
}

/// PUT /api/settings/feed-news (admin only)
pub async fn update_feed_news_handler(
    State(state): State<StudioState>,
    _admin: AdminSession,
    Json(payload): Json<FeedNewsPayload>,
) -> Result<Json<SiteSettings>, StudioError> {
    state.storage.update_feed_news(&payload.feed_news, Utc::now()).await?;
    info!("feed news updated");
    current_settings(&state).await
}

/// PUT /api/settings/portfolio-images (admin only)
pub async fn update_portfolio_images_handler(
    State(state): State<StudioState>,
    _admin: AdminSession,
    Json(payload): Json<PortfolioImagesPayload>,
) -> Result<Json<SiteSettings>, StudioError> {
    state
        .storage
        .update_portfolio_images(&payload.images, Utc::now())
        .await?;
    info!(count = payload.images.len(), "portfolio images updated");
    current_settings(&state).await
}

/// Every patch mutation responds with the full document it just wrote.
async fn current_settings(state: &StudioState) -> Result<Json<SiteSettings>, StudioError> {
    let settings = state
        .storage
        .get_settings()
        .await?
        .ok_or(StudioError::NotFound("Settings"))?;
    Ok(Json(settings.into()))
}
