use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

use crate::db::models::DbDesign;
use crate::error::StudioError;
use crate::middleware::AdminSession;
use crate::router::StudioState;
use crate::types::listing::{Listing, ListingPayload};

/// POST /api/listings (admin only)
pub async fn create_listing_handler(
    State(state): State<StudioState>,
    _admin: AdminSession,
    Json(payload): Json<ListingPayload>,
) -> Result<Json<Listing>, StudioError> {
    payload.validate()?;

    let now = Utc::now();
    let design = DbDesign {
        id: Uuid::new_v4().simple().to_string(),
        title: payload.title.clone(),
        description: payload.subtitle.clone(),
        category: payload.category.clone(),
        price_lkr: payload.price,
        image: payload.image_path(),
        video: payload.video_path(),
        badge: payload.badge(),
        discount_enabled: payload.discount_enabled,
        discount_percentage: payload.effective_discount(),
        created_at: now,
        updated_at: Some(now),
    };
    state.storage.insert_design(&design).await?;

    info!(id = %design.id, category = %design.category, "listing created");
    Ok(Json(design.into()))
}

/// GET /api/listings -> all listings, newest first.
pub async fn list_listings_handler(
    State(state): State<StudioState>,
) -> Result<Json<Vec<Listing>>, StudioError> {
    let designs = state.storage.list_designs().await?;
    Ok(Json(designs.into_iter().map(Listing::from).collect()))
}

/// PUT /api/listings/{id} (admin only); 404 when the id is unknown.
pub async fn update_listing_handler(
    State(state): State<StudioState>,
    _admin: AdminSession,
    Path(id): Path<String>,
    Json(payload): Json<ListingPayload>,
) -> Result<Json<Listing>, StudioError> {
    payload.validate()?;

    let now = Utc::now();
    // created_at is never written by an update; the value here is filler.
    let design = DbDesign {
        id: id.clone(),
        title: payload.title.clone(),
        description: payload.subtitle.clone(),
        category: payload.category.clone(),
        price_lkr: payload.price,
        image: payload.image_path(),
        video: payload.video_path(),
        badge: payload.badge(),
        discount_enabled: payload.discount_enabled,
        discount_percentage: payload.effective_discount(),
        created_at: now,
        updated_at: Some(now),
    };
    if !state.storage.update_design(&design).await? {
        return Err(StudioError::NotFound("Design"));
    }

    let stored = state
        .storage
        .get_design(&id)
        .await?
        .ok_or(StudioError::NotFound("Design"))?;

    info!(id = %id, "listing updated");
    Ok(Json(stored.into()))
}

/// DELETE /api/listings/{id} (admin only). Idempotent: deleting an id
/// that does not exist still reports success.
pub async fn delete_listing_handler(
    State(state): State<StudioState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> Result<Json<Value>, StudioError> {
    state.storage.delete_design(&id).await?;
    info!(id = %id, "listing deleted");
    Ok(Json(json!({ "success": true })))
}
