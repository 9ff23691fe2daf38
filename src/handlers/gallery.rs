use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

use crate::db::models::DbProfilingItem;
use crate::error::StudioError;
use crate::middleware::AdminSession;
use crate::router::StudioState;
use crate::types::gallery::{GalleryItem, GalleryPayload};

/// POST /api/listings/gallery/add (admin only)
pub async fn create_gallery_item_handler(
    State(state): State<StudioState>,
    _admin: AdminSession,
    Json(payload): Json<GalleryPayload>,
) -> Result<Json<GalleryItem>, StudioError> {
    payload.validate()?;

    let now = Utc::now();
    let item = DbProfilingItem {
        id: Uuid::new_v4().simple().to_string(),
        category: payload.category.clone(),
        title: payload.title.clone(),
        description: payload.description.clone(),
        image_url: payload.image_url_path(),
        video_url: payload.video_url_path(),
        url: payload.url_path(),
        created_at: now,
        updated_at: Some(now),
    };
    state.storage.insert_profiling_item(&item).await?;

    info!(id = %item.id, category = %item.category, "gallery item created");
    Ok(Json(item.into()))
}

/// GET /api/listings/gallery/all -> all gallery items, newest first.
pub async fn list_gallery_items_handler(
    State(state): State<StudioState>,
) -> Result<Json<Vec<GalleryItem>>, StudioError> {
    let items = state.storage.list_profiling_items().await?;
    Ok(Json(items.into_iter().map(GalleryItem::from).collect()))
}

/// DELETE /api/listings/gallery/{id} (admin only). Idempotent.
pub async fn delete_gallery_item_handler(
    State(state): State<StudioState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> Result<Json<Value>, StudioError> {
    state.storage.delete_profiling_item(&id).await?;
    info!(id = %id, "gallery item deleted");
    Ok(Json(json!({ "success": true })))
}
