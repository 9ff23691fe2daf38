use std::path::Path;

use axum::{
    Json,
    extract::{Multipart, State},
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::StudioError;
use crate::middleware::AdminSession;
use crate::router::StudioState;

/// MIME types the site actually embeds. Everything else is rejected.
const ALLOWED_MIMES: [&str; 6] = [
    "image/jpeg",
    "image/png",
    "image/webp",
    "video/mp4",
    "video/quicktime",
    "video/webm",
];

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    #[serde(rename = "filePath")]
    pub file_path: String,
}

/// POST /api/listings/upload (admin only): store the `file` part under the
/// uploads directory with a generated name, and hand back the public path
/// that goes into a listing's image/video field.
pub async fn upload_handler(
    State(state): State<StudioState>,
    _admin: AdminSession,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, StudioError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .map(str::to_string)
            .ok_or(StudioError::InvalidFileType)?;
        if !ALLOWED_MIMES.contains(&content_type.as_str()) {
            return Err(StudioError::InvalidFileType);
        }

        // Only the extension of the client name survives; the stored name
        // is generated, so path components in the upload cannot escape the
        // uploads directory.
        let ext = field
            .file_name()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);
        let file_name = match ext {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4().simple()),
            None => Uuid::new_v4().simple().to_string(),
        };

        let data = field.bytes().await?;
        let dest = state.uploads_dir.join(&file_name);
        tokio::fs::write(&dest, &data).await?;

        info!(file = %file_name, bytes = data.len(), mime = %content_type, "file uploaded");
        return Ok(Json(UploadResponse {
            file_path: format!("/uploads/{file_name}"),
        }));
    }

    Err(StudioError::Validation("No file uploaded".to_string()))
}
