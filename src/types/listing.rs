use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// Listing as it appears on the wire. `subtitle` is the `description`
/// column and `starting` is derived from the `badge` column; `createdAt`
/// is epoch milliseconds. These names predate this server and are what
/// the SPA expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub video: Option<String>,
    pub starting: bool,
    pub discount_enabled: bool,
    pub discount_percentage: i64,
    pub created_at: i64,
}

/// Create/update request body for a listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub starting: bool,
    #[serde(default)]
    pub discount_enabled: bool,
    #[serde(default)]
    pub discount_percentage: Option<i64>,
}

/// Longest media reference accepted inline; anything larger is almost
/// certainly base64 data that belongs on the upload endpoint.
const MAX_MEDIA_PATH_LEN: usize = 500;

impl ListingPayload {
    pub fn validate(&self) -> Result<(), StudioError> {
        if self.title.is_empty()
            || self.subtitle.is_empty()
            || self.category.is_empty()
            || self.price <= 0.0
        {
            return Err(StudioError::Validation(
                "Missing required fields".to_string(),
            ));
        }

        let has_image = self.image.as_deref().is_some_and(|s| !s.is_empty());
        let has_video = self.video.as_deref().is_some_and(|s| !s.is_empty());
        if !has_image && !has_video {
            return Err(StudioError::Validation(
                "At least image or video is required".to_string(),
            ));
        }

        if self.image.as_deref().is_some_and(|s| s.len() > MAX_MEDIA_PATH_LEN) {
            return Err(StudioError::Validation(
                "Image data too large. Please upload files separately and provide file paths only."
                    .to_string(),
            ));
        }
        if self.video.as_deref().is_some_and(|s| s.len() > MAX_MEDIA_PATH_LEN) {
            return Err(StudioError::Validation(
                "Video data too large. Please upload files separately and provide file paths only."
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Effective discount percentage: clamped to [0, 100], and zero
    /// whenever the discount flag is off.
    pub fn effective_discount(&self) -> i64 {
        if self.discount_enabled {
            self.discount_percentage.unwrap_or(0).clamp(0, 100)
        } else {
            0
        }
    }

    pub fn badge(&self) -> Option<String> {
        self.starting.then(|| "starting".to_string())
    }

    fn none_if_empty(value: &Option<String>) -> Option<String> {
        value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
    }

    pub fn image_path(&self) -> Option<String> {
        Self::none_if_empty(&self.image)
    }

    pub fn video_path(&self) -> Option<String> {
        Self::none_if_empty(&self.video)
    }
}
