use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// Gallery/portfolio item on the wire. Field names are the SPA's:
/// snake_case media fields, camelCase timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryItem {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub video_url: String,
    pub url: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

#[derive(Debug, Deserialize)]
pub struct GalleryPayload {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl GalleryPayload {
    pub fn validate(&self) -> Result<(), StudioError> {
        if self.category.is_empty() || self.title.is_empty() || self.description.is_empty() {
            return Err(StudioError::Validation(
                "Missing required fields: category, title, description".to_string(),
            ));
        }

        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        if !present(&self.image_url) && !present(&self.video_url) && !present(&self.url) {
            return Err(StudioError::Validation(
                "At least one of image, video, or URL is required".to_string(),
            ));
        }

        Ok(())
    }

    fn none_if_empty(value: &Option<String>) -> Option<String> {
        value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
    }

    pub fn image_url_path(&self) -> Option<String> {
        Self::none_if_empty(&self.image_url)
    }

    pub fn video_url_path(&self) -> Option<String> {
        Self::none_if_empty(&self.video_url)
    }

    pub fn url_path(&self) -> Option<String> {
        Self::none_if_empty(&self.url)
    }
}
