use chrono::{DateTime, Utc};

use crate::types::gallery::GalleryItem;
use crate::types::listing::Listing;
use crate::types::settings::{PortfolioImage, SiteSettings};

#[derive(Debug, Clone, PartialEq)]
pub struct DbDesign {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price_lkr: f64,
    pub image: Option<String>,
    pub video: Option<String>,
    pub badge: Option<String>,
    pub discount_enabled: bool,
    pub discount_percentage: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<DbDesign> for Listing {
    fn from(d: DbDesign) -> Self {
        Listing {
            id: d.id,
            title: d.title,
            subtitle: d.description,
            category: d.category,
            price: d.price_lkr,
            image: d.image.unwrap_or_default(),
            video: d.video,
            starting: d.badge.as_deref() == Some("starting"),
            discount_enabled: d.discount_enabled,
            discount_percentage: d.discount_percentage,
            created_at: d.created_at.timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DbProfilingItem {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<DbProfilingItem> for GalleryItem {
    fn from(p: DbProfilingItem) -> Self {
        GalleryItem {
            id: p.id,
            category: p.category,
            title: p.title,
            description: p.description,
            image_url: p.image_url.unwrap_or_default(),
            video_url: p.video_url.unwrap_or_default(),
            url: p.url.unwrap_or_default(),
            created_at: p.created_at.timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DbAdminSession {
    pub id: i64,
    pub token: String,
    pub username: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl DbAdminSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DbSiteSettings {
    pub key: String,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_description: Option<String>,
    pub portfolio_heading: Option<String>,
    pub navbar_text: Option<String>,
    pub feed_news: Option<String>,
    pub portfolio_images: Option<Vec<PortfolioImage>>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbSiteSettings> for SiteSettings {
    fn from(s: DbSiteSettings) -> Self {
        SiteSettings {
            hero_title: s.hero_title,
            hero_subtitle: s.hero_subtitle,
            hero_description: s.hero_description,
            portfolio_heading: s.portfolio_heading,
            navbar_text: s.navbar_text,
            feed_news: s.feed_news,
            portfolio_images: s.portfolio_images,
            updated_at: s.updated_at.timestamp_millis(),
        }
    }
}
