use serde::{Deserialize, Serialize};

/// The site-settings singleton as returned to the SPA. Every field is
/// optional because each admin form patches its own slice of the row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_description: Option<String>,
    pub portfolio_heading: Option<String>,
    pub navbar_text: Option<String>,
    /// Pipe-separated news items rendered as a ticker.
    pub feed_news: Option<String>,
    pub portfolio_images: Option<Vec<PortfolioImage>>,
    /// Epoch milliseconds.
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioImage {
    pub id: i64,
    pub img: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct HeroPayload {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct PortfolioHeadingPayload {
    pub heading: String,
}

#[derive(Debug, Deserialize)]
pub struct NavbarPayload {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedNewsPayload {
    #[serde(rename = "feedNews")]
    pub feed_news: String,
}

#[derive(Debug, Deserialize)]
pub struct PortfolioImagesPayload {
    pub images: Vec<PortfolioImage>,
}
