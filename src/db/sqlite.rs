use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};
use tracing::{info, warn};

use crate::db::models::{DbAdminSession, DbDesign, DbProfilingItem, DbSiteSettings};
use crate::db::schema::SQLITE_INIT;
use crate::error::StudioError;
use crate::types::settings::PortfolioImage;

pub type SqlitePool = Pool<Sqlite>;

/// The single settings row every settings operation targets.
const SETTINGS_KEY: &str = "main";

#[derive(Clone)]
pub struct SiteStorage {
    pool: SqlitePool,
}

impl SiteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL, then bring
    /// pre-discount-rollout databases up to date.
    pub async fn init_schema(&self) -> Result<(), StudioError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        self.ensure_discount_columns().await;
        Ok(())
    }

    /// Databases created before the discount rollout lack the two discount
    /// columns on `designs`. Add them when missing; warn and continue on
    /// failure, matching how the site has always treated this migration.
    async fn ensure_discount_columns(&self) {
        let present: Result<(i64,), sqlx::Error> = sqlx::query_as(
            "SELECT COUNT(*) FROM pragma_table_info('designs') WHERE name = 'discount_enabled'",
        )
        .fetch_one(&self.pool)
        .await;

        match present {
            Ok((0,)) => {
                let alters = [
                    "ALTER TABLE designs ADD COLUMN discount_enabled INTEGER NOT NULL DEFAULT 0",
                    "ALTER TABLE designs ADD COLUMN discount_percentage INTEGER NOT NULL DEFAULT 0",
                ];
                for stmt in alters {
                    if let Err(e) = sqlx::query(stmt).execute(&self.pool).await {
                        warn!(error = %e, "failed to add discount column; continuing");
                        return;
                    }
                }
                info!("added discount columns to designs table");
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "discount column check failed; continuing");
            }
        }
    }

    // ----- designs -----

    pub async fn insert_design(&self, design: &DbDesign) -> Result<(), StudioError> {
        sqlx::query(
            r#"
            INSERT INTO designs (
                id, title, description, category, price_lkr, image, video,
                badge, discount_enabled, discount_percentage, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&design.id)
        .bind(&design.title)
        .bind(&design.description)
        .bind(&design.category)
        .bind(design.price_lkr)
        .bind(&design.image)
        .bind(&design.video)
        .bind(&design.badge)
        .bind(design.discount_enabled as i64)
        .bind(design.discount_percentage)
        .bind(fmt_ts(design.created_at))
        .bind(design.updated_at.map(fmt_ts))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn list_designs(&self) -> Result<Vec<DbDesign>, StudioError> {
        let rows = sqlx::query(
            r#"SELECT id, title, description, category, price_lkr, image, video,
               badge, discount_enabled, discount_percentage, created_at, updated_at
               FROM designs ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_design).collect()
    }

    pub async fn get_design(&self, id: &str) -> Result<Option<DbDesign>, StudioError> {
        let row = sqlx::query(
            r#"SELECT id, title, description, category, price_lkr, image, video,
               badge, discount_enabled, discount_percentage, created_at, updated_at
               FROM designs WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_design).transpose()
    }

    /// Update every mutable field. Returns false when the id is unknown.
    pub async fn update_design(&self, design: &DbDesign) -> Result<bool, StudioError> {
        let result = sqlx::query(
            r#"UPDATE designs SET
                title = ?,
                description = ?,
                category = ?,
                price_lkr = ?,
                image = ?,
                video = ?,
                badge = ?,
                discount_enabled = ?,
                discount_percentage = ?,
                updated_at = ?
              WHERE id = ?"#,
        )
        .bind(&design.title)
        .bind(&design.description)
        .bind(&design.category)
        .bind(design.price_lkr)
        .bind(&design.image)
        .bind(&design.video)
        .bind(&design.badge)
        .bind(design.discount_enabled as i64)
        .bind(design.discount_percentage)
        .bind(design.updated_at.map(fmt_ts))
        .bind(&design.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_design(&self, id: &str) -> Result<(), StudioError> {
        sqlx::query("DELETE FROM designs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ----- profiling (gallery) -----

    pub async fn insert_profiling_item(&self, item: &DbProfilingItem) -> Result<(), StudioError> {
        sqlx::query(
            r#"
            INSERT INTO profiling (
                id, category, title, description, image_url, video_url, url,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item.id)
        .bind(&item.category)
        .bind(&item.title)
        .bind(&item.description)
        .bind(&item.image_url)
        .bind(&item.video_url)
        .bind(&item.url)
        .bind(fmt_ts(item.created_at))
        .bind(item.updated_at.map(fmt_ts))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn list_profiling_items(&self) -> Result<Vec<DbProfilingItem>, StudioError> {
        let rows = sqlx::query(
            r#"SELECT id, category, title, description, image_url, video_url, url,
               created_at, updated_at
               FROM profiling ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_profiling).collect()
    }

    pub async fn delete_profiling_item(&self, id: &str) -> Result<(), StudioError> {
        sqlx::query("DELETE FROM profiling WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ----- admin sessions -----

    pub async fn insert_session(
        &self,
        token: &str,
        username: &str,
        expires_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Result<(), StudioError> {
        sqlx::query(
            "INSERT INTO admin_sessions (token, username, expires_at, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(token)
        .bind(username)
        .bind(fmt_ts(expires_at))
        .bind(fmt_ts(created_at))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn get_session(&self, token: &str) -> Result<Option<DbAdminSession>, StudioError> {
        let row = sqlx::query(
            "SELECT id, token, username, expires_at, created_at FROM admin_sessions WHERE token = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_session).transpose()
    }

    pub async fn delete_session(&self, token: &str) -> Result<(), StudioError> {
        sqlx::query("DELETE FROM admin_sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ----- site settings -----

    pub async fn get_settings(&self) -> Result<Option<DbSiteSettings>, StudioError> {
        let row = sqlx::query(
            r#"SELECT key, hero_title, hero_subtitle, hero_description, portfolio_heading,
               navbar_text, feed_news, portfolio_images, updated_at
               FROM site_settings WHERE key = ?"#,
        )
        .bind(SETTINGS_KEY)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_settings).transpose()
    }

    pub async fn update_hero(
        &self,
        title: &str,
        subtitle: &str,
        description: &str,
        now: DateTime<Utc>,
    ) -> Result<(), StudioError> {
        sqlx::query(
            r#"
            INSERT INTO site_settings (key, hero_title, hero_subtitle, hero_description, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                hero_title=excluded.hero_title,
                hero_subtitle=excluded.hero_subtitle,
                hero_description=excluded.hero_description,
                updated_at=excluded.updated_at
            "#,
        )
        .bind(SETTINGS_KEY)
        .bind(title)
        .bind(subtitle)
        .bind(description)
        .bind(fmt_ts(now))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn update_portfolio_heading(
        &self,
        heading: &str,
        now: DateTime<Utc>,
    ) -> Result<(), StudioError> {
        sqlx::query(
            r#"
            INSERT INTO site_settings (key, portfolio_heading, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                portfolio_heading=excluded.portfolio_heading,
                updated_at=excluded.updated_at
            "#,
        )
        .bind(SETTINGS_KEY)
        .bind(heading)
        .bind(fmt_ts(now))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn update_navbar_text(
        &self,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<(), StudioError> {
        sqlx::query(
            r#"
            INSERT INTO site_settings (key, navbar_text, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                navbar_text=excluded.navbar_text,
                updated_at=excluded.updated_at
            "#,
        )
        .bind(SETTINGS_KEY)
        .bind(text)
        .bind(fmt_ts(now))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn update_feed_news(
        &self,
        feed_news: &str,
        now: DateTime<Utc>,
    ) -> Result<(), StudioError> {
        sqlx::query(
            r#"
            INSERT INTO site_settings (key, feed_news, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                feed_news=excluded.feed_news,
                updated_at=excluded.updated_at
            "#,
        )
        .bind(SETTINGS_KEY)
        .bind(feed_news)
        .bind(fmt_ts(now))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn update_portfolio_images(
        &self,
        images: &[PortfolioImage],
        now: DateTime<Utc>,
    ) -> Result<(), StudioError> {
        let images_json =
            serde_json::to_string(images).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        sqlx::query(
            r#"
            INSERT INTO site_settings (key, portfolio_images, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                portfolio_images=excluded.portfolio_images,
                updated_at=excluded.updated_at
            "#,
        )
        .bind(SETTINGS_KEY)
        .bind(images_json)
        .bind(fmt_ts(now))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    // ----- row decoding -----

    fn row_to_design(row: SqliteRow) -> Result<DbDesign, StudioError> {
        let id: String = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let description: String = row.try_get("description")?;
        let category: String = row.try_get("category")?;
        let price_lkr: f64 = row.try_get("price_lkr")?;
        let image: Option<String> = row.try_get("image")?;
        let video: Option<String> = row.try_get("video")?;
        let badge: Option<String> = row.try_get("badge")?;
        let discount_enabled_i: i64 = row.try_get("discount_enabled")?;
        let discount_percentage: i64 = row.try_get("discount_percentage")?;
        let created_at_str: String = row.try_get("created_at")?;
        let updated_at_str: Option<String> = row.try_get("updated_at")?;

        Ok(DbDesign {
            id,
            title,
            description,
            category,
            price_lkr,
            image,
            video,
            badge,
            discount_enabled: discount_enabled_i != 0,
            discount_percentage,
            created_at: parse_ts(&created_at_str)?,
            updated_at: updated_at_str.as_deref().map(parse_ts).transpose()?,
        })
    }

    fn row_to_profiling(row: SqliteRow) -> Result<DbProfilingItem, StudioError> {
        let id: String = row.try_get("id")?;
        let category: String = row.try_get("category")?;
        let title: String = row.try_get("title")?;
        let description: String = row.try_get("description")?;
        let image_url: Option<String> = row.try_get("image_url")?;
        let video_url: Option<String> = row.try_get("video_url")?;
        let url: Option<String> = row.try_get("url")?;
        let created_at_str: String = row.try_get("created_at")?;
        let updated_at_str: Option<String> = row.try_get("updated_at")?;

        Ok(DbProfilingItem {
            id,
            category,
            title,
            description,
            image_url,
            video_url,
            url,
            created_at: parse_ts(&created_at_str)?,
            updated_at: updated_at_str.as_deref().map(parse_ts).transpose()?,
        })
    }

    fn row_to_session(row: SqliteRow) -> Result<DbAdminSession, StudioError> {
        let id: i64 = row.try_get("id")?;
        let token: String = row.try_get("token")?;
        let username: String = row.try_get("username")?;
        let expires_at_str: String = row.try_get("expires_at")?;
        let created_at_str: String = row.try_get("created_at")?;

        Ok(DbAdminSession {
            id,
            token,
            username,
            expires_at: parse_ts(&expires_at_str)?,
            created_at: parse_ts(&created_at_str)?,
        })
    }

    fn row_to_settings(row: SqliteRow) -> Result<DbSiteSettings, StudioError> {
        let key: String = row.try_get("key")?;
        let hero_title: Option<String> = row.try_get("hero_title")?;
        let hero_subtitle: Option<String> = row.try_get("hero_subtitle")?;
        let hero_description: Option<String> = row.try_get("hero_description")?;
        let portfolio_heading: Option<String> = row.try_get("portfolio_heading")?;
        let navbar_text: Option<String> = row.try_get("navbar_text")?;
        let feed_news: Option<String> = row.try_get("feed_news")?;
        let portfolio_images_json: Option<String> = row.try_get("portfolio_images")?;
        let updated_at_str: String = row.try_get("updated_at")?;

        let portfolio_images: Option<Vec<PortfolioImage>> = match portfolio_images_json {
            Some(s) => {
                Some(serde_json::from_str(&s).map_err(|e| sqlx::Error::Decode(Box::new(e)))?)
            }
            None => None,
        };

        Ok(DbSiteSettings {
            key,
            hero_title,
            hero_subtitle,
            hero_description,
            portfolio_heading,
            navbar_text,
            feed_news,
            portfolio_images,
            updated_at: parse_ts(&updated_at_str)?,
        })
    }
}

/// Fixed-width RFC3339 so lexicographic ordering on the TEXT column
/// matches chronological ordering.
fn fmt_ts(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_ts(s: &str) -> Result<DateTime<Utc>, StudioError> {
    let dt = chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
        .with_timezone(&Utc);
    Ok(dt)
}
