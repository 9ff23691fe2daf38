//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and conversions
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)

pub mod models;
pub mod schema;
pub mod sqlite;

pub use schema::SQLITE_INIT;
pub use sqlite::{SiteStorage, SqlitePool};

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StudioError;

/// Open (creating if missing) the SQLite database behind `database_url`
/// and run schema initialization. Shared by the binary and the tests.
pub async fn spawn(database_url: &str) -> Result<SiteStorage, StudioError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    let storage = SiteStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}
