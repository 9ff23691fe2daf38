//! SQL DDL for initializing the site database.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema:
/// - `designs`: the design-service listings shown on the site
/// - `profiling`: gallery/portfolio showcase items
/// - `admin_sessions`: bearer tokens issued on login, with expiry
/// - `site_settings`: singleton row keyed by 'main'
///
/// Timestamps are RFC3339 TEXT. `portfolio_images` is a JSON array
/// serialized as text. Secondary indexes on category/created_at mirror
/// the query patterns (unfiltered list ordered by creation time).
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS designs (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    category TEXT NOT NULL,
    price_lkr REAL NOT NULL,
    image TEXT NULL,
    video TEXT NULL,
    badge TEXT NULL,
    discount_enabled INTEGER NOT NULL DEFAULT 0,
    discount_percentage INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NULL
);

CREATE INDEX IF NOT EXISTS idx_designs_category ON designs(category);
CREATE INDEX IF NOT EXISTS idx_designs_created_at ON designs(created_at);

CREATE TABLE IF NOT EXISTS profiling (
    id TEXT PRIMARY KEY,
    category TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    image_url TEXT NULL,
    video_url TEXT NULL,
    url TEXT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NULL
);

CREATE INDEX IF NOT EXISTS idx_profiling_category ON profiling(category);
CREATE INDEX IF NOT EXISTS idx_profiling_created_at ON profiling(created_at);

CREATE TABLE IF NOT EXISTS admin_sessions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    token TEXT NOT NULL UNIQUE,
    username TEXT NOT NULL,
    expires_at TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS site_settings (
    key TEXT PRIMARY KEY,
    hero_title TEXT NULL,
    hero_subtitle TEXT NULL,
    hero_description TEXT NULL,
    portfolio_heading TEXT NULL,
    navbar_text TEXT NULL,
    feed_news TEXT NULL,
    portfolio_images TEXT NULL, -- JSON array, serialized as text
    updated_at TEXT NOT NULL
);
"#;
