//! Runtime configuration, merged from defaults and `STUDIO_`-prefixed
//! environment variables. Admin credentials have no default on purpose:
//! the binary refuses to start without them.

use std::path::PathBuf;
use std::sync::LazyLock;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use url::Url;

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("invalid STUDIO_* configuration"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub loglevel: String,
    /// Origin allowed by CORS; the SPA dev server by default.
    pub frontend_origin: Url,
    pub uploads_dir: PathBuf,
    pub session_ttl_hours: i64,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            database_url: "sqlite:studio.sqlite".to_string(),
            loglevel: "info".to_string(),
            frontend_origin: Url::parse("http://localhost:5173").expect("static URL"),
            uploads_dir: PathBuf::from("public/uploads"),
            session_ttl_hours: 24,
            admin_username: None,
            admin_password: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("STUDIO_"))
            .extract()
    }

    /// Both credential halves, or None if either is missing/empty.
    pub fn admin_credentials(&self) -> Option<AdminCredentials> {
        match (self.admin_username.as_deref(), self.admin_password.as_deref()) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Some(AdminCredentials {
                username: u.to_string(),
                password: p.to_string(),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}
