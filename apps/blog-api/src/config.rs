//! Application configuration loaded from environment variables.
//!
//! Secrets (session secret, API keys, storage credentials) are consumed here
//! and never logged.

use std::env;

use blog_infra::{AssistConfig, DatabaseConfig, MediaConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated origin allowlist; absent or `*` means any origin.
    pub cors_origins: Option<String>,
    pub database: Option<DatabaseConfig>,
    pub media: Option<MediaConfig>,
    pub assistant: Option<AssistConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_origins: env::var("CORS_ORIGINS").ok(),
            database,
            media: MediaConfig::from_env(),
            assistant: AssistConfig::from_env(),
        }
    }
}
