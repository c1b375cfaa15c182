//! Shared application state: one trait object per port.
//!
//! Every handler reaches its dependencies through `AppState`, so tests can
//! swap any port for an in-memory or stub implementation.

use std::sync::Arc;

use blog_core::ports::{
    AdminRepository, ContentAssistant, MediaStorage, PasswordService, PostRepository, TokenService,
};
use blog_infra::{
    Argon2PasswordService, ChatCompletionsAssistant, CloudinaryStorage, InMemoryAdminRepository,
    InMemoryPostRepository, JwtTokenService, PostgresAdminRepository, PostgresPostRepository,
    UnconfiguredAssistant, UnconfiguredStorage,
};

use crate::config::AppConfig;

/// Application state shared across all workers.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub admins: Arc<dyn AdminRepository>,
    pub media: Arc<dyn MediaStorage>,
    pub assistant: Arc<dyn ContentAssistant>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Build state from configuration, falling back to in-memory stores when
    /// no database is configured or reachable.
    pub async fn new(config: &AppConfig) -> Self {
        let (posts, admins): (Arc<dyn PostRepository>, Arc<dyn AdminRepository>) =
            match &config.database {
                Some(db_config) => match db_config.connect().await {
                    Ok(conn) => {
                        tracing::info!("Connected to Postgres");
                        let conn = Arc::new(conn);
                        (
                            Arc::new(PostgresPostRepository::new(Arc::clone(&conn))),
                            Arc::new(PostgresAdminRepository::new(conn)),
                        )
                    }
                    Err(e) => {
                        tracing::error!("Database connection failed: {e}. Using in-memory stores.");
                        (
                            Arc::new(InMemoryPostRepository::new()),
                            Arc::new(InMemoryAdminRepository::new()),
                        )
                    }
                },
                None => {
                    tracing::warn!("DATABASE_URL not set. Using in-memory stores.");
                    (
                        Arc::new(InMemoryPostRepository::new()),
                        Arc::new(InMemoryAdminRepository::new()),
                    )
                }
            };

        let media: Arc<dyn MediaStorage> = match config.media.clone() {
            Some(media_config) => Arc::new(CloudinaryStorage::new(media_config)),
            None => {
                tracing::warn!("Cloudinary not configured. Image uploads disabled.");
                Arc::new(UnconfiguredStorage)
            }
        };

        let assistant: Arc<dyn ContentAssistant> = match config.assistant.clone() {
            Some(assist_config) => Arc::new(ChatCompletionsAssistant::new(assist_config)),
            None => {
                tracing::info!("LLM_API_KEY not set. AI suggestions degrade to empty.");
                Arc::new(UnconfiguredAssistant)
            }
        };

        tracing::info!("Application state initialized");

        Self {
            posts,
            admins,
            media,
            assistant,
            tokens: Arc::new(JwtTokenService::from_env()),
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }
}
