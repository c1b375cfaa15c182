//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! Postgres repositories via SeaORM (plus in-memory fallbacks), JWT session
//! tokens, Argon2 password hashing, and the external media/LLM clients.

pub mod assist;
pub mod auth;
pub mod database;
pub mod media;

pub use assist::{AssistConfig, ChatCompletionsAssistant, UnconfiguredAssistant};
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{
    DatabaseConfig, InMemoryAdminRepository, InMemoryPostRepository, PostgresAdminRepository,
    PostgresPostRepository,
};
pub use media::{CloudinaryStorage, MediaConfig, UnconfiguredStorage};
