//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod assist;
mod auth;
mod media;
mod repository;

pub use assist::{AssistError, ContentAssistant};
pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use media::{MediaError, MediaStorage};
pub use repository::{
    AdminPostFilter, AdminRepository, DashboardStats, PostRepository, PublicPostFilter,
};
