//! HTTP-layer plumbing: the session identity extractor and the error type
//! handlers return.

pub mod auth;
pub mod error;

pub use auth::Identity;
pub use error::{AppError, AppResult};
