//! # Blog Shared
//!
//! Request/response types shared across the API surface.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, MessageResponse};
