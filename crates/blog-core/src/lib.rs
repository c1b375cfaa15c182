//! # Blog Core
//!
//! The domain layer of the Sarkari blog backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the post/admin entities, slug derivation, the content renderer, and the
//! ports that infrastructure must implement.

pub mod domain;
pub mod error;
pub mod ports;
pub mod render;

pub use error::RepoError;
