//! SeaORM entities.

pub mod admin;
pub mod post;
