//! Database connection management and repositories.

mod connections;
pub mod entity;
mod memory;
mod postgres_repo;

pub use connections::DatabaseConfig;
pub use memory::{InMemoryAdminRepository, InMemoryPostRepository};
pub use postgres_repo::{PostgresAdminRepository, PostgresPostRepository};

#[cfg(test)]
mod tests;
