use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Admin, Post, PostStatus};
use crate::error::RepoError;

/// Filter for the public post listing.
#[derive(Debug, Clone)]
pub struct PublicPostFilter {
    pub status: PostStatus,
    /// Membership test against the post's category labels.
    pub category: Option<String>,
    /// Case-insensitive substring over title, excerpt and content.
    pub search: Option<String>,
    pub limit: u64,
    pub skip: u64,
}

impl Default for PublicPostFilter {
    fn default() -> Self {
        Self {
            status: PostStatus::Published,
            category: None,
            search: None,
            limit: 10,
            skip: 0,
        }
    }
}

/// Filter for the admin post listing (all statuses by default).
#[derive(Debug, Clone, Default)]
pub struct AdminPostFilter {
    pub status: Option<PostStatus>,
    /// Case-insensitive substring over title and excerpt.
    pub search: Option<String>,
}

/// Aggregate counters shown on the admin dashboard.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_posts: u64,
    pub published_posts: u64,
    pub draft_posts: u64,
    pub scheduled_posts: u64,
    pub total_views: i64,
    pub total_likes: i64,
}

/// Post repository.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// Reader-facing listing, ordered by publish date descending.
    /// Returns the page plus the total matching count.
    async fn list_public(&self, filter: &PublicPostFilter) -> Result<(Vec<Post>, u64), RepoError>;

    /// Admin listing, ordered by creation date descending.
    async fn list_admin(&self, filter: &AdminPostFilter) -> Result<Vec<Post>, RepoError>;

    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;

    /// Atomically bump the view counter, returning the new value.
    async fn increment_views(&self, slug: &str) -> Result<i64, RepoError>;

    /// Atomically bump the like counter, returning the new value.
    async fn increment_likes(&self, slug: &str) -> Result<i64, RepoError>;

    /// Distinct category labels across published posts, first-seen order.
    async fn published_categories(&self) -> Result<Vec<String>, RepoError>;

    /// Distinct tag labels across published posts, first-seen order.
    async fn published_tags(&self) -> Result<Vec<String>, RepoError>;

    async fn dashboard_stats(&self) -> Result<DashboardStats, RepoError>;
}

/// Admin account repository.
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;

    async fn insert(&self, admin: Admin) -> Result<Admin, RepoError>;
}
