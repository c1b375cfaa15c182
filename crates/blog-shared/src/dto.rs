//! Data Transfer Objects - request/response types for the API.
//!
//! Wire field names are camelCase to match the reader/admin frontends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blog_core::domain::{Post, PostStatus};

/// Request to bootstrap the first admin account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSetupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response to a successful admin setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSetupResponse {
    pub message: String,
    pub id: Uuid,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Query parameters for the public post listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPostsQuery {
    pub status: Option<PostStatus>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub limit: Option<u64>,
    pub skip: Option<u64>,
}

/// Query parameters for the admin post listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminListPostsQuery {
    pub status: Option<PostStatus>,
    pub search: Option<String>,
}

/// Public listing page plus the total matching count.
#[derive(Debug, Clone, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<Post>,
    pub total: u64,
}

/// Payload for creating or updating a post.
///
/// Title and content are mandatory on both paths; everything else is
/// optional. On update, absent fields keep their stored values. `useAI` asks
/// the server to fill missing excerpt/SEO fields from the assistant on
/// create.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePostRequest {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub tags: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub status: Option<PostStatus>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub published_date: Option<DateTime<Utc>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub og_image: Option<String>,
    pub twitter_card: Option<String>,
    pub featured_image: Option<String>,
    #[serde(rename = "useAI", default)]
    pub use_ai: bool,
}

/// Response to a view-counter increment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewCountResponse {
    pub views: i64,
}

/// Response to a like-counter increment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeCountResponse {
    pub likes: i64,
}

/// Response to an image upload: the asset's public URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Request for AI excerpt generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcerptRequest {
    pub content: String,
}

/// Response carrying the generated excerpt (empty when the assistant is
/// unavailable).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcerptResponse {
    pub excerpt: String,
}

/// Request for AI SEO generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoRequest {
    pub title: String,
    pub content: String,
}

/// Response carrying the raw two-line SEO blob: description, then keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoResponse {
    #[serde(rename = "seoData")]
    pub seo_data: String,
}
