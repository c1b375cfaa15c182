use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Scheduled,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Scheduled => "scheduled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(PostStatus::Draft),
            "published" => Some(PostStatus::Published),
            "scheduled" => Some(PostStatus::Scheduled),
            _ => None,
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post entity - a single content item with lifecycle status, SEO metadata,
/// and engagement counters.
///
/// `content` is an opaque string: either an Editor.js-style JSON block
/// document or lightly marked-up text. The format is not tagged; see
/// [`crate::render`] for the classification rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    /// Username snapshot of the authoring admin.
    pub author: String,
    pub author_id: Uuid,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub scheduled_date: Option<DateTime<Utc>>,
    /// Set automatically on the first transition into `published`;
    /// an explicit admin-supplied value overrides.
    pub published_date: Option<DateTime<Utc>>,
    /// Monotonic reader counters - never decremented.
    pub views: i64,
    pub likes: i64,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub og_image: Option<String>,
    pub twitter_card: Option<String>,
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new draft with a slug derived from the title.
    pub fn new(author_id: Uuid, author: String, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            slug: slugify(&title),
            title,
            excerpt: None,
            content,
            author,
            author_id,
            categories: Vec::new(),
            tags: Vec::new(),
            status: PostStatus::Draft,
            scheduled_date: None,
            published_date: None,
            views: 0,
            likes: 0,
            meta_title: None,
            meta_description: None,
            meta_keywords: None,
            og_image: None,
            twitter_card: None,
            featured_image: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Derive a URL-safe slug from a post title: lowercase, runs of
/// non-alphanumeric characters collapse to a single hyphen, leading and
/// trailing hyphens are trimmed. Idempotent.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_title() {
        assert_eq!(slugify("SSC CGL 2024: Apply Now!"), "ssc-cgl-2024-apply-now");
    }

    #[test]
    fn test_slugify_trims_hyphens() {
        assert_eq!(slugify("  --Hello, World--  "), "hello-world");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_idempotent() {
        let once = slugify("Railway Group D Result (Updated)");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_new_post_defaults() {
        let post = Post::new(
            Uuid::new_v4(),
            "editor".to_string(),
            "UPSC Notification".to_string(),
            "body".to_string(),
        );

        assert_eq!(post.slug, "upsc-notification");
        assert_eq!(post.status, PostStatus::Draft);
        assert_eq!(post.views, 0);
        assert_eq!(post.likes, 0);
        assert!(post.published_date.is_none());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [PostStatus::Draft, PostStatus::Published, PostStatus::Scheduled] {
            assert_eq!(PostStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(PostStatus::parse("archived"), None);
    }
}
