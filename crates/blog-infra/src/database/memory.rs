//! In-memory repositories.
//!
//! Used when DATABASE_URL is not configured, and by handler tests. Counter
//! bumps happen under one write lock, matching the atomic-increment contract
//! of the Postgres implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Admin, Post, PostStatus};
use blog_core::error::RepoError;
use blog_core::ports::{
    AdminPostFilter, AdminRepository, DashboardStats, PostRepository, PublicPostFilter,
};

/// In-memory post repository.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_search(post: &Post, needle: &str, include_content: bool) -> bool {
    let needle = needle.to_lowercase();
    post.title.to_lowercase().contains(&needle)
        || post
            .excerpt
            .as_deref()
            .is_some_and(|e| e.to_lowercase().contains(&needle))
        || (include_content && post.content.to_lowercase().contains(&needle))
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn list_public(&self, filter: &PublicPostFilter) -> Result<(Vec<Post>, u64), RepoError> {
        let posts = self.posts.read().await;

        let mut matching: Vec<Post> = posts
            .iter()
            .filter(|p| p.status == filter.status)
            .filter(|p| {
                filter
                    .category
                    .as_ref()
                    .is_none_or(|c| p.categories.contains(c))
            })
            .filter(|p| {
                filter
                    .search
                    .as_ref()
                    .is_none_or(|s| matches_search(p, s, true))
            })
            .cloned()
            .collect();

        // Newest first; undated rows sort last, matching the Postgres repo.
        matching.sort_by(|a, b| match (&a.published_date, &b.published_date) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(filter.skip as usize)
            .take(filter.limit as usize)
            .collect();

        Ok((page, total))
    }

    async fn list_admin(&self, filter: &AdminPostFilter) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;

        let mut matching: Vec<Post> = posts
            .iter()
            .filter(|p| filter.status.is_none_or(|s| p.status == s))
            .filter(|p| {
                filter
                    .search
                    .as_ref()
                    .is_none_or(|s| matches_search(p, s, false))
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matching)
    }

    async fn insert(&self, entity: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.slug == entity.slug) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        posts.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        let Some(existing) = posts.iter_mut().find(|p| p.id == entity.id) else {
            return Err(RepoError::NotFound);
        };

        *existing = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;

        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn increment_views(&self, slug: &str) -> Result<i64, RepoError> {
        let mut posts = self.posts.write().await;

        let Some(post) = posts.iter_mut().find(|p| p.slug == slug) else {
            return Err(RepoError::NotFound);
        };

        post.views += 1;
        Ok(post.views)
    }

    async fn increment_likes(&self, slug: &str) -> Result<i64, RepoError> {
        let mut posts = self.posts.write().await;

        let Some(post) = posts.iter_mut().find(|p| p.slug == slug) else {
            return Err(RepoError::NotFound);
        };

        post.likes += 1;
        Ok(post.likes)
    }

    async fn published_categories(&self) -> Result<Vec<String>, RepoError> {
        let posts = self.posts.read().await;
        Ok(distinct_labels(&posts, |p| &p.categories))
    }

    async fn published_tags(&self) -> Result<Vec<String>, RepoError> {
        let posts = self.posts.read().await;
        Ok(distinct_labels(&posts, |p| &p.tags))
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, RepoError> {
        let posts = self.posts.read().await;

        let count_status =
            |status: PostStatus| posts.iter().filter(|p| p.status == status).count() as u64;

        Ok(DashboardStats {
            total_posts: posts.len() as u64,
            published_posts: count_status(PostStatus::Published),
            draft_posts: count_status(PostStatus::Draft),
            scheduled_posts: count_status(PostStatus::Scheduled),
            total_views: posts.iter().map(|p| p.views).sum(),
            total_likes: posts.iter().map(|p| p.likes).sum(),
        })
    }
}

fn distinct_labels<'a>(posts: &'a [Post], select: impl Fn(&'a Post) -> &'a Vec<String>) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for post in posts.iter().filter(|p| p.status == PostStatus::Published) {
        for label in select(post) {
            if !labels.contains(label) {
                labels.push(label.clone());
            }
        }
    }
    labels
}

/// In-memory admin repository.
#[derive(Default)]
pub struct InMemoryAdminRepository {
    admins: RwLock<Vec<Admin>>,
}

impl InMemoryAdminRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, RepoError> {
        let admins = self.admins.read().await;
        Ok(admins.iter().find(|a| a.email == email).cloned())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let admins = self.admins.read().await;
        Ok(admins.len() as u64)
    }

    async fn insert(&self, entity: Admin) -> Result<Admin, RepoError> {
        let mut admins = self.admins.write().await;

        if admins.iter().any(|a| a.email == entity.email) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        admins.push(entity.clone());
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn sample_post(slug: &str, status: PostStatus) -> Post {
        let mut post = Post::new(
            Uuid::new_v4(),
            "editor".to_string(),
            slug.replace('-', " "),
            "body".to_string(),
        );
        post.slug = slug.to_string();
        post.status = status;
        post
    }

    #[tokio::test]
    async fn test_concurrent_increments_never_lose_updates() {
        let repo = Arc::new(InMemoryPostRepository::new());
        repo.insert(sample_post("ssc-cgl", PostStatus::Published))
            .await
            .unwrap();

        let mut handles = Vec::new();
        for _ in 0..50 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.increment_views("ssc-cgl").await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let post = repo.find_by_slug("ssc-cgl").await.unwrap().unwrap();
        assert_eq!(post.views, 50);
    }

    #[tokio::test]
    async fn test_increment_unknown_slug_is_not_found() {
        let repo = InMemoryPostRepository::new();
        assert!(matches!(
            repo.increment_likes("missing").await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_public_listing_filters_by_category() {
        let repo = InMemoryPostRepository::new();

        let mut banking = sample_post("bank-po", PostStatus::Published);
        banking.categories = vec!["Banking".to_string()];
        banking.published_date = Some(chrono::Utc::now());
        repo.insert(banking).await.unwrap();

        let mut railways = sample_post("rrb-ntpc", PostStatus::Published);
        railways.categories = vec!["Railways".to_string()];
        railways.published_date = Some(chrono::Utc::now());
        repo.insert(railways).await.unwrap();

        let filter = PublicPostFilter {
            category: Some("Banking".to_string()),
            ..Default::default()
        };
        let (posts, total) = repo.list_public(&filter).await.unwrap();

        assert_eq!(total, 1);
        assert_eq!(posts[0].slug, "bank-po");
    }

    #[tokio::test]
    async fn test_public_listing_orders_by_publish_date_desc() {
        let repo = InMemoryPostRepository::new();
        let base = chrono::Utc::now();

        for (slug, offset) in [("older", 60i64), ("newest", 0), ("middle", 30)] {
            let mut post = sample_post(slug, PostStatus::Published);
            post.published_date = Some(base - chrono::Duration::minutes(offset));
            repo.insert(post).await.unwrap();
        }

        let (posts, _) = repo.list_public(&PublicPostFilter::default()).await.unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "middle", "older"]);
    }

    #[tokio::test]
    async fn test_undated_posts_sort_after_dated_ones() {
        let repo = InMemoryPostRepository::new();

        repo.insert(sample_post("undated", PostStatus::Published))
            .await
            .unwrap();

        let mut dated = sample_post("dated", PostStatus::Published);
        dated.published_date = Some(chrono::Utc::now());
        repo.insert(dated).await.unwrap();

        let (posts, _) = repo.list_public(&PublicPostFilter::default()).await.unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["dated", "undated"]);
    }

    #[tokio::test]
    async fn test_duplicate_slug_rejected() {
        let repo = InMemoryPostRepository::new();
        repo.insert(sample_post("dup", PostStatus::Draft)).await.unwrap();

        let result = repo.insert(sample_post("dup", PostStatus::Draft)).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_distinct_labels_exclude_unpublished() {
        let repo = InMemoryPostRepository::new();

        let mut live = sample_post("live", PostStatus::Published);
        live.tags = vec!["ssc".to_string(), "jobs".to_string()];
        repo.insert(live).await.unwrap();

        let mut draft = sample_post("pending", PostStatus::Draft);
        draft.tags = vec!["hidden".to_string()];
        repo.insert(draft).await.unwrap();

        let tags = repo.published_tags().await.unwrap();
        assert_eq!(tags, vec!["ssc".to_string(), "jobs".to_string()]);
    }
}
