#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use blog_core::domain::{Admin, Post, PostStatus};
    use blog_core::ports::{AdminRepository, PostRepository};

    use crate::database::entity::{admin, post};
    use crate::database::postgres_repo::{PostgresAdminRepository, PostgresPostRepository};

    fn post_model(slug: &str) -> post::Model {
        let now = Utc::now();
        post::Model {
            id: uuid::Uuid::new_v4(),
            slug: slug.to_owned(),
            title: "SSC CGL 2024".to_owned(),
            excerpt: Some("Applications are open.".to_owned()),
            content: "Apply before the deadline.".to_owned(),
            author: "editor".to_owned(),
            author_id: uuid::Uuid::new_v4(),
            categories: vec!["SSC".to_owned()],
            tags: vec!["ssc".to_owned(), "jobs".to_owned()],
            status: "published".to_owned(),
            scheduled_date: None,
            published_date: Some(now.into()),
            views: 7,
            likes: 2,
            meta_title: None,
            meta_description: None,
            meta_keywords: None,
            og_image: None,
            twitter_card: None,
            featured_image: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_slug() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model("ssc-cgl-2024")]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));

        let result: Option<Post> = repo.find_by_slug("ssc-cgl-2024").await.unwrap();

        let found = result.unwrap();
        assert_eq!(found.slug, "ssc-cgl-2024");
        assert_eq!(found.status, PostStatus::Published);
        assert_eq!(found.views, 7);
    }

    #[tokio::test]
    async fn test_unknown_status_string_degrades_to_draft() {
        let mut model = post_model("odd-row");
        model.status = "archived".to_owned();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(db));
        let found = repo.find_by_slug("odd-row").await.unwrap().unwrap();

        assert_eq!(found.status, PostStatus::Draft);
    }

    #[tokio::test]
    async fn test_find_admin_by_email() {
        let now = Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![admin::Model {
                id: uuid::Uuid::new_v4(),
                username: "editor".to_owned(),
                email: "editor@example.com".to_owned(),
                password_hash: "$argon2id$stub".to_owned(),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresAdminRepository::new(Arc::new(db));

        let result: Option<Admin> = repo.find_by_email("editor@example.com").await.unwrap();

        let found = result.unwrap();
        assert_eq!(found.username, "editor");
        assert_eq!(found.email, "editor@example.com");
    }
}
