//! PostgreSQL repository implementations.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, NullOrdering};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use blog_core::domain::{Admin, Post, PostStatus};
use blog_core::error::RepoError;
use blog_core::ports::{
    AdminPostFilter, AdminRepository, DashboardStats, PostRepository, PublicPostFilter,
};

use super::entity::admin::{self, Entity as AdminEntity};
use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository. The connection pool is created once at
/// startup and shared between repositories.
pub struct PostgresPostRepository {
    db: Arc<DbConn>,
}

impl PostgresPostRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

/// PostgreSQL admin repository.
pub struct PostgresAdminRepository {
    db: Arc<DbConn>,
}

impl PostgresAdminRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

fn query_err(err: DbErr) -> RepoError {
    RepoError::Query(err.to_string())
}

fn insert_err(err: DbErr) -> RepoError {
    let message = err.to_string();
    if message.contains("duplicate") || message.contains("unique") {
        RepoError::Constraint("Entity already exists".to_string())
    } else {
        RepoError::Query(message)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn list_public(&self, filter: &PublicPostFilter) -> Result<(Vec<Post>, u64), RepoError> {
        let mut query =
            PostEntity::find().filter(post::Column::Status.eq(filter.status.as_str()));

        if let Some(category) = &filter.category {
            query = query.filter(Expr::cust_with_values(
                "? = ANY(categories)",
                [category.clone()],
            ));
        }

        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            query = query.filter(
                Condition::any()
                    .add(Expr::col(post::Column::Title).ilike(pattern.clone()))
                    .add(Expr::col(post::Column::Excerpt).ilike(pattern.clone()))
                    .add(Expr::col(post::Column::Content).ilike(pattern)),
            );
        }

        let total = query
            .clone()
            .count(self.db.as_ref())
            .await
            .map_err(query_err)?;

        // Undated rows sort after dated ones, matching the in-memory repo.
        let models = query
            .order_by_with_nulls(post::Column::PublishedDate, Order::Desc, NullOrdering::Last)
            .limit(filter.limit)
            .offset(filter.skip)
            .all(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok((models.into_iter().map(Into::into).collect(), total))
    }

    async fn list_admin(&self, filter: &AdminPostFilter) -> Result<Vec<Post>, RepoError> {
        let mut query = PostEntity::find();

        if let Some(status) = filter.status {
            query = query.filter(post::Column::Status.eq(status.as_str()));
        }

        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            query = query.filter(
                Condition::any()
                    .add(Expr::col(post::Column::Title).ilike(pattern.clone()))
                    .add(Expr::col(post::Column::Excerpt).ilike(pattern)),
            );
        }

        let models = query
            .order_by_desc(post::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, entity: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = entity.into();
        let model = active.insert(self.db.as_ref()).await.map_err(insert_err)?;

        Ok(model.into())
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = entity.into();
        let model = active
            .update(self.db.as_ref())
            .await
            .map_err(|err| match err {
                DbErr::RecordNotUpdated => RepoError::NotFound,
                other => RepoError::Query(other.to_string()),
            })?;

        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn increment_views(&self, slug: &str) -> Result<i64, RepoError> {
        self.increment_counter(slug, post::Column::Views).await
    }

    async fn increment_likes(&self, slug: &str) -> Result<i64, RepoError> {
        self.increment_counter(slug, post::Column::Likes).await
    }

    async fn published_categories(&self) -> Result<Vec<String>, RepoError> {
        self.published_labels(post::Column::Categories).await
    }

    async fn published_tags(&self) -> Result<Vec<String>, RepoError> {
        self.published_labels(post::Column::Tags).await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, RepoError> {
        let total_posts = PostEntity::find()
            .count(self.db.as_ref())
            .await
            .map_err(query_err)?;

        let mut by_status = [0u64; 3];
        for (slot, status) in by_status.iter_mut().zip([
            PostStatus::Published,
            PostStatus::Draft,
            PostStatus::Scheduled,
        ]) {
            *slot = PostEntity::find()
                .filter(post::Column::Status.eq(status.as_str()))
                .count(self.db.as_ref())
                .await
                .map_err(query_err)?;
        }

        let counters: Vec<(i64, i64)> = PostEntity::find()
            .select_only()
            .column(post::Column::Views)
            .column(post::Column::Likes)
            .into_tuple()
            .all(self.db.as_ref())
            .await
            .map_err(query_err)?;

        let (total_views, total_likes) = counters
            .iter()
            .fold((0, 0), |(views, likes), (v, l)| (views + v, likes + l));

        Ok(DashboardStats {
            total_posts,
            published_posts: by_status[0],
            draft_posts: by_status[1],
            scheduled_posts: by_status[2],
            total_views,
            total_likes,
        })
    }
}

impl PostgresPostRepository {
    /// Counter bumps go through a single `SET col = col + 1` statement so
    /// concurrent readers never lose updates.
    async fn increment_counter(
        &self,
        slug: &str,
        column: post::Column,
    ) -> Result<i64, RepoError> {
        let result = PostEntity::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(post::Column::Slug.eq(slug))
            .exec(self.db.as_ref())
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        let value: Option<i64> = PostEntity::find()
            .select_only()
            .column(column)
            .filter(post::Column::Slug.eq(slug))
            .into_tuple()
            .one(self.db.as_ref())
            .await
            .map_err(query_err)?;

        value.ok_or(RepoError::NotFound)
    }

    /// Distinct labels across published posts, first-seen order. Mirrors the
    /// flatten-then-dedupe done at the query layer rather than in SQL.
    async fn published_labels(&self, column: post::Column) -> Result<Vec<String>, RepoError> {
        let rows: Vec<Vec<String>> = PostEntity::find()
            .select_only()
            .column(column)
            .filter(post::Column::Status.eq(PostStatus::Published.as_str()))
            .into_tuple()
            .all(self.db.as_ref())
            .await
            .map_err(query_err)?;

        let mut labels = Vec::new();
        for row in rows {
            for label in row {
                if !labels.contains(&label) {
                    labels.push(label);
                }
            }
        }

        Ok(labels)
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(admin_email = %masked, "Finding admin by email");

        let result = AdminEntity::find()
            .filter(admin::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn count(&self) -> Result<u64, RepoError> {
        AdminEntity::find()
            .count(self.db.as_ref())
            .await
            .map_err(query_err)
    }

    async fn insert(&self, entity: Admin) -> Result<Admin, RepoError> {
        let active: admin::ActiveModel = entity.into();
        let model = active.insert(self.db.as_ref()).await.map_err(insert_err)?;

        Ok(model.into())
    }
}
