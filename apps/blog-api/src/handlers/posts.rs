//! Public reader endpoints: listing, single post, counters, labels.

use actix_web::{HttpResponse, web};

use blog_core::RepoError;
use blog_core::ports::PublicPostFilter;
use blog_shared::dto::{LikeCountResponse, ListPostsQuery, PostListResponse, ViewCountResponse};

use crate::middleware::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let defaults = PublicPostFilter::default();

    let filter = PublicPostFilter {
        status: query.status.unwrap_or(defaults.status),
        category: query.category,
        search: query.search,
        limit: query.limit.unwrap_or(defaults.limit),
        skip: query.skip.unwrap_or(defaults.skip),
    };

    let (posts, total) = state.posts.list_public(&filter).await?;

    Ok(HttpResponse::Ok().json(PostListResponse { posts, total }))
}

/// GET /api/posts/{slug}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let post = state
        .posts
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts/{slug}/view
pub async fn record_view(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let views = state
        .posts
        .increment_views(&slug)
        .await
        .map_err(not_found_post)?;

    Ok(HttpResponse::Ok().json(ViewCountResponse { views }))
}

/// POST /api/posts/{slug}/like
pub async fn record_like(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let likes = state
        .posts
        .increment_likes(&slug)
        .await
        .map_err(not_found_post)?;

    Ok(HttpResponse::Ok().json(LikeCountResponse { likes }))
}

/// GET /api/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.posts.published_categories().await?;

    Ok(HttpResponse::Ok().json(categories))
}

/// GET /api/tags
pub async fn list_tags(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.posts.published_tags().await?;

    Ok(HttpResponse::Ok().json(tags))
}

fn not_found_post(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound => AppError::NotFound("Post not found".to_string()),
        other => other.into(),
    }
}
