//! Admin endpoints: one-time setup, login, dashboard, and post management.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use blog_core::RepoError;
use blog_core::domain::{Admin, Post, PostStatus};
use blog_core::ports::AdminPostFilter;
use blog_shared::MessageResponse;
use blog_shared::dto::{
    AdminListPostsQuery, AdminSetupRequest, AdminSetupResponse, AuthResponse, LoginRequest,
    SavePostRequest,
};

use crate::middleware::{AppError, AppResult, Identity};
use crate::state::AppState;

/// POST /api/admin/setup
///
/// Bootstraps the first admin account. Permanently disabled once any admin
/// row exists.
pub async fn setup(
    state: web::Data<AppState>,
    body: web::Json<AdminSetupRequest>,
) -> AppResult<HttpResponse> {
    if state.admins.count().await? > 0 {
        return Err(AppError::Conflict("Admin account already exists".to_string()));
    }

    let req = body.into_inner();

    if req.username.trim().is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("A valid email is required".to_string()));
    }
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let password_hash = state
        .passwords
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let admin = state
        .admins
        .insert(Admin::new(req.username, req.email, password_hash))
        .await?;

    tracing::info!(admin_id = %admin.id, "Admin account created");

    Ok(HttpResponse::Ok().json(AdminSetupResponse {
        message: "Admin account created".to_string(),
        id: admin.id,
    }))
}

/// POST /api/admin/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Same response for unknown email and wrong password.
    let admin = state
        .admins
        .find_by_email(&req.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let valid = state
        .passwords
        .verify(&req.password, &admin.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized);
    }

    let access_token = state
        .tokens
        .generate_token(admin.id, &admin.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.expiration_seconds() as u64,
    }))
}

/// GET /api/admin/dashboard
pub async fn dashboard(
    _identity: Identity,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let stats = state.posts.dashboard_stats().await?;

    Ok(HttpResponse::Ok().json(stats))
}

/// GET /api/admin/posts
pub async fn list_posts(
    _identity: Identity,
    state: web::Data<AppState>,
    query: web::Query<AdminListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let filter = AdminPostFilter {
        status: query.status,
        search: query.search,
    };

    let posts = state.posts.list_admin(&filter).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/admin/posts
pub async fn create_post(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<SavePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate_save(&req)?;

    // Snapshot the author's username onto the post.
    let admin = state
        .admins
        .find_by_email(&identity.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let mut post = Post::new(admin.id, admin.username, req.title.clone(), req.content);
    post.excerpt = req.excerpt;
    post.tags = req.tags.unwrap_or_default();
    post.categories = req.categories.unwrap_or_default();
    post.status = req.status.unwrap_or_default();
    post.scheduled_date = req.scheduled_date;
    post.meta_title = Some(req.meta_title.unwrap_or(req.title));
    post.meta_description = req.meta_description;
    post.meta_keywords = req.meta_keywords;
    post.og_image = req.og_image;
    post.twitter_card = req.twitter_card;
    post.featured_image = req.featured_image;

    if post.status == PostStatus::Published {
        post.published_date = Some(req.published_date.unwrap_or_else(Utc::now));
    }

    if req.use_ai && !post.content.is_empty() {
        apply_ai_suggestions(&state, &mut post).await;
    }

    let saved = state.posts.insert(post).await?;

    tracing::info!(post_id = %saved.id, slug = %saved.slug, "Post created");

    Ok(HttpResponse::Ok().json(saved))
}

/// PUT /api/admin/posts/{id}
pub async fn update_post(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<SavePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    validate_save(&req)?;

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    // Absent payload fields keep their stored values.
    post.title = req.title;
    post.content = req.content;
    if let Some(excerpt) = req.excerpt {
        post.excerpt = Some(excerpt);
    }
    if let Some(tags) = req.tags {
        post.tags = tags;
    }
    if let Some(categories) = req.categories {
        post.categories = categories;
    }
    if let Some(status) = req.status {
        post.status = status;
    }
    if let Some(scheduled) = req.scheduled_date {
        post.scheduled_date = Some(scheduled);
    }
    if let Some(meta_title) = req.meta_title {
        post.meta_title = Some(meta_title);
    }
    if let Some(meta_description) = req.meta_description {
        post.meta_description = Some(meta_description);
    }
    if let Some(meta_keywords) = req.meta_keywords {
        post.meta_keywords = Some(meta_keywords);
    }
    if let Some(og_image) = req.og_image {
        post.og_image = Some(og_image);
    }
    if let Some(twitter_card) = req.twitter_card {
        post.twitter_card = Some(twitter_card);
    }
    if let Some(featured_image) = req.featured_image {
        post.featured_image = Some(featured_image);
    }

    // The first transition into `published` stamps the publish date; an
    // explicit value in the payload always wins.
    if let Some(explicit) = req.published_date {
        post.published_date = Some(explicit);
    } else if post.status == PostStatus::Published && post.published_date.is_none() {
        post.published_date = Some(Utc::now());
    }
    post.updated_at = Utc::now();

    let saved = state.posts.update(post).await.map_err(not_found_post)?;

    Ok(HttpResponse::Ok().json(saved))
}

/// DELETE /api/admin/posts/{id}
pub async fn delete_post(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await.map_err(not_found_post)?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted")))
}

fn validate_save(req: &SavePostRequest) -> Result<(), AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    if req.content.trim().is_empty() {
        return Err(AppError::BadRequest("Content is required".to_string()));
    }
    Ok(())
}

fn not_found_post(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound => AppError::NotFound("Post not found".to_string()),
        other => other.into(),
    }
}

/// Fill missing excerpt and SEO fields from the assistant. Failures only log;
/// saving the post never blocks on the LLM.
async fn apply_ai_suggestions(state: &AppState, post: &mut Post) {
    if post.excerpt.as_deref().unwrap_or("").is_empty() {
        match state.assistant.generate_excerpt(&post.content).await {
            Ok(excerpt) if !excerpt.is_empty() => post.excerpt = Some(excerpt),
            Ok(_) => {}
            Err(e) => tracing::warn!("Excerpt generation failed: {e}"),
        }
    }

    if post.meta_description.is_none() || post.meta_keywords.is_none() {
        match state.assistant.generate_seo(&post.title, &post.content).await {
            Ok(blob) => {
                let (description, keywords) = parse_seo_blob(&blob);
                if post.meta_description.is_none() {
                    post.meta_description = description;
                }
                if post.meta_keywords.is_none() {
                    post.meta_keywords = keywords;
                }
            }
            Err(e) => tracing::warn!("SEO generation failed: {e}"),
        }
    }
}

/// The SEO blob is two lines: description, then keywords, each usually
/// prefixed with its enumeration number.
fn parse_seo_blob(blob: &str) -> (Option<String>, Option<String>) {
    let mut lines = blob.lines().filter(|l| !l.trim().is_empty());

    let description = lines.next().map(strip_enumeration).filter(|s| !s.is_empty());
    let keywords = lines.next().map(strip_enumeration).filter(|s| !s.is_empty());

    (description, keywords)
}

fn strip_enumeration(line: &str) -> String {
    let trimmed = line.trim();
    trimmed
        .strip_prefix("1.")
        .or_else(|| trimmed.strip_prefix("2."))
        .unwrap_or(trimmed)
        .trim_start()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seo_blob_strips_enumeration() {
        let blob = "1. Latest SSC CGL notification and dates.\n2. ssc, cgl, jobs, exam, 2024";

        let (description, keywords) = parse_seo_blob(blob);

        assert_eq!(
            description.as_deref(),
            Some("Latest SSC CGL notification and dates.")
        );
        assert_eq!(keywords.as_deref(), Some("ssc, cgl, jobs, exam, 2024"));
    }

    #[test]
    fn test_parse_seo_blob_without_enumeration() {
        let (description, keywords) = parse_seo_blob("A plain description\nkw1, kw2");

        assert_eq!(description.as_deref(), Some("A plain description"));
        assert_eq!(keywords.as_deref(), Some("kw1, kw2"));
    }

    #[test]
    fn test_parse_seo_blob_single_line() {
        let (description, keywords) = parse_seo_blob("only a description");

        assert!(description.is_some());
        assert!(keywords.is_none());
    }
}
