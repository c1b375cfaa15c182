//! HTTP route handlers.

mod admin;
mod assist;
mod health;
mod posts;
mod upload;


use actix_web::{HttpRequest, HttpResponse, web};

use blog_shared::ErrorResponse;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Liveness
            .route("/health", web::get().to(health::health_check))
            // Public reader surface
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts/{slug}", web::get().to(posts::get_post))
            .route("/posts/{slug}/view", web::post().to(posts::record_view))
            .route("/posts/{slug}/like", web::post().to(posts::record_like))
            .route("/categories", web::get().to(posts::list_categories))
            .route("/tags", web::get().to(posts::list_tags))
            // Admin bootstrap + session
            .route("/admin/setup", web::post().to(admin::setup))
            .route("/admin/login", web::post().to(admin::login))
            // Admin dashboard + post management
            .route("/admin/dashboard", web::get().to(admin::dashboard))
            .route("/admin/posts", web::get().to(admin::list_posts))
            .route("/admin/posts", web::post().to(admin::create_post))
            .route("/admin/posts/{id}", web::put().to(admin::update_post))
            .route("/admin/posts/{id}", web::delete().to(admin::delete_post))
            // Integrations
            .route("/upload", web::post().to(upload::upload_image))
            .route("/ai/excerpt", web::post().to(assist::generate_excerpt))
            .route("/ai/seo", web::post().to(assist::generate_seo))
            .default_service(web::route().to(not_found)),
    );
}

/// Catch-all for unmatched routes under `/api`.
async fn not_found(req: HttpRequest) -> HttpResponse {
    let route = req.path().strip_prefix("/api").unwrap_or(req.path());
    HttpResponse::NotFound().json(ErrorResponse::new(format!("Route {route} not found")))
}
