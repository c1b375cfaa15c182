//! Health check endpoint.

use actix_web::HttpResponse;
use serde_json::json;

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "blog-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
