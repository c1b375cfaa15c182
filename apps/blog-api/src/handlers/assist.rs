//! AI suggestion endpoints. Assistant failures degrade to an empty string so
//! the admin editor keeps working without the LLM.

use actix_web::{HttpResponse, web};

use blog_shared::dto::{ExcerptRequest, ExcerptResponse, SeoRequest, SeoResponse};

use crate::middleware::{AppResult, Identity};
use crate::state::AppState;

/// POST /api/ai/excerpt
pub async fn generate_excerpt(
    _identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<ExcerptRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let excerpt = match state.assistant.generate_excerpt(&req.content).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Excerpt generation failed: {e}");
            String::new()
        }
    };

    Ok(HttpResponse::Ok().json(ExcerptResponse { excerpt }))
}

/// POST /api/ai/seo
pub async fn generate_seo(
    _identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<SeoRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let seo_data = match state.assistant.generate_seo(&req.title, &req.content).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("SEO generation failed: {e}");
            String::new()
        }
    };

    Ok(HttpResponse::Ok().json(SeoResponse { seo_data }))
}
