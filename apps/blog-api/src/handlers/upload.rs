//! Image upload endpoint delegating to the configured media storage.

use actix_multipart::form::{MultipartForm, bytes::Bytes};
use actix_web::{HttpResponse, web};

use blog_shared::dto::UploadResponse;

use crate::middleware::{AppError, AppResult, Identity};
use crate::state::AppState;

#[derive(MultipartForm)]
pub struct UploadForm {
    file: Bytes,
}

/// POST /api/upload
pub async fn upload_image(
    _identity: Identity,
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<UploadForm>,
) -> AppResult<HttpResponse> {
    let filename = form
        .file
        .file_name
        .clone()
        .unwrap_or_else(|| "upload".to_string());

    let url = state
        .media
        .upload_image(&filename, form.file.data.to_vec())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(UploadResponse { url }))
}
