use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::UploadService;
use crate::state::AppState;
use crate::utils::upload::extract_document;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use docsum_core::models::UploadResponse;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/upload",
    tag = "documents",
    request_body(content = inline(Object), content_type = "multipart/form-data",
        description = "Multipart form with the file in the `document` field"),
    responses(
        (status = 200, description = "Document stored and queued for processing", body = UploadResponse),
        (status = 400, description = "No document uploaded", body = ErrorResponse),
        (status = 413, description = "Document too large", body = ErrorResponse),
        (status = 500, description = "Configuration or dependency failure", body = ErrorResponse)
    )
)]
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let document = extract_document(multipart).await?;
    let response = UploadService::new(&state).upload(document).await?;
    Ok(Json(response))
}
