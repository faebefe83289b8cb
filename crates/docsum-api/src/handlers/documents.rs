use crate::error::ErrorResponse;
use crate::router::{InboundEvent, RouterResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use docsum_core::models::{MessageResponse, SummaryResponse, TranslationResponse};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/documents/{document_id}/summary",
    tag = "documents",
    params(("document_id" = String, Path, description = "Document ID returned by the upload")),
    responses(
        (status = 200, description = "Stored summary", body = SummaryResponse),
        (status = 404, description = "No summary stored yet", body = MessageResponse),
        (status = 500, description = "Result store failure", body = ErrorResponse)
    )
)]
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(document_id): Path<String>,
) -> RouterResponse {
    state
        .event_router
        .dispatch(InboundEvent::SummaryLookup { document_id })
        .await
}

#[utoipa::path(
    get,
    path = "/documents/{document_id}/translation/{language}",
    tag = "documents",
    params(
        ("document_id" = String, Path, description = "Document ID returned by the upload"),
        ("language" = String, Path, description = "Target language code, e.g. `de`")
    ),
    responses(
        (status = 200, description = "Stored translation", body = TranslationResponse),
        (status = 404, description = "No translation stored yet", body = MessageResponse),
        (status = 500, description = "Result store failure", body = ErrorResponse)
    )
)]
pub async fn get_translation(
    State(state): State<Arc<AppState>>,
    Path((document_id, language)): Path<(String, String)>,
) -> RouterResponse {
    state
        .event_router
        .dispatch(InboundEvent::TranslationLookup {
            document_id,
            language,
        })
        .await
}
