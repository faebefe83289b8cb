use crate::error::ErrorResponse;
use crate::router::{RawEvent, RouterResponse};
use crate::state::AppState;
use axum::extract::State;
use bytes::Bytes;
use docsum_core::AppError;
use std::sync::Arc;

/// Raw event entry point for an external trigger
#[utoipa::path(
    post,
    path = "/events",
    tag = "events",
    request_body(content = inline(Object), content_type = "application/json",
        description = "`{\"Records\": [...]}` queue batch or `{\"pathParameters\": {...}}` read request"),
    responses(
        (status = 200, description = "Event handled"),
        (status = 400, description = "Unknown event type", body = ErrorResponse),
        (status = 404, description = "Requested field not stored"),
        (status = 500, description = "Processing or lookup failure", body = ErrorResponse)
    )
)]
pub async fn handle_event(State(state): State<Arc<AppState>>, body: Bytes) -> RouterResponse {
    match serde_json::from_slice::<RawEvent>(&body) {
        Ok(raw) => state.event_router.handle(raw).await,
        Err(e) => {
            tracing::debug!(error = %e, "Event body did not match any envelope");
            RouterResponse::error(&AppError::UnknownEventType)
        }
    }
}
