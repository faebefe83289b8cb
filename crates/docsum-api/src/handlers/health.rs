use axum::Json;
use docsum_core::models::MessageResponse;

#[utoipa::path(
    get,
    path = "/hello",
    tag = "health",
    responses((status = 200, description = "Service is up", body = MessageResponse))
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the Document Summarizer API!".to_string(),
    })
}
