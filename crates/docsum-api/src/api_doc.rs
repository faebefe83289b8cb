//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use docsum_core::models::{
    MessageResponse, SummaryResponse, TranslationResponse, UploadResponse, WorkItem,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Docsum API",
        version = "0.1.0",
        description = "Document summarizer: upload a PDF, then fetch its summary and its translation once background processing has finished."
    ),
    paths(
        handlers::health::hello,
        handlers::upload::upload_document,
        handlers::documents::get_summary,
        handlers::documents::get_translation,
        handlers::events::handle_event,
    ),
    components(schemas(
        UploadResponse,
        SummaryResponse,
        TranslationResponse,
        MessageResponse,
        ErrorResponse,
        WorkItem,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "documents", description = "Upload and result lookup"),
        (name = "events", description = "Raw event envelopes from an external trigger")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
