//! Route configuration and setup.

use crate::api_doc;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
    Json, Router,
};
use docsum_core::Config;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Room for multipart framing around the document itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router {
    let upload_limit = config.max_document_size_bytes() + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/hello", get(handlers::health::hello))
        .route(
            "/upload",
            post(handlers::upload::upload_document).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/documents/{document_id}/summary",
            get(handlers::documents::get_summary),
        )
        .route(
            "/documents/{document_id}/translation/{language}",
            get(handlers::documents::get_translation),
        )
        .route("/events", post(handlers::events::handle_event))
        .route(
            "/api/openapi.json",
            get(|| async { Json(api_doc::get_openapi_spec()) }),
        )
        .with_state(state)
        .merge(utoipa_rapidoc::RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(setup_cors()),
        )
}

/// Any origin, with credentials. Origin and headers are mirrored since a
/// wildcard cannot be combined with credentials.
fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
