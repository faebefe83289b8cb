//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`; any `AppError` renders as
//! `(status, {"error": client_message})` and is logged at its own level.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docsum_core::{AppError, ErrorMetadata, LogLevel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rule: both the trait and `AppError` are foreign to this crate)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::from(err))
    }
}

pub(crate) fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, error_code, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, error_code, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(
                error = %error,
                error_type,
                error_code,
                details = %error.detailed_message(),
                "Error occurred"
            );
        }
    }
}

/// Status code and body for an error, after logging it.
pub(crate) fn error_parts(error: &AppError) -> (StatusCode, ErrorResponse) {
    log_error(error);
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        ErrorResponse {
            error: error.client_message(),
        },
    )
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let (status, body) = error_parts(&self.0);
        (status, Json(body)).into_response()
    }
}
