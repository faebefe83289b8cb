//! Multipart parsing for document uploads

use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::http::StatusCode;
use bytes::Bytes;
use docsum_core::AppError;

/// Name of the multipart field carrying the document
pub const DOCUMENT_FIELD: &str = "document";

#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub original_name: String,
    pub data: Bytes,
}

/// Pull the `document` file out of a multipart body.
///
/// Returns `Ok(None)` when there is no such file part (including a request
/// that is not multipart at all); the upload service turns that into its own
/// client error. A body over the size limit is rejected here, before the
/// upload service sees anything.
pub async fn extract_document(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Option<UploadedDocument>, AppError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!(rejection = %rejection, "Request is not a multipart upload");
            return Ok(None);
        }
    };

    let mut document = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(DOCUMENT_FIELD) || document.is_some() {
            continue;
        }
        let Some(original_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await.map_err(multipart_error)?;
        document = Some(UploadedDocument {
            original_name,
            data,
        });
    }

    Ok(document)
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(format!("Failed to read multipart body: {}", err.body_text()))
    }
}
