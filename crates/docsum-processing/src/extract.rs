use async_trait::async_trait;
use bytes::Bytes;
use docsum_core::DocumentKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("Text extraction aborted: {0}")]
    Aborted(String),
}

/// Turns raw document bytes into plain text
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, kind: DocumentKind, data: Bytes)
        -> Result<String, ExtractionError>;
}

/// PDF text extraction with `pdf-extract`
///
/// Parsing runs on the blocking pool. A parser panic on a malformed file
/// surfaces as `ExtractionError::Aborted` instead of taking the process down.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(
        &self,
        kind: DocumentKind,
        data: Bytes,
    ) -> Result<String, ExtractionError> {
        match kind {
            DocumentKind::Pdf => {
                let size = data.len();
                let text = tokio::task::spawn_blocking(move || {
                    pdf_extract::extract_text_from_mem(&data)
                })
                .await
                .map_err(|e| ExtractionError::Aborted(e.to_string()))?
                .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

                if text.trim().is_empty() {
                    tracing::warn!(size_bytes = size, "PDF text extraction returned empty");
                } else {
                    tracing::debug!(size_bytes = size, text_len = text.len(), "PDF text extracted");
                }
                Ok(text)
            }
        }
    }
}
