use docsum_core::{AppError, DocumentResults, ResultStoreBackend};

pub const DOCUMENT_ID_ATTRIBUTE: &str = "documentId";
pub const SUMMARY_ATTRIBUTE: &str = "summary";
pub const TRANSLATION_ATTRIBUTE: &str = "translation";

/// Result record access
///
/// Lookups return `Ok(None)` both when the record is missing and when the
/// record exists without the requested field.
#[async_trait::async_trait]
pub trait ResultStore: Send + Sync {
    /// Merge `summary` and `translation` into the record, creating it if absent.
    /// Other attributes on the record are left untouched.
    async fn update_results(
        &self,
        table: &str,
        document_id: &str,
        results: &DocumentResults,
    ) -> Result<(), AppError>;

    async fn get_summary(&self, table: &str, document_id: &str) -> Result<Option<String>, AppError>;

    // Records carry a single translation, so the requested language is not part of the key.
    async fn get_translation(
        &self,
        table: &str,
        document_id: &str,
    ) -> Result<Option<String>, AppError>;

    fn backend_type(&self) -> ResultStoreBackend;
}
