use std::sync::Arc;

use docsum_core::{Config, DocumentKind, DocumentResults, WorkItem};
use docsum_db::ResultStore;
use docsum_services::{Summarizer, Translator};
use docsum_storage::Storage;

use crate::error::ProcessingError;
use crate::extract::TextExtractor;

/// Fetch → extract → summarize → translate → persist, strictly in that order
///
/// The first failing step aborts the rest and its error is returned
/// unchanged. There is no checkpointing: a redelivered item repeats every
/// step, including the paid API calls.
#[derive(Clone)]
pub struct DocumentWorkflow {
    config: Arc<Config>,
    storage: Arc<dyn Storage>,
    extractor: Arc<dyn TextExtractor>,
    summarizer: Arc<dyn Summarizer>,
    translator: Arc<dyn Translator>,
    result_store: Arc<dyn ResultStore>,
}

impl DocumentWorkflow {
    pub fn new(
        config: Arc<Config>,
        storage: Arc<dyn Storage>,
        extractor: Arc<dyn TextExtractor>,
        summarizer: Arc<dyn Summarizer>,
        translator: Arc<dyn Translator>,
        result_store: Arc<dyn ResultStore>,
    ) -> Self {
        Self {
            config,
            storage,
            extractor,
            summarizer,
            translator,
            result_store,
        }
    }

    #[tracing::instrument(
        skip(self, item),
        fields(document_id = %item.document_id, filename = %item.filename)
    )]
    pub async fn process(&self, item: &WorkItem) -> Result<DocumentResults, ProcessingError> {
        let start = std::time::Instant::now();
        tracing::info!("Processing document");

        let bucket = self
            .config
            .require_s3_bucket_name()
            .map_err(|e| ProcessingError::Configuration(client_detail(e)))?;

        let data = self.storage.get_object(bucket, &item.filename).await?;

        let kind = DocumentKind::from_filename(&item.filename)
            .ok_or_else(|| ProcessingError::UnsupportedFileType(item.filename.clone()))?;
        let text = self.extractor.extract_text(kind, data).await?;
        let summary = self.summarizer.summarize(&text).await?;
        let translation = self
            .translator
            .translate(&summary, self.config.translation_target_language())
            .await?;

        let table = self
            .config
            .require_dynamodb_table_name()
            .map_err(|e| ProcessingError::Configuration(client_detail(e)))?;

        let results = DocumentResults {
            summary,
            translation,
        };
        self.result_store
            .update_results(table, &item.document_id, &results)
            .await
            .map_err(ProcessingError::Persist)?;

        tracing::info!(
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Document processed successfully"
        );

        Ok(results)
    }
}

// "<KEY> is not set" rather than the "Configuration error: ..." Display form
fn client_detail(err: docsum_core::AppError) -> String {
    match err {
        docsum_core::AppError::Configuration(msg) => msg,
        other => other.to_string(),
    }
}
