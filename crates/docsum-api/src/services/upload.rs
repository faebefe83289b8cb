//! Upload intake: object write first, then the work item.

use std::sync::Arc;

use docsum_core::{AppError, Config, UploadResponse, WorkItem};
use docsum_queue::WorkQueue;
use docsum_storage::{document_object_key, Storage};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::upload::UploadedDocument;

pub const NO_DOCUMENT_UPLOADED: &str = "No document uploaded.";

pub struct UploadService {
    config: Arc<Config>,
    storage: Arc<dyn Storage>,
    queue: Arc<dyn WorkQueue>,
}

impl UploadService {
    pub fn new(state: &AppState) -> Self {
        Self {
            config: state.config.clone(),
            storage: state.storage.clone(),
            queue: state.queue.clone(),
        }
    }

    /// Store the document and enqueue it for processing.
    ///
    /// Nothing is written unless a document is present and both the bucket
    /// and the queue are configured. The queue message is sent only after the
    /// object write succeeded.
    pub async fn upload(
        &self,
        document: Option<UploadedDocument>,
    ) -> Result<UploadResponse, AppError> {
        let document =
            document.ok_or_else(|| AppError::BadRequest(NO_DOCUMENT_UPLOADED.to_string()))?;

        let bucket = self.config.require_s3_bucket_name()?;
        let queue_url = self.config.require_sqs_queue_url()?;

        let document_id = Uuid::new_v4().to_string();
        let key = document_object_key(&document_id, &document.original_name);
        let size = document.data.len();

        tracing::info!(
            document_id = %document_id,
            bucket = %bucket,
            key = %key,
            size_bytes = size as u64,
            "Uploading document"
        );

        self.storage
            .put_object(bucket, &key, document.data)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    key = %key,
                    "Error uploading document"
                );
                AppError::UploadFailed(e.to_string())
            })?;

        let body = WorkItem::new(document_id.clone(), key.clone())
            .to_message_body()
            .map_err(|e| AppError::UploadFailed(e.to_string()))?;

        let message_id = self
            .queue
            .send_message(queue_url, body)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    queue_url = %queue_url,
                    document_id = %document_id,
                    "Error enqueueing document"
                );
                AppError::UploadFailed(e.to_string())
            })?;

        tracing::info!(
            document_id = %document_id,
            message_id = %message_id,
            "Document queued for processing"
        );

        Ok(UploadResponse::uploaded(document_id))
    }
}
