//! Event router
//!
//! Every invocation arrives as one event envelope. The envelope is classified
//! once, at the boundary, into an [`InboundEvent`]; dispatch then matches on
//! the variant. The router holds no state of its own.

use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use docsum_core::{AppError, Config, WorkItem};
use docsum_db::ResultStore;
use docsum_processing::{DocumentWorkflow, ProcessingError};
use http::{header, HeaderValue, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::error_parts;

pub const SUMMARY_NOT_FOUND: &str = "Summary not found";
pub const TRANSLATION_NOT_FOUND: &str = "Translation not found";

/// Event envelope as delivered by the trigger: a queue batch under `Records`,
/// or a read request carrying `pathParameters`.
#[derive(Debug, Default, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "Records")]
    pub records: Option<Vec<RawRecord>>,
    #[serde(rename = "pathParameters")]
    pub path_parameters: Option<PathParameters>,
}

#[derive(Debug, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "messageId", default)]
    pub message_id: Option<String>,
    #[serde(rename = "receiptHandle", default)]
    pub receipt_handle: Option<String>,
    pub body: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PathParameters {
    #[serde(rename = "documentId")]
    pub document_id: Option<String>,
    pub language: Option<String>,
}

/// One queue record inside a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueRecord {
    pub message_id: String,
    pub receipt_handle: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    QueueBatch(Vec<QueueRecord>),
    SummaryLookup {
        document_id: String,
    },
    TranslationLookup {
        document_id: String,
        language: String,
    },
}

impl TryFrom<RawEvent> for InboundEvent {
    type Error = AppError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        if let Some(records) = raw.records {
            let records = records
                .into_iter()
                .enumerate()
                .map(|(index, record)| QueueRecord {
                    message_id: record.message_id.unwrap_or_else(|| index.to_string()),
                    receipt_handle: record.receipt_handle,
                    body: record.body,
                })
                .collect();
            return Ok(InboundEvent::QueueBatch(records));
        }

        let params = raw.path_parameters.unwrap_or_default();
        match (non_empty(params.document_id), non_empty(params.language)) {
            (Some(document_id), Some(language)) => Ok(InboundEvent::TranslationLookup {
                document_id,
                language,
            }),
            (Some(document_id), None) => Ok(InboundEvent::SummaryLookup { document_id }),
            (None, _) => Err(AppError::UnknownEventType),
        }
    }
}

/// The first record in a batch that failed. Records before `index` succeeded;
/// records after it were not attempted.
#[derive(Debug, thiserror::Error)]
#[error("record {index} (message {message_id}) failed: {error}")]
pub struct BatchFailure {
    pub index: usize,
    pub message_id: String,
    #[source]
    pub error: ProcessingError,
}

/// HTTP-shaped router result. Always carries the permissive CORS headers.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl RouterResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: json!({ "message": message }),
        }
    }

    pub fn error(err: &AppError) -> Self {
        let (status, body) = error_parts(err);
        Self {
            status,
            body: json!({ "error": body.error }),
        }
    }

    pub fn cors_headers() -> [(header::HeaderName, HeaderValue); 2] {
        [
            (
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("true"),
            ),
        ]
    }
}

impl IntoResponse for RouterResponse {
    fn into_response(self) -> Response {
        (self.status, Self::cors_headers(), Json(self.body)).into_response()
    }
}

#[derive(Clone)]
pub struct EventRouter {
    config: Arc<Config>,
    result_store: Arc<dyn ResultStore>,
    workflow: DocumentWorkflow,
}

impl EventRouter {
    pub fn new(
        config: Arc<Config>,
        result_store: Arc<dyn ResultStore>,
        workflow: DocumentWorkflow,
    ) -> Self {
        Self {
            config,
            result_store,
            workflow,
        }
    }

    /// Classify a raw envelope and dispatch it.
    pub async fn handle(&self, raw: RawEvent) -> RouterResponse {
        match InboundEvent::try_from(raw) {
            Ok(event) => self.dispatch(event).await,
            Err(e) => RouterResponse::error(&e),
        }
    }

    pub async fn dispatch(&self, event: InboundEvent) -> RouterResponse {
        match event {
            InboundEvent::QueueBatch(records) => match self.process_batch(&records).await {
                Ok(processed) => RouterResponse::ok(json!({
                    "message": format!("Processed {} record(s)", processed)
                })),
                Err(failure) => RouterResponse::error(&AppError::from(failure.error)),
            },
            InboundEvent::SummaryLookup { document_id } => self.fetch_summary(&document_id).await,
            InboundEvent::TranslationLookup {
                document_id,
                language,
            } => self.fetch_translation(&document_id, &language).await,
        }
    }

    /// Run the workflow for each record in order, stopping at the first failure.
    ///
    /// Returns the number of records processed. The failure is handed back
    /// untouched so the caller can decide between redelivery and drop.
    pub async fn process_batch(&self, records: &[QueueRecord]) -> Result<usize, BatchFailure> {
        for (index, record) in records.iter().enumerate() {
            let result = match WorkItem::from_message_body(&record.body) {
                Ok(item) => self.workflow.process(&item).await.map(|_| ()),
                Err(e) => Err(ProcessingError::InvalidWorkItem(e.to_string())),
            };

            if let Err(error) = result {
                tracing::error!(
                    message_id = %record.message_id,
                    index,
                    batch_size = records.len(),
                    error = %error,
                    "Error processing queue record"
                );
                return Err(BatchFailure {
                    index,
                    message_id: record.message_id.clone(),
                    error,
                });
            }
        }

        Ok(records.len())
    }

    async fn fetch_summary(&self, document_id: &str) -> RouterResponse {
        let table = match self.config.require_dynamodb_table_name() {
            Ok(table) => table,
            Err(e) => return RouterResponse::error(&e),
        };

        match self.result_store.get_summary(table, document_id).await {
            Ok(Some(summary)) => RouterResponse::ok(json!({ "summary": summary })),
            Ok(None) => {
                tracing::debug!(document_id = %document_id, "Summary not found");
                RouterResponse::not_found(SUMMARY_NOT_FOUND)
            }
            Err(e) => RouterResponse::error(&e),
        }
    }

    // The stored translation is not keyed by language; `language` is required
    // to route here but does not select a record.
    async fn fetch_translation(&self, document_id: &str, language: &str) -> RouterResponse {
        let table = match self.config.require_dynamodb_table_name() {
            Ok(table) => table,
            Err(e) => return RouterResponse::error(&e),
        };

        match self.result_store.get_translation(table, document_id).await {
            Ok(Some(translation)) => RouterResponse::ok(json!({ "translation": translation })),
            Ok(None) => {
                tracing::debug!(
                    document_id = %document_id,
                    language = %language,
                    "Translation not found"
                );
                RouterResponse::not_found(TRANSLATION_NOT_FOUND)
            }
            Err(e) => RouterResponse::error(&e),
        }
    }
}
