use docsum_core::AppError;
use docsum_services::{SummarizeError, TranslateError};
use docsum_storage::StorageError;
use thiserror::Error;

use crate::extract::ExtractionError;

/// What the queue layer should do with a work item whose processing failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Leave the message on the queue so it is delivered again.
    Redeliver,
    /// Acknowledge the message; another delivery cannot succeed.
    Drop,
}

/// Failure of one workflow step. Nothing after the failing step has run.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid work item: {0}")]
    InvalidWorkItem(String),

    #[error("{0}")]
    Configuration(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Failed to fetch document: {0}")]
    Fetch(#[from] StorageError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Summarize(#[from] SummarizeError),

    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error("Failed to store results: {0}")]
    Persist(#[source] AppError),
}

impl ProcessingError {
    pub fn disposition(&self) -> Disposition {
        match self {
            ProcessingError::InvalidWorkItem(_) | ProcessingError::UnsupportedFileType(_) => {
                Disposition::Drop
            }
            _ => Disposition::Redeliver,
        }
    }
}

impl From<ProcessingError> for AppError {
    fn from(err: ProcessingError) -> Self {
        match err {
            ProcessingError::InvalidWorkItem(msg) => AppError::BadRequest(msg),
            ProcessingError::Configuration(msg) => AppError::Configuration(msg),
            ProcessingError::UnsupportedFileType(filename) => {
                AppError::UnsupportedFileType(filename)
            }
            ProcessingError::Fetch(e) => AppError::Storage(e.to_string()),
            ProcessingError::Summarize(SummarizeError::MissingApiKey(key)) => {
                AppError::Configuration(format!("{} is not set", key))
            }
            ProcessingError::Summarize(e) => AppError::ExternalService(e.to_string()),
            ProcessingError::Translate(e) => AppError::ExternalService(e.to_string()),
            ProcessingError::Extraction(e) => AppError::Internal(e.to_string()),
            ProcessingError::Persist(e) => e,
        }
    }
}
