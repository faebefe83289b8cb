//! Docsum Core Library
//!
//! This crate provides the configuration, error taxonomy and domain models
//! shared by every Docsum component.

pub mod backend_types;
pub mod config;
pub mod document_kind;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use backend_types::{QueueBackend, ResultStoreBackend, StorageBackend};
pub use config::Config;
pub use document_kind::DocumentKind;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    DocumentResults, MessageResponse, SummaryResponse, TranslationResponse, UploadResponse,
    WorkItem,
};
