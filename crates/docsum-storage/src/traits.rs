//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Objects are immutable once written: the upload path writes each key exactly
/// once and the processing workflow only reads.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` under `key` in `bucket`.
    async fn put_object(&self, bucket: &str, key: &str, data: Bytes) -> StorageResult<()>;

    /// Read the full object at `key`. Missing objects yield `StorageError::NotFound`.
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<Bytes>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
