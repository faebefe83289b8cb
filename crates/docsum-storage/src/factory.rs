#[cfg(feature = "storage-local")]
use crate::LocalStorage;
#[cfg(feature = "storage-s3")]
use crate::S3Storage;
use crate::{Storage, StorageBackend, StorageResult};
#[cfg(not(all(feature = "storage-s3", feature = "storage-local")))]
use crate::StorageError;
use docsum_core::Config;
use std::sync::Arc;

/// Create a storage backend based on configuration
///
/// The bucket is not resolved here; callers pass it per operation.
#[cfg(feature = "storage-s3")]
pub async fn create_storage(
    config: &Config,
    sdk_config: &aws_config::SdkConfig,
) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend() {
        StorageBackend::S3 => Ok(Arc::new(S3Storage::new(sdk_config))),
        StorageBackend::Local => create_local(config).await,
    }
}

/// Create a storage backend based on configuration
#[cfg(not(feature = "storage-s3"))]
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend() {
        StorageBackend::S3 => Err(StorageError::ConfigError(
            "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
        )),
        StorageBackend::Local => create_local(config).await,
    }
}

#[cfg(feature = "storage-local")]
async fn create_local(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    tracing::info!(path = %config.local_storage_path(), "Using local filesystem storage");
    let storage = LocalStorage::new(config.local_storage_path()).await?;
    Ok(Arc::new(storage))
}

#[cfg(not(feature = "storage-local"))]
async fn create_local(_config: &Config) -> StorageResult<Arc<dyn Storage>> {
    Err(StorageError::ConfigError(
        "Local storage backend not available (storage-local feature not enabled)".to_string(),
    ))
}
