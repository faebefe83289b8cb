use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
///
/// Each bucket is a directory under `base_path`.
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance rooted at `base_path`
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    /// Convert bucket and key to a filesystem path
    ///
    /// Only plain path components are accepted, so neither the bucket nor the
    /// key can escape the storage root.
    fn object_path(&self, bucket: &str, key: &str) -> StorageResult<PathBuf> {
        validate_segment(bucket)?;
        validate_segment(key)?;
        Ok(self.base_path.join(bucket).join(key))
    }
}

fn validate_segment(value: &str) -> StorageResult<()> {
    if value.is_empty() {
        return Err(StorageError::InvalidKey("empty path segment".to_string()));
    }

    let path = Path::new(value);
    if path
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(StorageError::InvalidKey(format!(
            "'{}' contains invalid path components",
            value
        )));
    }

    Ok(())
}

#[async_trait]
impl Storage for LocalStorage {
    async fn put_object(&self, bucket: &str, key: &str, data: Bytes) -> StorageResult<()> {
        let path = self.object_path(bucket, key)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create {}: {}", path.display(), e))
        })?;
        file.write_all(&data).await?;
        file.flush().await?;

        tracing::debug!(
            bucket = %bucket,
            key = %key,
            size_bytes = data.len() as u64,
            "Local object written"
        );

        Ok(())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<Bytes> {
        let path = self.object_path(bucket, key)?;

        match fs::read(&path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(StorageError::DownloadFailed(e.to_string())),
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
