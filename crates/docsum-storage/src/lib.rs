//! Docsum Storage Library
//!
//! Object storage for raw uploaded documents. Every operation takes the bucket
//! explicitly so callers resolve it from configuration at the point of use.
//!
//! # Storage key format
//!
//! Raw documents are stored under `{document_id}-{original_filename}`. The key
//! doubles as the filename carried in the work item, and its suffix decides
//! the document type. Key generation is centralized in the `keys` module.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use docsum_core::StorageBackend;
pub use factory::create_storage;
pub use keys::document_object_key;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
