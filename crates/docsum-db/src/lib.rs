//! Result store repositories
//!
//! One record per document, keyed by `documentId`. The processing workflow
//! merges `summary` and `translation` into it; the read endpoints look the
//! fields up individually.

pub mod dynamodb;
pub mod factory;
pub mod memory;
pub mod repository;

pub use docsum_core::ResultStoreBackend;
pub use dynamodb::DynamoResultStore;
pub use factory::create_result_store;
pub use memory::MemoryResultStore;
pub use repository::{
    ResultStore, DOCUMENT_ID_ATTRIBUTE, SUMMARY_ATTRIBUTE, TRANSLATION_ATTRIBUTE,
};
