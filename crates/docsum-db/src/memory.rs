use crate::repository::{ResultStore, SUMMARY_ATTRIBUTE, TRANSLATION_ATTRIBUTE};
use docsum_core::{AppError, DocumentResults, ResultStoreBackend};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Record = HashMap<String, String>;
type Records = HashMap<(String, String), Record>;

/// In-process result store with the same merge semantics as the DynamoDB one
#[derive(Clone, Default)]
pub struct MemoryResultStore {
    // (table, documentId) -> attributes
    records: Arc<Mutex<Records>>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Writes are single map inserts; a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, Records> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Set an arbitrary attribute, creating the record if needed.
    pub fn put_attribute(&self, table: &str, document_id: &str, name: &str, value: &str) {
        self.lock()
            .entry((table.to_string(), document_id.to_string()))
            .or_default()
            .insert(name.to_string(), value.to_string());
    }

    /// Snapshot of a record's attributes.
    pub fn record(&self, table: &str, document_id: &str) -> Option<Record> {
        self.lock()
            .get(&(table.to_string(), document_id.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_attribute(
        &self,
        table: &str,
        document_id: &str,
        attribute: &str,
    ) -> Result<Option<String>, AppError> {
        Ok(self
            .lock()
            .get(&(table.to_string(), document_id.to_string()))
            .and_then(|record| record.get(attribute))
            .cloned())
    }
}

#[async_trait::async_trait]
impl ResultStore for MemoryResultStore {
    async fn update_results(
        &self,
        table: &str,
        document_id: &str,
        results: &DocumentResults,
    ) -> Result<(), AppError> {
        let mut records = self.lock();
        let record = records
            .entry((table.to_string(), document_id.to_string()))
            .or_default();
        record.insert(SUMMARY_ATTRIBUTE.to_string(), results.summary.clone());
        record.insert(TRANSLATION_ATTRIBUTE.to_string(), results.translation.clone());
        Ok(())
    }

    async fn get_summary(&self, table: &str, document_id: &str) -> Result<Option<String>, AppError> {
        self.get_attribute(table, document_id, SUMMARY_ATTRIBUTE)
    }

    async fn get_translation(
        &self,
        table: &str,
        document_id: &str,
    ) -> Result<Option<String>, AppError> {
        self.get_attribute(table, document_id, TRANSLATION_ATTRIBUTE)
    }

    fn backend_type(&self) -> ResultStoreBackend {
        ResultStoreBackend::Memory
    }
}
