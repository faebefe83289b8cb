//! Stub collaborators for the processing workflow and failing backends

use async_trait::async_trait;
use bytes::Bytes;
use docsum_core::DocumentKind;
use docsum_processing::{ExtractionError, TextExtractor};
use docsum_queue::{QueueBackend, QueueError, QueueMessage, QueueResult, WorkQueue};
use docsum_services::{SummarizeError, Summarizer, TranslateError, Translator};
use docsum_storage::{Storage, StorageBackend, StorageError, StorageResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct StubExtractor {
    text: String,
}

impl StubExtractor {
    pub fn returning(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[async_trait]
impl TextExtractor for StubExtractor {
    async fn extract_text(
        &self,
        _kind: DocumentKind,
        _data: Bytes,
    ) -> Result<String, ExtractionError> {
        Ok(self.text.clone())
    }
}

pub struct StubSummarizer {
    summary: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl StubSummarizer {
    pub fn returning(summary: &str) -> Self {
        Self {
            summary: Some(summary.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            summary: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        self.calls.lock().unwrap().push(text.to_string());
        self.summary.clone().ok_or(SummarizeError::Api {
            status: 500,
            body: "internal error".to_string(),
        })
    }
}

pub struct StubTranslator {
    translation: String,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubTranslator {
    pub fn returning(translation: &str) -> Self {
        Self {
            translation: translation.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslateError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), target_language.to_string()));
        Ok(self.translation.clone())
    }
}

/// Storage whose writes always fail.
pub struct FailingStorage;

#[async_trait]
impl Storage for FailingStorage {
    async fn put_object(&self, bucket: &str, _key: &str, _data: Bytes) -> StorageResult<()> {
        Err(StorageError::UploadFailed(format!("bucket {} unavailable", bucket)))
    }

    async fn get_object(&self, _bucket: &str, key: &str) -> StorageResult<Bytes> {
        Err(StorageError::NotFound(key.to_string()))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

/// Queue whose sends always fail.
pub struct FailingQueue;

#[async_trait]
impl WorkQueue for FailingQueue {
    async fn send_message(&self, queue_url: &str, _body: String) -> QueueResult<String> {
        Err(QueueError::SendFailed(format!("{} unavailable", queue_url)))
    }

    async fn receive_messages(
        &self,
        _queue_url: &str,
        _max_messages: i32,
        _wait_time_seconds: i32,
    ) -> QueueResult<Vec<QueueMessage>> {
        Ok(Vec::new())
    }

    async fn delete_message(&self, _queue_url: &str, _receipt_handle: &str) -> QueueResult<()> {
        Ok(())
    }

    fn backend_type(&self) -> QueueBackend {
        QueueBackend::Memory
    }
}

/// Always-empty queue that counts receive calls.
#[derive(Default)]
pub struct CountingQueue {
    receives: AtomicUsize,
}

impl CountingQueue {
    pub fn receives(&self) -> usize {
        self.receives.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WorkQueue for CountingQueue {
    async fn send_message(&self, _queue_url: &str, _body: String) -> QueueResult<String> {
        Ok("unused".to_string())
    }

    async fn receive_messages(
        &self,
        _queue_url: &str,
        _max_messages: i32,
        _wait_time_seconds: i32,
    ) -> QueueResult<Vec<QueueMessage>> {
        self.receives.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn delete_message(&self, _queue_url: &str, _receipt_handle: &str) -> QueueResult<()> {
        Ok(())
    }

    fn backend_type(&self) -> QueueBackend {
        QueueBackend::Memory
    }
}
