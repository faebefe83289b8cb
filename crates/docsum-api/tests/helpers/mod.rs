//! Test helpers: build AppState and router over in-process backends.
//!
//! Run from workspace root: `cargo test -p docsum-api`.

#![allow(dead_code)]

pub mod fakes;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use docsum_api::setup::routes;
use docsum_api::{AppState, EventRouter, QueueConsumer};
use docsum_core::Config;
use docsum_db::MemoryResultStore;
use docsum_processing::DocumentWorkflow;
use docsum_queue::{MemoryQueue, WorkQueue};
use docsum_storage::{LocalStorage, Storage};
use fakes::{StubExtractor, StubSummarizer, StubTranslator};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const BUCKET: &str = "documents-bucket";
pub const QUEUE_URL: &str = "memory://documents-queue";
pub const TABLE: &str = "documents-table";

/// Test application: server plus handles on every backend it writes to.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<LocalStorage>,
    pub queue: MemoryQueue,
    pub results: MemoryResultStore,
    pub summarizer: Arc<StubSummarizer>,
    pub translator: Arc<StubTranslator>,
    pub event_router: EventRouter,
    pub consumer: QueueConsumer,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// A consumer that long-polls, for running as a background task.
    pub fn long_polling_consumer(&self) -> QueueConsumer {
        QueueConsumer::new(
            Arc::new(self.queue.clone()),
            self.event_router.clone(),
            QUEUE_URL,
            10,
            1,
        )
    }

    /// Every stored object key in the test bucket.
    pub fn stored_keys(&self) -> Vec<String> {
        let dir = self.temp_dir.path().join(BUCKET);
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut keys: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        keys.sort();
        keys
    }
}

pub struct TestAppBuilder {
    overrides: Vec<(String, String)>,
    summarizer: StubSummarizer,
    visibility_timeout: Duration,
    upload_storage: Option<Arc<dyn Storage>>,
    upload_queue: Option<Arc<dyn WorkQueue>>,
}

impl TestAppBuilder {
    /// Replace or blank (`""`) a configuration value.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.overrides.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_summarizer(mut self, summarizer: StubSummarizer) -> Self {
        self.summarizer = summarizer;
        self
    }

    pub fn with_visibility_timeout(mut self, timeout: Duration) -> Self {
        self.visibility_timeout = timeout;
        self
    }

    /// Storage used by the upload endpoint only; the workflow keeps local storage.
    pub fn with_upload_storage(mut self, storage: Arc<dyn Storage>) -> Self {
        self.upload_storage = Some(storage);
        self
    }

    /// Queue used by the upload endpoint only; the consumer keeps the memory queue.
    pub fn with_upload_queue(mut self, queue: Arc<dyn WorkQueue>) -> Self {
        self.upload_queue = Some(queue);
        self
    }

    pub async fn build(self) -> TestApp {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = Arc::new(test_config(&self.overrides));

        let storage = Arc::new(
            LocalStorage::new(temp_dir.path())
                .await
                .expect("Failed to create local storage"),
        );
        let queue = MemoryQueue::new(self.visibility_timeout);
        let results = MemoryResultStore::new();
        let summarizer = Arc::new(self.summarizer);
        let translator = Arc::new(StubTranslator::returning("Hallo"));

        let workflow = DocumentWorkflow::new(
            config.clone(),
            storage.clone(),
            Arc::new(StubExtractor::returning("Hello")),
            summarizer.clone(),
            translator.clone(),
            Arc::new(results.clone()),
        );
        let event_router = EventRouter::new(config.clone(), Arc::new(results.clone()), workflow);

        let upload_storage: Arc<dyn Storage> = match self.upload_storage {
            Some(upload_storage) => upload_storage,
            None => storage.clone(),
        };
        let upload_queue: Arc<dyn WorkQueue> = match self.upload_queue {
            Some(upload_queue) => upload_queue,
            None => Arc::new(queue.clone()),
        };
        let state = Arc::new(AppState::new(
            config.clone(),
            upload_storage,
            upload_queue,
            event_router.clone(),
        ));
        let app = routes::setup_routes(&config, state);
        let server =
            TestServer::new(app.into_make_service()).expect("Failed to create test server");

        let consumer = QueueConsumer::new(
            Arc::new(queue.clone()),
            event_router.clone(),
            QUEUE_URL,
            config.queue_max_messages(),
            0,
        );

        TestApp {
            server,
            storage,
            queue,
            results,
            summarizer,
            translator,
            event_router,
            consumer,
            temp_dir,
        }
    }
}

pub fn test_app() -> TestAppBuilder {
    TestAppBuilder {
        overrides: Vec::new(),
        summarizer: StubSummarizer::returning("Hi"),
        visibility_timeout: Duration::from_secs(60),
        upload_storage: None,
        upload_queue: None,
    }
}

pub async fn setup_test_app() -> TestApp {
    test_app().build().await
}

pub fn test_config(overrides: &[(String, String)]) -> Config {
    let mut values: HashMap<String, String> = [
        ("S3_BUCKET_NAME", BUCKET),
        ("SQS_QUEUE_URL", QUEUE_URL),
        ("DYNAMODB_TABLE_NAME", TABLE),
        ("COHERE_API_KEY", "test-key"),
        ("STORAGE_BACKEND", "local"),
        ("QUEUE_BACKEND", "memory"),
        ("RESULT_STORE_BACKEND", "memory"),
        ("MAX_DOCUMENT_SIZE_MB", "1"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    values.extend(overrides.iter().cloned());
    Config::from_lookup(|key| values.get(key).cloned()).expect("Invalid test config")
}

/// Multipart form with `data` in the `document` field under `file_name`.
pub fn document_form(file_name: &str, data: &[u8]) -> MultipartForm {
    MultipartForm::new().add_part(
        "document",
        Part::bytes(data.to_vec())
            .file_name(file_name)
            .mime_type("application/pdf"),
    )
}
