//! Configuration module
//!
//! `Config` is built once at process start and handed to every component.
//! Deployment identifiers (bucket, queue, table, API key) are optional here and
//! are only checked when a component actually needs them, through the
//! `require_*` accessors.

use std::env;
use std::str::FromStr;

use crate::backend_types::{QueueBackend, ResultStoreBackend, StorageBackend};
use crate::error::AppError;

const SERVER_PORT: u16 = 3000;
const MAX_DOCUMENT_SIZE_MB: usize = 5;
const COHERE_API_URL: &str = "https://api.cohere.ai/v1/summarize";
const TRANSLATION_SOURCE_LANGUAGE: &str = "en";
const TRANSLATION_TARGET_LANGUAGE: &str = "de";
const LOCAL_STORAGE_PATH: &str = "./data/storage";
const QUEUE_MAX_MESSAGES: i32 = 10;
const QUEUE_WAIT_TIME_SECONDS: i32 = 20;
const QUEUE_VISIBILITY_TIMEOUT_SECONDS: i32 = 300;

pub const S3_BUCKET_NAME: &str = "S3_BUCKET_NAME";
pub const SQS_QUEUE_URL: &str = "SQS_QUEUE_URL";
pub const DYNAMODB_TABLE_NAME: &str = "DYNAMODB_TABLE_NAME";
pub const COHERE_API_KEY: &str = "COHERE_API_KEY";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    environment: String,
    log_format: String,
    max_document_size_bytes: usize,
    // AWS
    aws_region: Option<String>,
    aws_endpoint_url: Option<String>, // LocalStack or other compatible endpoint
    // Object storage
    storage_backend: StorageBackend,
    s3_bucket_name: Option<String>,
    local_storage_path: String,
    // Work queue
    queue_backend: QueueBackend,
    sqs_queue_url: Option<String>,
    queue_consumer_enabled: bool,
    queue_max_messages: i32,
    queue_wait_time_seconds: i32,
    queue_visibility_timeout_seconds: i32,
    // Result store
    result_store_backend: ResultStoreBackend,
    dynamodb_table_name: Option<String>,
    // Third-party services
    cohere_api_key: Option<String>,
    cohere_api_url: String,
    translation_source_language: String,
    translation_target_language: String,
}

impl Config {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let environment = get("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let max_document_size_mb = parse_or(get("MAX_DOCUMENT_SIZE_MB"), MAX_DOCUMENT_SIZE_MB);

        let storage_backend = match get("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => StorageBackend::S3,
        };
        let queue_backend = match get("QUEUE_BACKEND") {
            Some(value) => value.parse()?,
            None => QueueBackend::Sqs,
        };
        let result_store_backend = match get("RESULT_STORE_BACKEND") {
            Some(value) => value.parse()?,
            None => ResultStoreBackend::Dynamodb,
        };

        let queue_consumer_enabled = get("QUEUE_CONSUMER_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        Ok(Config {
            server_port: parse_or(get("SERVER_PORT"), SERVER_PORT),
            environment,
            log_format: get("LOG_FORMAT").unwrap_or_else(|| "compact".to_string()),
            max_document_size_bytes: max_document_size_mb * 1024 * 1024,
            aws_region: get("AWS_REGION"),
            aws_endpoint_url: get("AWS_ENDPOINT_URL"),
            storage_backend,
            s3_bucket_name: get(S3_BUCKET_NAME),
            local_storage_path: get("LOCAL_STORAGE_PATH")
                .unwrap_or_else(|| LOCAL_STORAGE_PATH.to_string()),
            queue_backend,
            sqs_queue_url: get(SQS_QUEUE_URL),
            queue_consumer_enabled,
            queue_max_messages: parse_or(get("QUEUE_MAX_MESSAGES"), QUEUE_MAX_MESSAGES),
            queue_wait_time_seconds: parse_or(
                get("QUEUE_WAIT_TIME_SECONDS"),
                QUEUE_WAIT_TIME_SECONDS,
            ),
            queue_visibility_timeout_seconds: parse_or(
                get("QUEUE_VISIBILITY_TIMEOUT_SECONDS"),
                QUEUE_VISIBILITY_TIMEOUT_SECONDS,
            ),
            result_store_backend,
            dynamodb_table_name: get(DYNAMODB_TABLE_NAME),
            cohere_api_key: get(COHERE_API_KEY),
            cohere_api_url: get("COHERE_API_URL").unwrap_or_else(|| COHERE_API_URL.to_string()),
            translation_source_language: get("TRANSLATION_SOURCE_LANGUAGE")
                .unwrap_or_else(|| TRANSLATION_SOURCE_LANGUAGE.to_string()),
            translation_target_language: get("TRANSLATION_TARGET_LANGUAGE")
                .unwrap_or_else(|| TRANSLATION_TARGET_LANGUAGE.to_string()),
        })
    }

    /// Startup validation of tunables. Deployment identifiers are not checked here.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_document_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_DOCUMENT_SIZE_MB must be greater than 0"));
        }

        if !(1..=10).contains(&self.queue_max_messages) {
            return Err(anyhow::anyhow!(
                "QUEUE_MAX_MESSAGES must be between 1 and 10, got {}",
                self.queue_max_messages
            ));
        }

        if !(0..=20).contains(&self.queue_wait_time_seconds) {
            return Err(anyhow::anyhow!(
                "QUEUE_WAIT_TIME_SECONDS must be between 0 and 20, got {}",
                self.queue_wait_time_seconds
            ));
        }

        if self.queue_visibility_timeout_seconds < 0 {
            return Err(anyhow::anyhow!(
                "QUEUE_VISIBILITY_TIMEOUT_SECONDS must not be negative"
            ));
        }

        Ok(())
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn log_format(&self) -> &str {
        &self.log_format
    }

    pub fn max_document_size_bytes(&self) -> usize {
        self.max_document_size_bytes
    }

    pub fn aws_region(&self) -> Option<&str> {
        self.aws_region.as_deref()
    }

    pub fn aws_endpoint_url(&self) -> Option<&str> {
        self.aws_endpoint_url.as_deref()
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage_backend
    }

    pub fn s3_bucket_name(&self) -> Option<&str> {
        self.s3_bucket_name.as_deref()
    }

    pub fn local_storage_path(&self) -> &str {
        &self.local_storage_path
    }

    pub fn queue_backend(&self) -> QueueBackend {
        self.queue_backend
    }

    pub fn sqs_queue_url(&self) -> Option<&str> {
        self.sqs_queue_url.as_deref()
    }

    pub fn queue_consumer_enabled(&self) -> bool {
        self.queue_consumer_enabled
    }

    pub fn queue_max_messages(&self) -> i32 {
        self.queue_max_messages
    }

    pub fn queue_wait_time_seconds(&self) -> i32 {
        self.queue_wait_time_seconds
    }

    pub fn queue_visibility_timeout_seconds(&self) -> i32 {
        self.queue_visibility_timeout_seconds
    }

    pub fn result_store_backend(&self) -> ResultStoreBackend {
        self.result_store_backend
    }

    pub fn dynamodb_table_name(&self) -> Option<&str> {
        self.dynamodb_table_name.as_deref()
    }

    pub fn cohere_api_key(&self) -> Option<&str> {
        self.cohere_api_key.as_deref()
    }

    pub fn cohere_api_url(&self) -> &str {
        &self.cohere_api_url
    }

    pub fn translation_source_language(&self) -> &str {
        &self.translation_source_language
    }

    pub fn translation_target_language(&self) -> &str {
        &self.translation_target_language
    }

    // Use-time checks for deployment identifiers

    pub fn require_s3_bucket_name(&self) -> Result<&str, AppError> {
        require(self.s3_bucket_name(), S3_BUCKET_NAME)
    }

    pub fn require_sqs_queue_url(&self) -> Result<&str, AppError> {
        require(self.sqs_queue_url(), SQS_QUEUE_URL)
    }

    pub fn require_dynamodb_table_name(&self) -> Result<&str, AppError> {
        require(self.dynamodb_table_name(), DYNAMODB_TABLE_NAME)
    }
}

fn require<'a>(value: Option<&'a str>, key: &'static str) -> Result<&'a str, AppError> {
    value.ok_or_else(|| AppError::Configuration(format!("{} is not set", key)))
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse::<T>().ok()).unwrap_or(default)
}
