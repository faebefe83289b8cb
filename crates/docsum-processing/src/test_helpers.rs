//! Recording fakes for the workflow's collaborators

use async_trait::async_trait;
use bytes::Bytes;
use docsum_core::{Config, DocumentKind};
use docsum_services::{SummarizeError, Summarizer, TranslateError, Translator};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::extract::{ExtractionError, TextExtractor};

pub const BUCKET: &str = "documents-bucket";
pub const TABLE: &str = "documents-table";

/// Test configuration with every deployment value set; `overrides` replace or blank them.
pub fn config(overrides: &[(&str, &str)]) -> Config {
    let mut values: HashMap<&str, &str> = HashMap::from([
        ("S3_BUCKET_NAME", BUCKET),
        ("SQS_QUEUE_URL", "memory://work"),
        ("DYNAMODB_TABLE_NAME", TABLE),
        ("COHERE_API_KEY", "test-key"),
    ]);
    values.extend(overrides.iter().copied());
    Config::from_lookup(|key| values.get(key).map(|v| v.to_string())).unwrap()
}

pub struct RecordingExtractor {
    text: String,
    calls: Mutex<Vec<Vec<u8>>>,
}

impl RecordingExtractor {
    pub fn returning(text: &str) -> Self {
        Self {
            text: text.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<u8>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextExtractor for RecordingExtractor {
    async fn extract_text(
        &self,
        _kind: DocumentKind,
        data: Bytes,
    ) -> Result<String, ExtractionError> {
        self.calls.lock().unwrap().push(data.to_vec());
        Ok(self.text.clone())
    }
}

pub struct RecordingSummarizer {
    summary: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl RecordingSummarizer {
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
impl Summarizer for RecordingSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        self.calls.lock().unwrap().push(text.to_string());
        self.summary.clone().ok_or(SummarizeError::Api {
            status: 503,
            body: "unavailable".to_string(),
        })
    }
}

pub struct RecordingTranslator {
    translation: String,
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingTranslator {
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
impl Translator for RecordingTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslateError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), target_language.to_string()));
        Ok(self.translation.clone())
    }
}
