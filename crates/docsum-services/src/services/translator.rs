use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Translation request failed: {0}")]
    Request(String),
}

/// Translates text from a fixed source language into `target_language`
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslateError>;
}
