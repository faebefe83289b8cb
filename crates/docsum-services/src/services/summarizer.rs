use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("{0} is not set")]
    MissingApiKey(&'static str),

    #[error("Summarization request failed: {0}")]
    Request(String),

    #[error("Summarization API failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid summarization response: {0}")]
    InvalidResponse(String),
}

/// Produces a summary of extracted document text
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}
