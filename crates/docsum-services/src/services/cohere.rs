//! Cohere summarization client.

use async_trait::async_trait;
use docsum_core::config::COHERE_API_KEY;
use docsum_core::Config;
use serde::{Deserialize, Serialize};

use super::summarizer::{SummarizeError, Summarizer};

#[derive(Clone)]
pub struct CohereSummarizer {
    api_key: Option<String>, // checked per call, not at startup
    api_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary: Option<String>,
}

impl CohereSummarizer {
    pub fn new(
        api_key: Option<String>,
        api_url: impl Into<String>,
    ) -> Result<Self, SummarizeError> {
        // No request timeout: a stalled call runs until the invocation is torn down
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SummarizeError::Request(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            api_url: api_url.into(),
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, SummarizeError> {
        Self::new(
            config.cohere_api_key().map(str::to_string),
            config.cohere_api_url(),
        )
    }
}

#[async_trait]
impl Summarizer for CohereSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SummarizeError::MissingApiKey(COHERE_API_KEY))?;

        let start = std::time::Instant::now();
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&SummarizeRequest { text })
            .send()
            .await
            .map_err(|e| SummarizeError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "Cohere API error");
            return Err(SummarizeError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SummarizeResponse = response
            .json()
            .await
            .map_err(|e| SummarizeError::InvalidResponse(e.to_string()))?;

        let summary = parsed.summary.ok_or_else(|| {
            SummarizeError::InvalidResponse("response has no summary field".to_string())
        })?;

        tracing::debug!(
            input_chars = text.len(),
            summary_chars = summary.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Text summarized"
        );

        Ok(summary)
    }
}
