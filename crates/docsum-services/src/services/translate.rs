//! Amazon Translate client.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_translate::Client;

use super::translator::{TranslateError, Translator};

#[derive(Clone)]
pub struct AwsTranslator {
    client: Client,
    source_language: String,
}

impl AwsTranslator {
    pub fn new(sdk_config: &SdkConfig, source_language: impl Into<String>) -> Self {
        Self {
            client: Client::new(sdk_config),
            source_language: source_language.into(),
        }
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }
}

#[async_trait]
impl Translator for AwsTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslateError> {
        let start = std::time::Instant::now();

        let output = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(&self.source_language)
            .target_language_code(target_language)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    source_language = %self.source_language,
                    target_language = %target_language,
                    "Amazon Translate request failed"
                );
                TranslateError::Request(e.to_string())
            })?;

        tracing::debug!(
            target_language = %target_language,
            input_chars = text.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Text translated"
        );

        Ok(output.translated_text().to_string())
    }
}
