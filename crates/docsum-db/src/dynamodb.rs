use crate::repository::{
    ResultStore, DOCUMENT_ID_ATTRIBUTE, SUMMARY_ATTRIBUTE, TRANSLATION_ATTRIBUTE,
};
use aws_config::SdkConfig;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use docsum_core::{AppError, DocumentResults, ResultStoreBackend};

/// DynamoDB-backed result store
#[derive(Clone)]
pub struct DynamoResultStore {
    client: Client,
}

impl DynamoResultStore {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }

    async fn get_attribute(
        &self,
        table: &str,
        document_id: &str,
        attribute: &str,
    ) -> Result<Option<String>, AppError> {
        let output = self
            .client
            .get_item()
            .table_name(table)
            .key(
                DOCUMENT_ID_ATTRIBUTE,
                AttributeValue::S(document_id.to_string()),
            )
            .projection_expression("#field")
            .expression_attribute_names("#field", attribute)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    table = %table,
                    document_id = %document_id,
                    attribute = %attribute,
                    "DynamoDB get_item failed"
                );
                AppError::Database(e.to_string())
            })?;

        Ok(output
            .item()
            .and_then(|item| item.get(attribute))
            .and_then(|value| value.as_s().ok())
            .cloned())
    }
}

#[async_trait::async_trait]
impl ResultStore for DynamoResultStore {
    async fn update_results(
        &self,
        table: &str,
        document_id: &str,
        results: &DocumentResults,
    ) -> Result<(), AppError> {
        self.client
            .update_item()
            .table_name(table)
            .key(
                DOCUMENT_ID_ATTRIBUTE,
                AttributeValue::S(document_id.to_string()),
            )
            .update_expression("SET #summary = :summary, #translation = :translation")
            .expression_attribute_names("#summary", SUMMARY_ATTRIBUTE)
            .expression_attribute_names("#translation", TRANSLATION_ATTRIBUTE)
            .expression_attribute_values(":summary", AttributeValue::S(results.summary.clone()))
            .expression_attribute_values(
                ":translation",
                AttributeValue::S(results.translation.clone()),
            )
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    table = %table,
                    document_id = %document_id,
                    "DynamoDB update_item failed"
                );
                AppError::Database(e.to_string())
            })?;

        tracing::info!(table = %table, document_id = %document_id, "Document results stored");
        Ok(())
    }

    async fn get_summary(&self, table: &str, document_id: &str) -> Result<Option<String>, AppError> {
        self.get_attribute(table, document_id, SUMMARY_ATTRIBUTE)
            .await
    }

    async fn get_translation(
        &self,
        table: &str,
        document_id: &str,
    ) -> Result<Option<String>, AppError> {
        self.get_attribute(table, document_id, TRANSLATION_ATTRIBUTE)
            .await
    }

    fn backend_type(&self) -> ResultStoreBackend {
        ResultStoreBackend::Dynamodb
    }
}
