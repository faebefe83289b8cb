use crate::traits::{QueueError, QueueMessage, QueueResult, WorkQueue};
use crate::QueueBackend;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sqs::operation::receive_message::builders::ReceiveMessageFluentBuilder;
use aws_sdk_sqs::Client;

/// Amazon SQS work queue
///
/// Every receive asks for `visibility_timeout_seconds`, so a message stays
/// hidden for the whole processing run regardless of the queue's default.
#[derive(Clone)]
pub struct SqsQueue {
    client: Client,
    visibility_timeout_seconds: i32,
}

impl SqsQueue {
    pub fn new(sdk_config: &SdkConfig, visibility_timeout_seconds: i32) -> Self {
        Self {
            client: Client::new(sdk_config),
            visibility_timeout_seconds,
        }
    }

    fn receive_request(
        &self,
        queue_url: &str,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> ReceiveMessageFluentBuilder {
        self.client
            .receive_message()
            .queue_url(queue_url)
            .max_number_of_messages(max_messages)
            .wait_time_seconds(wait_time_seconds)
            .visibility_timeout(self.visibility_timeout_seconds)
    }
}

#[async_trait]
impl WorkQueue for SqsQueue {
    async fn send_message(&self, queue_url: &str, body: String) -> QueueResult<String> {
        let output = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, queue_url = %queue_url, "SQS send failed");
                QueueError::SendFailed(e.to_string())
            })?;

        let message_id = output.message_id().unwrap_or_default().to_string();
        tracing::debug!(queue_url = %queue_url, message_id = %message_id, "SQS message sent");

        Ok(message_id)
    }

    async fn receive_messages(
        &self,
        queue_url: &str,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> QueueResult<Vec<QueueMessage>> {
        let output = self
            .receive_request(queue_url, max_messages, wait_time_seconds)
            .send()
            .await
            .map_err(|e| QueueError::ReceiveFailed(e.to_string()))?;

        let messages = output
            .messages()
            .iter()
            .filter_map(|m| {
                let receipt_handle = m.receipt_handle()?.to_string();
                Some(QueueMessage {
                    message_id: m.message_id().unwrap_or_default().to_string(),
                    receipt_handle,
                    body: m.body().unwrap_or_default().to_string(),
                })
            })
            .collect();

        Ok(messages)
    }

    async fn delete_message(&self, queue_url: &str, receipt_handle: &str) -> QueueResult<()> {
        self.client
            .delete_message()
            .queue_url(queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|e| QueueError::DeleteFailed(e.to_string()))?;
        Ok(())
    }

    fn backend_type(&self) -> QueueBackend {
        QueueBackend::Sqs
    }
}
