use crate::QueueBackend;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Receive failed: {0}")]
    ReceiveFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Queue backend error: {0}")]
    BackendError(String),
}

pub type QueueResult<T> = Result<T, QueueError>;

/// A message handed to a consumer. `receipt_handle` identifies this particular delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueMessage {
    pub message_id: String,
    pub receipt_handle: String,
    pub body: String,
}

#[async_trait]
pub trait WorkQueue: Send + Sync {
    /// Enqueue a message body and return the assigned message id.
    async fn send_message(&self, queue_url: &str, body: String) -> QueueResult<String>;

    /// Receive up to `max_messages`, waiting at most `wait_time_seconds` for the first one.
    async fn receive_messages(
        &self,
        queue_url: &str,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> QueueResult<Vec<QueueMessage>>;

    /// Acknowledge a delivery so it is not redelivered.
    async fn delete_message(&self, queue_url: &str, receipt_handle: &str) -> QueueResult<()>;

    fn backend_type(&self) -> QueueBackend;
}
