//! Queue consumer: long-polls the work queue and feeds batches to the event router.
//!
//! Successful records are deleted. The first failing record stops the batch;
//! it is deleted only when its failure can never succeed on redelivery.
//! Everything else stays on the queue and comes back after the visibility
//! timeout.

use std::sync::Arc;
use std::time::Duration;

use docsum_processing::Disposition;
use docsum_queue::{QueueError, QueueMessage, WorkQueue};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::router::{EventRouter, QueueRecord};

const RECEIVE_ERROR_PAUSE: Duration = Duration::from_secs(5);
const EMPTY_POLL_PAUSE: Duration = Duration::from_secs(1);

/// What happened to one received batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchAck {
    /// Messages deleted from the queue (processed, or dropped as unprocessable)
    pub deleted: usize,
    /// Messages left for redelivery
    pub redelivered: usize,
}

#[derive(Clone)]
pub struct QueueConsumer {
    queue: Arc<dyn WorkQueue>,
    router: EventRouter,
    queue_url: String,
    max_messages: i32,
    wait_time_seconds: i32,
}

pub struct ConsumerHandle {
    shutdown_tx: mpsc::Sender<()>,
    join: JoinHandle<()>,
}

impl ConsumerHandle {
    /// Stop polling and wait for the in-flight batch to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
        if let Err(e) = self.join.await {
            tracing::error!(error = %e, "Queue consumer task failed");
        }
    }
}

impl QueueConsumer {
    pub fn new(
        queue: Arc<dyn WorkQueue>,
        router: EventRouter,
        queue_url: impl Into<String>,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> Self {
        Self {
            queue,
            router,
            queue_url: queue_url.into(),
            max_messages,
            wait_time_seconds,
        }
    }

    pub fn spawn(self) -> ConsumerHandle {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        let join = tokio::spawn(self.run(shutdown_rx));
        ConsumerHandle { shutdown_tx, join }
    }

    async fn run(self, mut shutdown_rx: mpsc::Receiver<()>) {
        tracing::info!(
            queue_url = %self.queue_url,
            backend = %self.queue.backend_type(),
            max_messages = self.max_messages,
            wait_time_seconds = self.wait_time_seconds,
            "Queue consumer started"
        );

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    tracing::info!("Queue consumer shutting down");
                    break;
                }
                result = self.receive() => match result {
                    // A zero wait time returns at once on an empty queue
                    Ok(messages) if messages.is_empty() => {
                        if self.wait_time_seconds == 0 {
                            tokio::time::sleep(EMPTY_POLL_PAUSE).await;
                        }
                    }
                    Ok(messages) => {
                        self.handle_batch(messages).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            queue_url = %self.queue_url,
                            "Failed to receive messages"
                        );
                        tokio::time::sleep(RECEIVE_ERROR_PAUSE).await;
                    }
                }
            }
        }
    }

    async fn receive(&self) -> Result<Vec<QueueMessage>, QueueError> {
        self.queue
            .receive_messages(&self.queue_url, self.max_messages, self.wait_time_seconds)
            .await
    }

    /// Receive one batch (if any) and process it.
    pub async fn poll_once(&self) -> Result<BatchAck, QueueError> {
        let messages = self.receive().await?;
        if messages.is_empty() {
            return Ok(BatchAck::default());
        }
        Ok(self.handle_batch(messages).await)
    }

    pub async fn handle_batch(&self, messages: Vec<QueueMessage>) -> BatchAck {
        let records: Vec<QueueRecord> = messages
            .iter()
            .map(|m| QueueRecord {
                message_id: m.message_id.clone(),
                receipt_handle: Some(m.receipt_handle.clone()),
                body: m.body.clone(),
            })
            .collect();

        tracing::debug!(batch_size = records.len(), "Dispatching queue batch");
        let (succeeded, failure) = match self.router.process_batch(&records).await {
            Ok(count) => (count, None),
            Err(failure) => (failure.index, Some(failure)),
        };

        let mut ack = BatchAck::default();
        for message in &messages[..succeeded] {
            if self.delete(message).await {
                ack.deleted += 1;
            } else {
                ack.redelivered += 1;
            }
        }

        if let Some(failure) = failure {
            let remaining = messages.len() - failure.index - 1;
            match failure.error.disposition() {
                Disposition::Drop => {
                    tracing::error!(
                        message_id = %failure.message_id,
                        error = %failure.error,
                        "Dropping unprocessable message"
                    );
                    if self.delete(&messages[failure.index]).await {
                        ack.deleted += 1;
                    } else {
                        ack.redelivered += 1;
                    }
                }
                Disposition::Redeliver => {
                    tracing::warn!(
                        message_id = %failure.message_id,
                        error = %failure.error,
                        "Message left on queue for redelivery"
                    );
                    ack.redelivered += 1;
                }
            }
            if remaining > 0 {
                tracing::warn!(remaining, "Unattempted messages left for redelivery");
            }
            ack.redelivered += remaining;
        }

        ack
    }

    async fn delete(&self, message: &QueueMessage) -> bool {
        match self
            .queue
            .delete_message(&self.queue_url, &message.receipt_handle)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    message_id = %message.message_id,
                    "Failed to delete processed message"
                );
                false
            }
        }
    }
}
