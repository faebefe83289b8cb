//! In-process queue with SQS-like visibility semantics, for local runs and tests.

use crate::traits::{QueueError, QueueMessage, QueueResult, WorkQueue};
use crate::QueueBackend;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::Notify;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredMessage {
    message_id: String,
    body: String,
}

#[derive(Default)]
struct QueueState {
    visible: VecDeque<StoredMessage>,
    // receipt handle -> (message, visible again at)
    in_flight: HashMap<String, (StoredMessage, Instant)>,
}

impl QueueState {
    /// Return expired in-flight messages to the visible queue.
    fn requeue_expired(&mut self, now: Instant) {
        let expired: Vec<String> = self
            .in_flight
            .iter()
            .filter(|(_, (_, deadline))| *deadline <= now)
            .map(|(receipt, _)| receipt.clone())
            .collect();

        for receipt in expired {
            if let Some((message, _)) = self.in_flight.remove(&receipt) {
                self.visible.push_back(message);
            }
        }
    }

    fn next_expiry(&self) -> Option<Instant> {
        self.in_flight.values().map(|(_, deadline)| *deadline).min()
    }
}

#[derive(Clone)]
pub struct MemoryQueue {
    queues: Arc<Mutex<HashMap<String, QueueState>>>,
    notify: Arc<Notify>,
    visibility_timeout: Duration,
}

impl MemoryQueue {
    pub fn new(visibility_timeout: Duration) -> Self {
        Self {
            queues: Arc::new(Mutex::new(HashMap::new())),
            notify: Arc::new(Notify::new()),
            visibility_timeout,
        }
    }

    /// Number of messages not yet deleted (visible plus in flight).
    pub fn pending_count(&self, queue_url: &str) -> usize {
        self.queues
            .lock()
            .map(|queues| {
                queues
                    .get(queue_url)
                    .map(|q| q.visible.len() + q.in_flight.len())
                    .unwrap_or(0)
            })
            .unwrap_or(0)
    }

    /// Take up to `max` visible messages. Returns the batch and the next in-flight expiry.
    fn take(
        &self,
        queue_url: &str,
        max: usize,
    ) -> QueueResult<(Vec<QueueMessage>, Option<Instant>)> {
        let mut queues = self
            .queues
            .lock()
            .map_err(|_| QueueError::BackendError("queue lock poisoned".to_string()))?;
        let state = queues.entry(queue_url.to_string()).or_default();

        let now = Instant::now();
        state.requeue_expired(now);

        let mut batch = Vec::new();
        while batch.len() < max {
            let Some(message) = state.visible.pop_front() else {
                break;
            };
            let receipt_handle = Uuid::new_v4().to_string();
            batch.push(QueueMessage {
                message_id: message.message_id.clone(),
                receipt_handle: receipt_handle.clone(),
                body: message.body.clone(),
            });
            state
                .in_flight
                .insert(receipt_handle, (message, now + self.visibility_timeout));
        }

        Ok((batch, state.next_expiry()))
    }
}

impl Default for MemoryQueue {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

#[async_trait]
impl WorkQueue for MemoryQueue {
    async fn send_message(&self, queue_url: &str, body: String) -> QueueResult<String> {
        let message_id = Uuid::new_v4().to_string();
        {
            let mut queues = self
                .queues
                .lock()
                .map_err(|_| QueueError::SendFailed("queue lock poisoned".to_string()))?;
            queues
                .entry(queue_url.to_string())
                .or_default()
                .visible
                .push_back(StoredMessage {
                    message_id: message_id.clone(),
                    body,
                });
        }
        self.notify.notify_waiters();
        Ok(message_id)
    }

    async fn receive_messages(
        &self,
        queue_url: &str,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> QueueResult<Vec<QueueMessage>> {
        let max = max_messages.max(1) as usize;
        let deadline = Instant::now() + Duration::from_secs(wait_time_seconds.max(0) as u64);

        loop {
            // Register interest before checking so a concurrent send cannot be missed
            let notified = self.notify.notified();
            let (batch, next_expiry) = self.take(queue_url, max)?;

            let now = Instant::now();
            if !batch.is_empty() || now >= deadline {
                return Ok(batch);
            }

            let wake_at = next_expiry.map_or(deadline, |expiry| expiry.min(deadline));
            let _ = tokio::time::timeout(wake_at.saturating_duration_since(now), notified).await;
        }
    }

    async fn delete_message(&self, queue_url: &str, receipt_handle: &str) -> QueueResult<()> {
        let mut queues = self
            .queues
            .lock()
            .map_err(|_| QueueError::DeleteFailed("queue lock poisoned".to_string()))?;

        let removed = queues
            .get_mut(queue_url)
            .and_then(|state| state.in_flight.remove(receipt_handle));

        match removed {
            Some(_) => Ok(()),
            None => Err(QueueError::DeleteFailed(format!(
                "unknown or expired receipt handle: {}",
                receipt_handle
            ))),
        }
    }

    fn backend_type(&self) -> QueueBackend {
        QueueBackend::Memory
    }
}
