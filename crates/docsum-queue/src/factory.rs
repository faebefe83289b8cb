use crate::{MemoryQueue, QueueBackend, SqsQueue, WorkQueue};
use docsum_core::Config;
use std::sync::Arc;
use std::time::Duration;

/// Create the work queue transport selected by configuration
pub fn create_queue(config: &Config, sdk_config: &aws_config::SdkConfig) -> Arc<dyn WorkQueue> {
    match config.queue_backend() {
        QueueBackend::Sqs => Arc::new(SqsQueue::new(
            sdk_config,
            config.queue_visibility_timeout_seconds(),
        )),
        QueueBackend::Memory => {
            tracing::info!(
                visibility_timeout_secs = config.queue_visibility_timeout_seconds(),
                "Using in-memory work queue"
            );
            let timeout = config.queue_visibility_timeout_seconds().max(0) as u64;
            Arc::new(MemoryQueue::new(Duration::from_secs(timeout)))
        }
    }
}
