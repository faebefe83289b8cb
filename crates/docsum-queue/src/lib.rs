//! Work queue transport.
//!
//! Delivery is at-least-once: a received message stays hidden for the
//! visibility timeout and comes back unless the consumer deletes it.

pub mod factory;
pub mod memory;
pub mod sqs;
pub mod traits;

pub use docsum_core::QueueBackend;
pub use factory::create_queue;
pub use memory::MemoryQueue;
pub use sqs::SqsQueue;
pub use traits::{QueueError, QueueMessage, QueueResult, WorkQueue};
