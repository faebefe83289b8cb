//! Docsum API Library
//!
//! HTTP handlers, the event router, the queue consumer and application setup.

mod api_doc;
mod handlers;
mod utils;

pub mod consumer;
pub mod error;
pub mod router;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;

pub use consumer::{BatchAck, ConsumerHandle, QueueConsumer};
pub use error::{ErrorResponse, HttpAppError};
pub use router::{EventRouter, InboundEvent, QueueRecord, RawEvent, RouterResponse};
pub use state::AppState;
