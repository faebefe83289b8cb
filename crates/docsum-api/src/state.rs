//! Shared application state.

use docsum_core::Config;
use docsum_queue::WorkQueue;
use docsum_storage::Storage;
use std::sync::Arc;

use crate::router::EventRouter;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub storage: Arc<dyn Storage>,
    pub queue: Arc<dyn WorkQueue>,
    pub event_router: EventRouter,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        storage: Arc<dyn Storage>,
        queue: Arc<dyn WorkQueue>,
        event_router: EventRouter,
    ) -> Self {
        Self {
            config,
            storage,
            queue,
            event_router,
        }
    }
}
