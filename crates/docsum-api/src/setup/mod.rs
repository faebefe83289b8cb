//! Application setup and initialization

pub mod aws;
pub mod routes;
pub mod server;

use crate::consumer::QueueConsumer;
use crate::router::EventRouter;
use crate::state::AppState;
use anyhow::{Context, Result};
use docsum_core::Config;
use docsum_db::create_result_store;
use docsum_processing::{DocumentWorkflow, PdfTextExtractor};
use docsum_queue::{create_queue, WorkQueue};
use docsum_services::{AwsTranslator, CohereSummarizer};
use docsum_storage::create_storage;
use std::sync::Arc;

/// Everything `start_server` needs
pub struct Application {
    pub state: Arc<AppState>,
    pub router: axum::Router,
    /// `None` when the consumer is disabled or no queue URL is configured
    pub consumer: Option<QueueConsumer>,
}

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<Application> {
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(config.log_format())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment(),
        "Configuration loaded and validated successfully"
    );

    let sdk_config = aws::load_aws_config(&config).await;
    let config = Arc::new(config);

    let storage = create_storage(&config, &sdk_config)
        .await
        .context("Failed to initialize storage")?;
    let queue = create_queue(&config, &sdk_config);
    let result_store = create_result_store(&config, &sdk_config);

    let summarizer = Arc::new(
        CohereSummarizer::from_config(&config).context("Failed to initialize Cohere client")?,
    );
    let translator = Arc::new(AwsTranslator::new(
        &sdk_config,
        config.translation_source_language(),
    ));

    let workflow = DocumentWorkflow::new(
        config.clone(),
        storage.clone(),
        Arc::new(PdfTextExtractor),
        summarizer,
        translator,
        result_store.clone(),
    );
    let event_router = EventRouter::new(config.clone(), result_store, workflow);

    let state = Arc::new(AppState::new(
        config.clone(),
        storage,
        queue.clone(),
        event_router.clone(),
    ));
    let router = routes::setup_routes(&config, state.clone());
    let consumer = setup_consumer(&config, queue, event_router);

    Ok(Application {
        state,
        router,
        consumer,
    })
}

fn setup_consumer(
    config: &Config,
    queue: Arc<dyn WorkQueue>,
    event_router: EventRouter,
) -> Option<QueueConsumer> {
    if !config.queue_consumer_enabled() {
        tracing::info!("Queue consumer disabled");
        return None;
    }

    match config.require_sqs_queue_url() {
        Ok(queue_url) => Some(QueueConsumer::new(
            queue,
            event_router,
            queue_url,
            config.queue_max_messages(),
            config.queue_wait_time_seconds(),
        )),
        Err(e) => {
            tracing::warn!(error = %e, "Queue consumer not started");
            None
        }
    }
}
