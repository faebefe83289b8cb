use crate::{DynamoResultStore, MemoryResultStore, ResultStore, ResultStoreBackend};
use docsum_core::Config;
use std::sync::Arc;

/// Create the result store selected by configuration
pub fn create_result_store(
    config: &Config,
    sdk_config: &aws_config::SdkConfig,
) -> Arc<dyn ResultStore> {
    match config.result_store_backend() {
        ResultStoreBackend::Dynamodb => {
            tracing::info!("Initializing DynamoDB result store");
            Arc::new(DynamoResultStore::new(sdk_config))
        }
        ResultStoreBackend::Memory => {
            tracing::info!("Initializing in-memory result store");
            Arc::new(MemoryResultStore::new())
        }
    }
}
