//! Shared AWS configuration.

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use docsum_core::Config;

/// Load the SDK configuration every AWS client is built from.
///
/// SDK-level retries are off: a failed call fails the invocation and the
/// queue's redelivery is the only retry.
pub async fn load_aws_config(config: &Config) -> SdkConfig {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());

    if let Some(region) = config.aws_region() {
        loader = loader.region(Region::new(region.to_string()));
    }
    if let Some(endpoint) = config.aws_endpoint_url() {
        tracing::info!(endpoint = %endpoint, "Using custom AWS endpoint");
        loader = loader.endpoint_url(endpoint);
    }

    loader.load().await
}
