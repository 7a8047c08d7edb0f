use aws_config::{timeout::TimeoutConfig, BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;

use crate::config::Config;

/// Builds a DynamoDB client from configuration.
///
/// Credentials come from the default AWS provider chain. When
/// `dynamodb_endpoint` is set (DynamoDB Local, LocalStack) requests go there
/// instead of the regional endpoint. Every operation is bounded by the
/// configured storage timeout.
pub async fn build_client(config: &Config) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()))
        .timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(config.storage_timeout())
                .build(),
        );

    if let Some(endpoint) = &config.dynamodb_endpoint {
        tracing::debug!(endpoint = %endpoint, "Using custom DynamoDB endpoint");
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;
    Client::new(&sdk_config)
}
