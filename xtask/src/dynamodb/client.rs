//! DynamoDB client access for the xtask commands.

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{KeyType, TableStatus as SdkTableStatus};
use aws_sdk_dynamodb::Client;
use todos::Config;

use super::error::{DynamodbError, Result};
use super::planning::{TableState, TableStatus};

/// Returns a display string for the target environment.
pub fn target_display(config: &Config) -> String {
    match &config.dynamodb_endpoint {
        Some(url) => format!("Local DynamoDB ({})", url),
        None => format!("AWS DynamoDB (region: {})", config.aws_region),
    }
}

/// Fetches current table state, returns None if the table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    let response = match client.describe_table().table_name(table_name).send().await {
        Ok(response) => response,
        Err(err) => {
            if let Some(DescribeTableError::ResourceNotFoundException(_)) = err.as_service_error() {
                return Ok(None);
            }
            return Err(DynamodbError::AwsSdk(DisplayErrorContext(&err).to_string()));
        }
    };

    let Some(table) = response.table() else {
        return Ok(None);
    };

    let partition_key = table
        .key_schema()
        .iter()
        .find(|key| key.key_type() == &KeyType::Hash)
        .map(|key| key.attribute_name().to_string());

    let status = match table.table_status() {
        Some(SdkTableStatus::Active) => TableStatus::Active,
        Some(SdkTableStatus::Creating) => TableStatus::Creating,
        Some(SdkTableStatus::Updating) => TableStatus::Updating,
        Some(SdkTableStatus::Deleting) => TableStatus::Deleting,
        _ => TableStatus::Other,
    };

    Ok(Some(TableState {
        status,
        partition_key,
    }))
}
