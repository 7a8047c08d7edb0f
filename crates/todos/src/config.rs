use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DynamoDB table holding the todos (default: "todos")
    pub table_name: String,
    /// AWS region for the DynamoDB client (default: "us-east-1")
    pub aws_region: String,
    /// Endpoint override, e.g. DynamoDB Local (default: unset)
    pub dynamodb_endpoint: Option<String>,
    /// Per-operation storage timeout in seconds (default: 5)
    pub storage_timeout_seconds: u64,
    /// Whole-request HTTP deadline in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "todos")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `DYNAMODB_ENDPOINT` - Optional endpoint override
    /// - `STORAGE_TIMEOUT_SECONDS` - Storage operation timeout (default: 5)
    /// - `REQUEST_TIMEOUT_SECONDS` - HTTP request timeout (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Empty values and unparsable numbers fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            table_name: var("DYNAMODB_TABLE_NAME").unwrap_or_else(|| "todos".to_string()),
            aws_region: var("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            dynamodb_endpoint: var("DYNAMODB_ENDPOINT"),
            storage_timeout_seconds: var("STORAGE_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            request_timeout_seconds: var("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the storage operation timeout as a Duration.
    pub fn storage_timeout(&self) -> Duration {
        Duration::from_secs(self.storage_timeout_seconds)
    }

    /// Get the HTTP request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
