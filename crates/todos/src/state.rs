//! Shared application state.
//!
//! Holds the todo service as a trait object. The storage backend behind it
//! is chosen at startup from the enabled storage feature.

use std::sync::Arc;

use todos_core::storage::TodoRepository;
use todos_core::{DefaultTodoService, TodoService};

use crate::config::Config;
use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// Cloned for each request handler; clones share the same service.
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoService>,
}

impl AppState {
    /// Creates state around an existing service.
    pub fn new(todos: Arc<dyn TodoService>) -> Self {
        Self { todos }
    }

    /// Creates state with the default service over `repository`.
    pub fn with_repository(repository: Arc<dyn TodoRepository>) -> Self {
        Self::new(Arc::new(DefaultTodoService::new(repository)))
    }

    /// Creates state over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryRepository::new()))
    }

    /// Creates state over the DynamoDB table named in `config`.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &Config) -> Self {
        use crate::storage::dynamodb::{build_client, DynamoDbRepository};

        let client = build_client(config).await;
        tracing::info!(
            table = %config.table_name,
            region = %config.aws_region,
            "Using DynamoDB storage"
        );

        Self::with_repository(Arc::new(DynamoDbRepository::new(
            client,
            config.table_name.clone(),
        )))
    }

    /// Creates state over the in-memory store. `config` only affects the
    /// HTTP layer for this backend.
    #[cfg(all(feature = "inmemory", not(feature = "dynamodb")))]
    pub async fn from_config(_config: &Config) -> Self {
        tracing::warn!("Using in-memory storage, data will be lost on shutdown");
        Self::in_memory()
    }
}
