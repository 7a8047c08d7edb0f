//! Table configuration types (pure data).

use todos::storage::dynamodb::PARTITION_KEY;

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: String,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Returns the table layout the `todos` repository expects: a string
/// partition key and nothing else. Billing is always on-demand.
pub fn todos_table_config() -> TableConfig {
    TableConfig {
        table_name: "todos".to_string(),
        partition_key: PARTITION_KEY.to_string(),
    }
}
