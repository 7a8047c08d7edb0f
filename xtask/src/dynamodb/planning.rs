//! Pure functions for calculating deployment plans.

use super::config::TableConfig;

/// Table status as reported by DescribeTable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
    Other,
}

/// Current state of an existing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub status: TableStatus,
    pub partition_key: Option<String>,
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists with the expected key.
    NoChanges { table_name: String },
    /// Table exists but is keyed differently; it cannot be altered in place.
    KeyMismatch {
        table_name: String,
        expected: String,
        actual: Option<String>,
    },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

/// Calculate what changes are needed to reach the desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    match current {
        None => DeployPlan::CreateTable {
            config: desired.clone(),
        },
        Some(state) if state.partition_key.as_deref() == Some(desired.partition_key.as_str()) => {
            DeployPlan::NoChanges {
                table_name: desired.table_name.clone(),
            }
        }
        Some(state) => DeployPlan::KeyMismatch {
            table_name: desired.table_name.clone(),
            expected: desired.partition_key.clone(),
            actual: state.partition_key.clone(),
        },
    }
}

/// Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => vec![
            format!("+ Create table: {}", config.table_name),
            format!("  Partition key: {} (S)", config.partition_key),
            "  Billing: PAY_PER_REQUEST".to_string(),
        ],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
        DeployPlan::KeyMismatch {
            table_name,
            expected,
            actual,
        } => vec![
            format!("! Table '{}' has an incompatible key schema", table_name),
            format!("  Expected partition key: {} (S)", expected),
            format!(
                "  Found partition key: {}",
                actual.as_deref().unwrap_or("<none>")
            ),
            "  Destroy and redeploy the table to fix it".to_string(),
        ],
    }
}

/// Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::config::todos_table_config;
    use super::*;

    fn active_table(partition_key: &str) -> TableState {
        TableState {
            status: TableStatus::Active,
            partition_key: Some(partition_key.to_string()),
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = todos_table_config();

        let plan = calculate_deploy_plan(None, &desired);

        assert_eq!(plan, DeployPlan::CreateTable { config: desired });
    }

    #[test]
    fn test_matching_table_needs_no_changes() {
        let desired = todos_table_config().with_table_name("todos-dev");

        let plan = calculate_deploy_plan(Some(&active_table("id")), &desired);

        assert_eq!(
            plan,
            DeployPlan::NoChanges {
                table_name: "todos-dev".to_string()
            }
        );
    }

    #[test]
    fn test_foreign_key_schema_is_reported() {
        let desired = todos_table_config();

        let plan = calculate_deploy_plan(Some(&active_table("PK")), &desired);

        assert!(matches!(plan, DeployPlan::KeyMismatch { .. }));
        assert!(format_deploy_plan(&plan)[0].starts_with('!'));
    }

    #[test]
    fn test_destroy_plan() {
        assert_eq!(
            calculate_destroy_plan(None, "todos"),
            DestroyPlan::AlreadyGone {
                table_name: "todos".to_string()
            }
        );
        assert_eq!(
            calculate_destroy_plan(Some(&active_table("id")), "todos"),
            DestroyPlan::DeleteTable {
                table_name: "todos".to_string()
            }
        );
    }
}
