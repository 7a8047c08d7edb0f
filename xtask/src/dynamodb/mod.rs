//! DynamoDB table management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;
use todos::storage::dynamodb::{build_client, DynamoDbRepository};
use todos::Config;

/// DynamoDB table management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy the todos table.
    Deploy(DeployCommand),

    /// Insert demo todos.
    Seed(SeedCommand),
}

/// Deploy or destroy the todos table.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy the todos DynamoDB table.

By default, this command creates the table with a single string partition
key `id` and on-demand billing. An existing table with a different key
schema is reported and left untouched.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  DYNAMODB_ENDPOINT   - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating it.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use.
    #[arg(long, env = "DYNAMODB_TABLE_NAME", default_value = "todos")]
    pub table_name: String,
}

/// Insert demo todos.
#[derive(Debug, clap::Parser)]
pub struct SeedCommand {
    /// Number of todos to generate.
    #[arg(long, default_value = "10")]
    pub count: u32,

    /// Table name to use.
    #[arg(long, env = "DYNAMODB_TABLE_NAME", default_value = "todos")]
    pub table_name: String,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    let config = Config::from_env();

    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &config, &global).await,
        DynamodbAction::Seed(seed_cmd) => run_seed(seed_cmd, &config, &global).await,
    }
}

fn confirm(prompt: &str, default: bool) -> Result<()> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

    if confirmed {
        Ok(())
    } else {
        Err(DynamodbError::UserCancelled)
    }
}

async fn run_deploy(cmd: DeployCommand, config: &Config, global: &crate::Global) -> Result<()> {
    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), client::target_display(config));
        aprintln!();
    }

    let dynamo_client = build_client(config).await;
    let current_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;

    if cmd.destroy {
        let plan = planning::calculate_destroy_plan(current_state.as_ref(), &cmd.table_name);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in planning::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            confirm(
                "Are you sure you want to delete this table? ALL DATA WILL BE LOST",
                false,
            )?;
        }

        deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table destroyed successfully."));
        }
        return Ok(());
    }

    let table_config = config::todos_table_config().with_table_name(&cmd.table_name);
    let plan = planning::calculate_deploy_plan(current_state.as_ref(), &table_config);

    if !global.is_silent() {
        aprintln!("{}", p_c("Deploy Plan:"));
        for line in planning::format_deploy_plan(&plan) {
            if line.starts_with('+') {
                aprintln!("  {}", p_g(&line));
            } else if line.starts_with('!') {
                aprintln!("  {}", p_r(&line));
            } else {
                aprintln!("  {}", line);
            }
        }
        aprintln!();
    }

    match &plan {
        planning::DeployPlan::NoChanges { .. } => {
            if !global.is_silent() {
                aprintln!("{}", p_g("Infrastructure is up to date."));
            }
            return Ok(());
        }
        planning::DeployPlan::KeyMismatch { table_name, .. } => {
            return Err(DynamodbError::IncompatibleTable {
                table_name: table_name.clone(),
            });
        }
        planning::DeployPlan::CreateTable { .. } => {}
    }

    if !cmd.force {
        confirm("Apply these changes?", true)?;
    }

    if !global.is_silent() {
        aprintln!("{}", p_b("Creating table..."));
    }

    deploy::execute_deploy_plan(&dynamo_client, &plan).await?;

    if !global.is_silent() {
        aprintln!("{}", p_g("Infrastructure deployed successfully."));
    }

    Ok(())
}

async fn run_seed(cmd: SeedCommand, config: &Config, global: &crate::Global) -> Result<()> {
    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), client::target_display(config));
        aprintln!("{} {}", p_b("Table:"), cmd.table_name);
        aprintln!("{} {}", p_b("Todo count:"), cmd.count);
        aprintln!();
    }

    let dynamo_client = build_client(config).await;

    // Verify table exists
    let table_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;
    if table_state.is_none() {
        return Err(DynamodbError::TableNotFound {
            table_name: cmd.table_name,
        });
    }

    let todos = seed::generate_seed_todos(cmd.count, chrono::Utc::now());

    if !global.is_silent() {
        aprintln!("{}", p_c("Todos to create:"));
        for todo in todos.iter().take(5) {
            let mark = if todo.completed { "x" } else { " " };
            aprintln!("  [{}] {}", mark, todo.title);
        }
        if todos.len() > 5 {
            aprintln!("  ... and {} more", todos.len() - 5);
        }
        aprintln!();
    }

    if !cmd.force {
        confirm(&format!("Insert {} todos?", todos.len()), true)?;
    }

    let repository = DynamoDbRepository::new(dynamo_client, cmd.table_name);
    let inserted = seed::seed_todos(&repository, &todos).await?;

    if !global.is_silent() {
        aprintln!("{} {} todos inserted.", p_g("Success:"), inserted);
    }

    Ok(())
}
