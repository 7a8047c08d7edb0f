//! AWS Lambda entry point.
//!
//! Builds the same router as the `todos` server once per cold start and lets
//! `lambda_http` translate API Gateway / Function URL events to and from
//! HTTP requests.

use lambda_http::{run, Error};
use tracing_subscriber::EnvFilter;

use todos::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todos=info,todos_core=info,tower_http=info")),
        )
        .json()
        .without_time()
        .init();

    let config = Config::from_env();
    let state = AppState::from_config(&config).await;

    run(create_app(state, &config)).await
}
