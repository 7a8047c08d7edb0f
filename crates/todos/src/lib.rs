//! HTTP layer for the todos API.
//!
//! Wires the service from `todos_core` to an axum router, reads
//! configuration from the environment and provides the storage backends.
//! The `todos` binary serves the router on a TCP listener; `todos-lambda`
//! hands the same router to the AWS Lambda runtime.

pub mod app;
pub mod config;
pub mod handlers;
pub mod state;
pub mod storage;

pub use app::create_app;
pub use config::Config;
pub use state::AppState;
