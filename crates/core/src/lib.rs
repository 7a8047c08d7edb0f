//! Core for the todos API.
//!
//! Pure types and functions (`todo`), the storage contract (`storage`), the
//! error-to-status mapping (`http_mapping`) and the service layer
//! (`service`) that composes them. Nothing in this crate performs I/O on
//! its own; storage backends live in the `todos` crate.

pub mod http_mapping;
pub mod service;
pub mod storage;
pub mod todo;

pub use http_mapping::todo_error_to_status_code;
pub use service::{DefaultTodoService, TodoService};
pub use todo::{ApiResponse, CreateTodoRequest, Todo, TodoError, UpdateTodoRequest};
