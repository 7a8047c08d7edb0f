mod error;
mod operations;
mod requests;
mod response;
mod types;

pub use error::TodoError;
pub use operations::{touch, validate_create, validate_id, validate_update};
pub use requests::{CreateTodoRequest, UpdateTodoRequest};
pub use response::ApiResponse;
pub use types::Todo;
