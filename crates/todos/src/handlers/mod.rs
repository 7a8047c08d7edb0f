pub mod error;
pub mod health;
pub mod todos;

pub use error::{handle_middleware_error, handle_panic, AppError};
