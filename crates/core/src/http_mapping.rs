//! Pure mapping from service errors to HTTP status codes.

use crate::todo::TodoError;

/// Maps a [`TodoError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Storage` -> 500 (Internal Server Error), whatever the backend cause
///
/// # Examples
///
/// ```
/// use todos_core::{todo_error_to_status_code, TodoError};
///
/// let error = TodoError::NotFound("abc-123".to_string());
/// assert_eq!(todo_error_to_status_code(&error), 404);
/// ```
pub fn todo_error_to_status_code(error: &TodoError) -> u16 {
    match error {
        TodoError::Validation(_) => 400,
        TodoError::NotFound(_) => 404,
        TodoError::Storage(_) => 500,
    }
}
