use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors surfaced by the todo service.
///
/// `Validation` never reaches storage, `NotFound` is only produced for
/// deletes (lookups and updates report absence as `None`), and `Storage`
/// wraps backend failures unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Todo not found: {0}")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(#[from] RepositoryError),
}

impl TodoError {
    /// Message that is safe to return to clients.
    ///
    /// Storage failures collapse to a generic message; the detail is only
    /// logged server-side.
    pub fn public_message(&self) -> String {
        match self {
            TodoError::Validation(message) => message.clone(),
            TodoError::NotFound(_) => "Todo not found".to_string(),
            TodoError::Storage(_) => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_error_display() {
        assert_eq!(
            TodoError::Validation("title is required".to_string()).to_string(),
            "Validation error: title is required"
        );
        assert_eq!(
            TodoError::NotFound("abc-123".to_string()).to_string(),
            "Todo not found: abc-123"
        );
        assert_eq!(
            TodoError::Storage(RepositoryError::Timeout("GetItem".to_string())).to_string(),
            "Storage error: Operation timed out: GetItem"
        );
    }

    #[test]
    fn test_public_message_hides_storage_detail() {
        let error = TodoError::from(RepositoryError::ConnectionFailed(
            "dispatch failure: connection refused (os error 111)".to_string(),
        ));

        assert_eq!(error.public_message(), "Internal server error");
    }

    #[test]
    fn test_public_message_keeps_validation_detail() {
        let error = TodoError::Validation("ID is required".to_string());

        assert_eq!(error.public_message(), "ID is required");
    }
}
