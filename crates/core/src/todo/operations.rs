//! Pure validation and timestamp functions for todos.

use chrono::{DateTime, Duration, Utc};

use super::{CreateTodoRequest, Todo, TodoError, UpdateTodoRequest};

/// Validates a create request. The title must contain something other than
/// whitespace.
pub fn validate_create(request: &CreateTodoRequest) -> Result<(), TodoError> {
    if request.title.trim().is_empty() {
        return Err(TodoError::Validation("title is required".to_string()));
    }
    Ok(())
}

/// Validates an update request. At least one field must be present.
pub fn validate_update(request: &UpdateTodoRequest) -> Result<(), TodoError> {
    if request.is_empty() {
        return Err(TodoError::Validation(
            "At least one field must be provided for update".to_string(),
        ));
    }
    Ok(())
}

/// Validates a path identifier.
pub fn validate_id(id: &str) -> Result<(), TodoError> {
    if id.trim().is_empty() {
        return Err(TodoError::Validation("ID is required".to_string()));
    }
    Ok(())
}

/// Refreshes `updated_at` to `now`.
///
/// The new value is always strictly later than the previous one, even if the
/// clock went backwards or two updates land within the same tick.
pub fn touch(todo: &mut Todo, now: DateTime<Utc>) {
    let floor = todo.updated_at + Duration::nanoseconds(1);
    todo.updated_at = now.max(floor);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_create_accepts_title() {
        assert!(validate_create(&CreateTodoRequest::new("Buy milk")).is_ok());
    }

    #[test]
    fn test_validate_create_rejects_empty_title() {
        let result = validate_create(&CreateTodoRequest::default());
        assert_eq!(
            result,
            Err(TodoError::Validation("title is required".to_string()))
        );
    }

    #[test]
    fn test_validate_create_rejects_whitespace_title() {
        assert!(validate_create(&CreateTodoRequest::new("   \t")).is_err());
    }

    #[test]
    fn test_validate_update_rejects_empty_request() {
        let result = validate_update(&UpdateTodoRequest::default());
        assert_eq!(
            result,
            Err(TodoError::Validation(
                "At least one field must be provided for update".to_string()
            ))
        );
    }

    #[test]
    fn test_validate_update_accepts_single_field() {
        let request = UpdateTodoRequest::default().with_title("New");
        assert!(validate_update(&request).is_ok());
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("abc").is_ok());
        assert_eq!(
            validate_id(" "),
            Err(TodoError::Validation("ID is required".to_string()))
        );
    }

    #[test]
    fn test_touch_moves_forward() {
        let created = Utc::now();
        let mut todo = Todo::new("t", "", created);
        let later = created + Duration::seconds(5);

        touch(&mut todo, later);

        assert_eq!(todo.updated_at, later);
        assert_eq!(todo.created_at, created);
    }

    #[test]
    fn test_touch_same_instant_still_advances() {
        let created = Utc::now();
        let mut todo = Todo::new("t", "", created);

        touch(&mut todo, created);

        assert!(todo.updated_at > created);
    }

    #[test]
    fn test_touch_never_goes_backwards() {
        let created = Utc::now();
        let mut todo = Todo::new("t", "", created);

        touch(&mut todo, created - Duration::hours(1));

        assert!(todo.updated_at > todo.created_at);
    }
}
