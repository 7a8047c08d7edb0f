use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item.
///
/// `id` is opaque to clients and doubles as the storage key. Timestamps are
/// assigned server-side; `created_at` never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new, uncompleted todo with a random UUID v4 identifier.
    ///
    /// Both timestamps are set to `now`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets a specific ID for this todo (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_defaults() {
        let now = Utc::now();
        let todo = Todo::new("Buy milk", "", now);

        assert!(!todo.id.is_empty());
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, "");
        assert!(!todo.completed);
        assert_eq!(todo.created_at, now);
        assert_eq!(todo.updated_at, now);
    }

    #[test]
    fn test_new_todo_ids_are_unique() {
        let now = Utc::now();
        let a = Todo::new("a", "", now);
        let b = Todo::new("b", "", now);

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_todo_serializes_snake_case_fields() {
        let now = Utc::now();
        let todo = Todo::new("Write docs", "README", now).with_id("todo-1");
        let json = serde_json::to_value(&todo).unwrap();

        assert_eq!(json["id"], "todo-1");
        assert_eq!(json["title"], "Write docs");
        assert_eq!(json["description"], "README");
        assert_eq!(json["completed"], false);
        assert!(json["created_at"].is_string());
        assert!(json["updated_at"].is_string());
    }

    #[test]
    fn test_todo_missing_description_deserializes_empty() {
        let json = r#"{
            "id": "todo-1",
            "title": "No description",
            "completed": true,
            "created_at": "2024-01-15T10:30:00.123456789Z",
            "updated_at": "2024-01-15T10:30:00.123456789Z"
        }"#;

        let todo: Todo = serde_json::from_str(json).unwrap();

        assert_eq!(todo.description, "");
        assert!(todo.completed);
    }
}
