use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todos_core::storage::{Result, TodoRepository};
use todos_core::Todo;

/// In-memory storage backend.
///
/// Clones share the same underlying map. Data is not persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    todos: Arc<RwLock<HashMap<String, Todo>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn put_todo(&self, todo: &Todo) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.insert(todo.id.clone(), todo.clone());
        Ok(())
    }

    async fn get_todo(&self, id: &str) -> Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.get(id).cloned())
    }

    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.values().cloned().collect())
    }

    async fn delete_todo(&self, id: &str) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn create_test_todo(title: &str) -> Todo {
        Todo::new(title, "", Utc::now())
    }

    #[tokio::test]
    async fn test_put_and_get_todo() {
        let repo = InMemoryRepository::new();
        let todo = create_test_todo("Buy milk");

        repo.put_todo(&todo).await.unwrap();

        let fetched = repo.get_todo(&todo.id).await.unwrap();
        assert_eq!(fetched, Some(todo));
    }

    #[tokio::test]
    async fn test_get_missing_todo() {
        let repo = InMemoryRepository::new();

        assert_eq!(repo.get_todo("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let repo = InMemoryRepository::new();
        let mut todo = create_test_todo("Original");
        repo.put_todo(&todo).await.unwrap();

        todo.title = "Changed".to_string();
        repo.put_todo(&todo).await.unwrap();

        let todos = repo.list_todos().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Changed");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryRepository::new();
        let todo = create_test_todo("Gone soon");
        repo.put_todo(&todo).await.unwrap();

        repo.delete_todo(&todo.id).await.unwrap();
        repo.delete_todo(&todo.id).await.unwrap();

        assert_eq!(repo.get_todo(&todo.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryRepository::new();
        let clone = repo.clone();

        repo.put_todo(&create_test_todo("Shared")).await.unwrap();

        assert_eq!(clone.list_todos().await.unwrap().len(), 1);
    }
}
