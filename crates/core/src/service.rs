//! Todo service: the business rules between handlers and storage.
//!
//! The service owns id generation and timestamps, applies merge-patch
//! updates and decides what "not found" means for each operation. It keeps
//! no state besides the repository handle and never retries.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::storage::TodoRepository;
use crate::todo::{
    touch, validate_create, validate_id, validate_update, CreateTodoRequest, Todo, TodoError,
    UpdateTodoRequest,
};

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, TodoError>;

/// Operations exposed to the HTTP layer.
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Validates and persists a new todo.
    async fn create_todo(&self, request: CreateTodoRequest) -> Result<Todo>;

    /// Gets a todo by ID. Absent todos are `Ok(None)`.
    async fn get_todo(&self, id: &str) -> Result<Option<Todo>>;

    /// Lists every todo. An empty table yields an empty list.
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Applies a merge-patch to an existing todo. Absent todos are
    /// `Ok(None)`.
    ///
    /// Read and write are not atomic: concurrent updates to the same todo
    /// are last-writer-wins.
    async fn update_todo(&self, id: &str, request: UpdateTodoRequest) -> Result<Option<Todo>>;

    /// Deletes a todo. Unlike `update_todo`, an absent todo is
    /// `Err(TodoError::NotFound)`.
    async fn delete_todo(&self, id: &str) -> Result<()>;
}

/// [`TodoService`] backed by any [`TodoRepository`].
#[derive(Clone)]
pub struct DefaultTodoService {
    repository: Arc<dyn TodoRepository>,
}

impl DefaultTodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TodoService for DefaultTodoService {
    async fn create_todo(&self, request: CreateTodoRequest) -> Result<Todo> {
        validate_create(&request)?;

        let todo = request.into_todo(Utc::now());
        self.repository.put_todo(&todo).await?;

        tracing::info!(todo_id = %todo.id, title = %todo.title, "Created todo");
        Ok(todo)
    }

    async fn get_todo(&self, id: &str) -> Result<Option<Todo>> {
        validate_id(id)?;
        Ok(self.repository.get_todo(id).await?)
    }

    async fn list_todos(&self) -> Result<Vec<Todo>> {
        Ok(self.repository.list_todos().await?)
    }

    async fn update_todo(&self, id: &str, request: UpdateTodoRequest) -> Result<Option<Todo>> {
        validate_id(id)?;
        validate_update(&request)?;

        let Some(mut todo) = self.repository.get_todo(id).await? else {
            return Ok(None);
        };

        request.apply_to(&mut todo);
        touch(&mut todo, Utc::now());
        self.repository.put_todo(&todo).await?;

        tracing::info!(todo_id = %todo.id, completed = todo.completed, "Updated todo");
        Ok(Some(todo))
    }

    async fn delete_todo(&self, id: &str) -> Result<()> {
        validate_id(id)?;

        if self.repository.get_todo(id).await?.is_none() {
            return Err(TodoError::NotFound(id.to_string()));
        }
        self.repository.delete_todo(id).await?;

        tracing::info!(todo_id = %id, "Deleted todo");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tokio::sync::RwLock;

    use super::*;
    use crate::storage::{RepositoryError, Result as RepoResult};

    #[derive(Default)]
    struct MapRepository {
        todos: RwLock<HashMap<String, Todo>>,
    }

    #[async_trait]
    impl TodoRepository for MapRepository {
        async fn put_todo(&self, todo: &Todo) -> RepoResult<()> {
            self.todos
                .write()
                .await
                .insert(todo.id.clone(), todo.clone());
            Ok(())
        }

        async fn get_todo(&self, id: &str) -> RepoResult<Option<Todo>> {
            Ok(self.todos.read().await.get(id).cloned())
        }

        async fn list_todos(&self) -> RepoResult<Vec<Todo>> {
            Ok(self.todos.read().await.values().cloned().collect())
        }

        async fn delete_todo(&self, id: &str) -> RepoResult<()> {
            self.todos.write().await.remove(id);
            Ok(())
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl TodoRepository for FailingRepository {
        async fn put_todo(&self, _todo: &Todo) -> RepoResult<()> {
            Err(RepositoryError::ConnectionFailed("refused".to_string()))
        }

        async fn get_todo(&self, _id: &str) -> RepoResult<Option<Todo>> {
            Err(RepositoryError::Timeout("GetItem".to_string()))
        }

        async fn list_todos(&self) -> RepoResult<Vec<Todo>> {
            Err(RepositoryError::QueryFailed("Scan".to_string()))
        }

        async fn delete_todo(&self, _id: &str) -> RepoResult<()> {
            Err(RepositoryError::QueryFailed("DeleteItem".to_string()))
        }
    }

    fn service() -> DefaultTodoService {
        DefaultTodoService::new(Arc::new(MapRepository::default()))
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let service = service();

        let todo = service
            .create_todo(CreateTodoRequest::new("Buy milk"))
            .await
            .unwrap();

        assert!(!todo.id.is_empty());
        assert!(!todo.completed);
        assert_eq!(todo.description, "");
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_entity() {
        let service = service();
        let created = service
            .create_todo(CreateTodoRequest::new("Walk dog").with_description("Evening"))
            .await
            .unwrap();

        let fetched = service.get_todo(&created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title_without_writing() {
        let service = service();

        let result = service.create_todo(CreateTodoRequest::new("  ")).await;

        assert!(matches!(result, Err(TodoError::Validation(_))));
        assert!(service.list_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        assert_eq!(service().get_todo("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_returns_every_todo() {
        let service = service();
        for title in ["a", "b", "c"] {
            service
                .create_todo(CreateTodoRequest::new(title))
                .await
                .unwrap();
        }

        assert_eq!(service.list_todos().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_partial_update_preserves_other_fields() {
        let service = service();
        let created = service
            .create_todo(CreateTodoRequest::new("Write report").with_description("Q3"))
            .await
            .unwrap();

        let updated = service
            .update_todo(
                &created.id,
                UpdateTodoRequest::default().with_completed(true),
            )
            .await
            .unwrap()
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        let stored = service.get_todo(&created.id).await.unwrap();
        assert_eq!(stored, Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_is_none() {
        let result = service()
            .update_todo("missing", UpdateTodoRequest::default().with_title("x"))
            .await
            .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_update_requires_a_field() {
        let service = service();
        let created = service
            .create_todo(CreateTodoRequest::new("t"))
            .await
            .unwrap();

        let result = service
            .update_todo(&created.id, UpdateTodoRequest::default())
            .await;

        assert!(matches!(result, Err(TodoError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_twice_then_not_found() {
        let service = service();
        let created = service
            .create_todo(CreateTodoRequest::new("t"))
            .await
            .unwrap();

        service.delete_todo(&created.id).await.unwrap();
        let second = service.delete_todo(&created.id).await;

        assert_eq!(second, Err(TodoError::NotFound(created.id.clone())));
        assert_eq!(service.get_todo(&created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let result = service().delete_todo("missing").await;

        assert_eq!(result, Err(TodoError::NotFound("missing".to_string())));
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let service = DefaultTodoService::new(Arc::new(FailingRepository));

        assert!(matches!(
            service.create_todo(CreateTodoRequest::new("t")).await,
            Err(TodoError::Storage(RepositoryError::ConnectionFailed(_)))
        ));
        assert!(matches!(
            service.get_todo("id").await,
            Err(TodoError::Storage(RepositoryError::Timeout(_)))
        ));
        assert!(matches!(
            service.list_todos().await,
            Err(TodoError::Storage(RepositoryError::QueryFailed(_)))
        ));
        assert!(matches!(
            service.delete_todo("id").await,
            Err(TodoError::Storage(RepositoryError::Timeout(_)))
        ));
    }
}
