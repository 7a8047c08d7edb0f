use async_trait::async_trait;

use crate::todo::Todo;

use super::Result;

/// Persistence contract for todos.
///
/// Implementations are shared across request tasks, so every method takes
/// `&self` and the trait requires `Send + Sync`.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Creates the todo or overwrites an existing one with the same `id`.
    async fn put_todo(&self, todo: &Todo) -> Result<()>;

    /// Gets a todo by its ID. Returns `None` when no such item exists.
    async fn get_todo(&self, id: &str) -> Result<Option<Todo>>;

    /// Returns every stored todo, in no particular order.
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Deletes a todo by its ID. Deleting a missing ID succeeds.
    async fn delete_todo(&self, id: &str) -> Result<()>;
}
