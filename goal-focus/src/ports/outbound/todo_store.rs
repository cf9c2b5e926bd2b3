//! Todo store port (outbound).

use async_trait::async_trait;

use crate::models::{NewTodo, Todo, TodoId, TodoPatch, UserId};
use crate::StoreError;

/// Outbound port for todo persistence.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// List every todo owned by `user_id`, sorted by ascending `order_index`.
    async fn list_todos(&self, user_id: &UserId) -> Result<Vec<Todo>, StoreError>;

    /// Create a todo and return the persisted record.
    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, StoreError>;

    /// Apply a partial update. The backend's answer carries nothing beyond
    /// success or failure.
    async fn update_todo(&self, todo_id: &TodoId, patch: &TodoPatch) -> Result<(), StoreError>;

    async fn delete_todo(&self, todo_id: &TodoId) -> Result<(), StoreError>;
}
