//! Goal store port (outbound).
//!
//! Defines the interface for the remote goal records.

use async_trait::async_trait;

use crate::models::{Goal, GoalId, NewGoal, UserId};
use crate::StoreError;

/// Outbound port for goal persistence.
///
/// Implementations talk to the hosted backend; every call is scoped to one
/// user by the caller.
#[async_trait]
pub trait GoalStore: Send + Sync + 'static {
    /// List every goal owned by `user_id`.
    async fn list_goals(&self, user_id: &UserId) -> Result<Vec<Goal>, StoreError>;

    /// Create a goal and return the persisted record, including its
    /// generated id and timestamps.
    async fn create_goal(&self, goal: &NewGoal) -> Result<Goal, StoreError>;

    /// Delete a goal. Todos referencing it are left as they are.
    async fn delete_goal(&self, goal_id: &GoalId) -> Result<(), StoreError>;
}
