use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use time::OffsetDateTime;

use super::{GoalId, TodoId, UserId};
use crate::FocusError;

/// Todo priority. Stored as 1, 2 or 3 by the backend.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter,
    Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_i64(self) -> i64 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    /// Next priority, wrapping from High back to Low.
    pub fn next(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

impl TryFrom<i64> for Priority {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::Low),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::High),
            other => Err(format!("invalid priority: {}", other)),
        }
    }
}

impl From<Priority> for i64 {
    fn from(priority: Priority) -> Self {
        priority.as_i64()
    }
}

/// A todo as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub goal_id: Option<GoalId>,
    pub priority: Priority,
    pub completed: bool,
    /// Todo count at creation time. Never renumbered, so only useful as a
    /// relative recency signal.
    pub order_index: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// User input for a new todo, before validation.
///
/// A `goal_id` of `None` lets the workspace's matcher pick one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub goal_id: Option<GoalId>,
    pub priority: Priority,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_goal(mut self, goal_id: impl Into<GoalId>) -> Self {
        self.goal_id = Some(goal_id.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Trims the text fields and rejects an empty title.
    pub fn validate(self) -> Result<Self, FocusError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(FocusError::validation("todo title is empty"));
        }
        Ok(Self {
            title,
            description: self.description.trim().to_string(),
            ..self
        })
    }
}

/// Field set sent to [`TodoStore::create_todo`](crate::ports::outbound::TodoStore::create_todo).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub goal_id: Option<GoalId>,
    pub priority: Priority,
    pub completed: bool,
    pub order_index: i64,
}

/// Partial update for a todo. `None` fields are left untouched.
///
/// `goal_id` is doubly optional: `Some(None)` clears the goal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoPatch {
    pub completed: Option<bool>,
    pub goal_id: Option<Option<GoalId>>,
}

impl TodoPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn goal(goal_id: Option<GoalId>) -> Self {
        Self {
            goal_id: Some(goal_id),
            ..Default::default()
        }
    }

    /// Apply the patch to a local copy.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(goal_id) = &self.goal_id {
            todo.goal_id = goal_id.clone();
        }
    }
}
