use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{GoalId, UserId};
use crate::FocusError;

/// Colors offered when creating a goal. The first entry is the default.
pub const GOAL_COLORS: [&str; 10] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4", "#84cc16", "#f97316",
    "#ec4899", "#6366f1",
];

pub fn default_goal_color() -> &'static str {
    GOAL_COLORS[0]
}

/// A goal as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub user_id: UserId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub color: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// User input for a new goal, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub color: String,
}

impl GoalDraft {
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

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Trims the text fields and rejects an empty title.
    pub fn validate(self) -> Result<Self, FocusError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(FocusError::validation("goal title is empty"));
        }
        let color = match self.color.trim() {
            "" => default_goal_color().to_string(),
            c => c.to_string(),
        };
        Ok(Self {
            title,
            description: self.description.trim().to_string(),
            color,
        })
    }

    pub(crate) fn into_new_goal(self, user_id: UserId) -> NewGoal {
        NewGoal {
            user_id,
            title: self.title,
            description: self.description,
            color: self.color,
        }
    }
}

/// Field set sent to [`GoalStore::create_goal`](crate::ports::outbound::GoalStore::create_goal).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGoal {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_fields() {
        let draft = GoalDraft::new("  Get fit ")
            .with_description(" run more\n")
            .with_color("#ef4444")
            .validate()
            .unwrap();

        assert_eq!(draft.title, "Get fit");
        assert_eq!(draft.description, "run more");
        assert_eq!(draft.color, "#ef4444");
    }

    #[test]
    fn validate_rejects_blank_title() {
        let err = GoalDraft::new("   ").validate().unwrap_err();
        assert!(matches!(err, FocusError::Validation(_)));
    }

    #[test]
    fn validate_defaults_color() {
        let draft = GoalDraft::new("Learn Rust").validate().unwrap();
        assert_eq!(draft.color, "#3b82f6");
    }

    #[test]
    fn goal_parses_backend_record() {
        let goal: Goal = serde_json::from_str(
            r##"{
                "id": "goal_1",
                "user_id": "user_1",
                "title": "Get fit",
                "color": "#10b981",
                "created_at": "2024-03-01T10:00:00Z",
                "updated_at": "2024-03-01T10:00:00Z"
            }"##,
        )
        .unwrap();

        assert_eq!(goal.id, GoalId::new("goal_1"));
        assert_eq!(goal.description, "");
    }
}
