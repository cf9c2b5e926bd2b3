//! Strategies for assigning a new todo to one of the user's goals.
//!
//! The workspace only sees [`GoalMatcher`]: goal list plus todo title in,
//! optional goal id out. Matchers never fail; a provider error simply means
//! "no goal".

use async_trait::async_trait;

use crate::models::{Goal, GoalId};

mod exact;
mod substring;

pub use exact::ExactTitleMatcher;
pub use substring::SubstringMatcher;

/// Picks the goal a new todo belongs to, if any.
#[async_trait]
pub trait GoalMatcher: Send + Sync + 'static {
    async fn match_goal(&self, goals: &[Goal], todo_title: &str) -> Option<GoalId>;
}

/// Matcher that never assigns a goal.
#[async_trait]
impl GoalMatcher for () {
    async fn match_goal(&self, _goals: &[Goal], _todo_title: &str) -> Option<GoalId> {
        None
    }
}

/// Build the prompt asking which goal `todo_title` fits best.
pub fn build_prompt(goals: &[Goal], todo_title: &str) -> String {
    let goals_context = goals
        .iter()
        .map(|g| format!("{}: {}", g.title, g.description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Given these goals:\n{}\n\nWhich goal does this task best match: \"{}\"?\n\nRespond with just the goal title, or \"none\" if no match.",
        goals_context, todo_title
    )
}

#[cfg(test)]
pub(crate) mod test_support {
    use time::macros::datetime;

    use crate::models::{Goal, GoalId, UserId};

    pub fn goal(id: &str, title: &str, description: &str) -> Goal {
        Goal {
            id: GoalId::new(id),
            user_id: UserId::new("user_1"),
            title: title.to_string(),
            description: description.to_string(),
            color: "#3b82f6".to_string(),
            created_at: datetime!(2024-03-01 10:00 UTC),
            updated_at: datetime!(2024-03-01 10:00 UTC),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::goal;
    use super::*;

    #[test]
    fn prompt_lists_goals_and_task() {
        let goals = vec![
            goal("g1", "Get fit", "Run a marathon"),
            goal("g2", "Learn Rust", ""),
        ];

        let prompt = build_prompt(&goals, "Buy running shoes");

        assert_eq!(
            prompt,
            "Given these goals:\nGet fit: Run a marathon\nLearn Rust: \n\nWhich goal does this task best match: \"Buy running shoes\"?\n\nRespond with just the goal title, or \"none\" if no match."
        );
    }

    #[tokio::test]
    async fn unit_matcher_never_matches() {
        let goals = vec![goal("g1", "Get fit", "")];
        assert_eq!(().match_goal(&goals, "Get fit").await, None);
    }
}
