use std::sync::Arc;

use async_trait::async_trait;

use super::{build_prompt, GoalMatcher};
use crate::models::{Goal, GoalId};
use crate::ports::outbound::TextGenerator;

/// Stricter variant of [`SubstringMatcher`](super::SubstringMatcher): the
/// answer must equal a goal title, ignoring case and surrounding quotes.
pub struct ExactTitleMatcher<G: ?Sized> {
    generator: Arc<G>,
}

impl<G: ?Sized> ExactTitleMatcher<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }
}

/// Trimmed, unquoted, lowercased answer. Empty and "none" name no goal.
fn normalize_answer(text: &str) -> Option<String> {
    let answer = text
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '.')
        .trim()
        .to_lowercase();
    if answer.is_empty() || answer == "none" {
        None
    } else {
        Some(answer)
    }
}

pub fn resolve_by_title<'a>(goals: &'a [Goal], answer: &str) -> Option<&'a Goal> {
    let answer = normalize_answer(answer)?;
    goals
        .iter()
        .find(|g| g.title.trim().to_lowercase() == answer)
}

#[async_trait]
impl<G: TextGenerator + ?Sized> GoalMatcher for ExactTitleMatcher<G> {
    async fn match_goal(&self, goals: &[Goal], todo_title: &str) -> Option<GoalId> {
        if goals.is_empty() {
            return None;
        }

        let prompt = build_prompt(goals, todo_title);
        match self.generator.generate_text(&prompt).await {
            Ok(answer) => resolve_by_title(goals, &answer).map(|g| g.id.clone()),
            Err(e) => {
                tracing::warn!(error = %e, "Goal matching failed, proceeding without goal");
                None
            }
        }
    }
}
