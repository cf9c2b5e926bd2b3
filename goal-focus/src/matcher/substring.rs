use std::sync::Arc;

use async_trait::async_trait;

use super::{build_prompt, GoalMatcher};
use crate::models::{Goal, GoalId};
use crate::ports::outbound::TextGenerator;

/// Asks a text generator for the best goal title, then resolves the answer
/// by case-insensitive substring containment in either direction.
///
/// The first goal in list order that contains the answer, or is contained
/// by it, wins. There is no confidence threshold.
///
/// # Example
///
/// ```ignore
/// let matcher = SubstringMatcher::new(Arc::new(generator));
/// let goal_id = matcher.match_goal(&goals, "Buy running shoes").await;
/// ```
pub struct SubstringMatcher<G: ?Sized> {
    generator: Arc<G>,
}

impl<G: ?Sized> SubstringMatcher<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }
}

/// Resolve a free-text answer to a goal.
///
/// The answer is only lowercased. Any overlap counts, so an empty answer
/// matches the first goal and "none" matches a goal titled "One".
pub fn resolve_by_substring<'a>(goals: &'a [Goal], answer: &str) -> Option<&'a Goal> {
    let answer = answer.to_lowercase();
    goals.iter().find(|g| {
        let title = g.title.to_lowercase();
        answer.contains(&title) || title.contains(&answer)
    })
}

#[async_trait]
impl<G: TextGenerator + ?Sized> GoalMatcher for SubstringMatcher<G> {
    async fn match_goal(&self, goals: &[Goal], todo_title: &str) -> Option<GoalId> {
        if goals.is_empty() {
            return None;
        }

        let prompt = build_prompt(goals, todo_title);
        let answer = match self.generator.generate_text(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Goal matching failed, proceeding without goal");
                return None;
            }
        };

        let matched = resolve_by_substring(goals, &answer);
        tracing::debug!(
            answer = %answer.trim(),
            matched = ?matched.map(|g| g.id.as_str()),
            "Resolved goal matching answer"
        );
        matched.map(|g| g.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::test_support::goal;
    use crate::mock::MockGenerator;

    fn goals() -> Vec<Goal> {
        vec![
            goal("g1", "Get fit", "Run a marathon"),
            goal("g2", "Learn Rust", "Ship a crate"),
            goal("g3", "Read more", "Two books a month"),
        ]
    }

    #[test]
    fn resolves_exact_title_case_insensitively() {
        let goals = goals();
        let matched = resolve_by_substring(&goals, "LEARN RUST");
        assert_eq!(matched.unwrap().id.as_str(), "g2");
    }

    #[test]
    fn resolves_when_answer_contains_title() {
        let goals = goals();
        let matched = resolve_by_substring(&goals, "The best match is Read more.");
        assert_eq!(matched.unwrap().id.as_str(), "g3");
    }

    #[test]
    fn resolves_when_title_contains_answer() {
        let goals = goals();
        let matched = resolve_by_substring(&goals, "fit");
        assert_eq!(matched.unwrap().id.as_str(), "g1");
    }

    #[test]
    fn first_goal_in_list_order_wins() {
        let goals = vec![goal("a", "Rust", ""), goal("b", "Learn Rust", "")];
        let matched = resolve_by_substring(&goals, "Learn Rust");
        assert_eq!(matched.unwrap().id.as_str(), "a");
    }

    #[test]
    fn none_and_unrelated_answers_do_not_match() {
        let goals = goals();
        assert!(resolve_by_substring(&goals, "none").is_none());
        assert!(resolve_by_substring(&goals, "Cook dinner").is_none());
    }

    #[test]
    fn answer_is_matched_verbatim() {
        let goals = vec![goal("g1", "One", "")];
        assert_eq!(
            resolve_by_substring(&goals, "None").unwrap().id.as_str(),
            "g1"
        );

        let goals = vec![goal("g1", "One day", ""), goal("g2", "Get fit", "")];
        assert_eq!(resolve_by_substring(&goals, "").unwrap().id.as_str(), "g1");
        assert!(resolve_by_substring(&goals, "fit.").is_none());
        assert!(resolve_by_substring(&goals, "\"Get fit\"").is_some());
    }

    #[tokio::test]
    async fn match_goal_sends_prompt_and_resolves() {
        let generator = Arc::new(MockGenerator::returning("Learn Rust"));
        let matcher = SubstringMatcher::new(generator.clone());

        let matched = matcher.match_goal(&goals(), "Write a parser").await;

        assert_eq!(matched, Some(GoalId::new("g2")));
        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("\"Write a parser\""));
        assert!(prompts[0].contains("Get fit: Run a marathon"));
    }

    #[tokio::test]
    async fn match_goal_swallows_generation_errors() {
        let generator = Arc::new(MockGenerator::failing());
        let matcher = SubstringMatcher::new(generator.clone());

        assert_eq!(matcher.match_goal(&goals(), "Anything").await, None);
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn match_goal_skips_generation_without_goals() {
        let generator = Arc::new(MockGenerator::returning("Get fit"));
        let matcher = SubstringMatcher::new(generator.clone());

        assert_eq!(matcher.match_goal(&[], "Anything").await, None);
        assert_eq!(generator.call_count(), 0);
    }
}
