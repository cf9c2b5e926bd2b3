//! Text generation port (outbound).

use async_trait::async_trait;

use crate::GenerationError;

/// Trait for free-form text generation.
///
/// Abstracts the provider (hosted backend, Gemini, ...) for easy testing.
#[async_trait]
pub trait TextGenerator: Send + Sync + 'static {
    /// Generate a completion for `prompt`.
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Disabled generator. Every call fails with [`GenerationError::Disabled`].
#[async_trait]
impl TextGenerator for () {
    async fn generate_text(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{GoalStore, TodoStore};

    // Verify traits are object-safe (can be used as trait objects)
    fn _assert_generator_object_safe(_: &dyn TextGenerator) {}
    fn _assert_goal_store_object_safe(_: &dyn GoalStore) {}
    fn _assert_todo_store_object_safe(_: &dyn TodoStore) {}

    #[tokio::test]
    async fn unit_generator_is_disabled() {
        let err = ().generate_text("anything").await.unwrap_err();
        assert!(matches!(err, GenerationError::Disabled));
    }
}
