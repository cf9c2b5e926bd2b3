use anyhow::{Context, Result};
use focus_client::{FocusApiClient, GeminiGenerator};
use goal_focus::ports::outbound::TextGenerator;
use goal_focus::{AuthState, ExactTitleMatcher, GoalMatcher, StoreError, SubstringMatcher};
use std::sync::Arc;

use crate::config::{AiProvider, FocusConfig, MatcherKind};
use crate::session_store;

const NOT_LOGGED_IN: &str = "Not logged in. Run `goal-focus login` first.";
const UNAUTH_INVALID_SESSION: &str =
    "Session expired or invalid. Run `goal-focus login` to authenticate.";

pub fn build_client(config: &FocusConfig, dev: bool) -> Result<FocusApiClient> {
    if dev {
        return FocusApiClient::dev().context("Failed to build dev client");
    }

    let token = session_store::load_token()?.context(NOT_LOGGED_IN)?;
    FocusApiClient::new(config.api_url(), Some(token)).context("Failed to build API client")
}

/// Text generator for goal matching. Dev mode always answers locally.
pub fn build_generator(
    config: &FocusConfig,
    client: Arc<FocusApiClient>,
) -> Result<Arc<dyn TextGenerator>> {
    if client.is_dev() {
        return Ok(client);
    }

    match config.ai_provider {
        AiProvider::Backend => Ok(client),
        AiProvider::Gemini => {
            let gemini = GeminiGenerator::try_from_env(config.gemini_model.as_str())
                .context("ai_provider is \"gemini\" but GEMINI_API_KEY is not set")?;
            Ok(Arc::new(gemini))
        }
    }
}

pub fn build_matcher(
    kind: MatcherKind,
    generator: Arc<dyn TextGenerator>,
) -> Arc<dyn GoalMatcher> {
    match kind {
        MatcherKind::Substring => Arc::new(SubstringMatcher::new(generator)),
        MatcherKind::Exact => Arc::new(ExactTitleMatcher::new(generator)),
        MatcherKind::Off => Arc::new(()),
    }
}

/// Resolve the token's user and publish it as the signed-in session.
pub async fn sign_in(client: &FocusApiClient, auth: &AuthState) -> Result<()> {
    let session = match client.me().await {
        Ok(session) => session,
        Err(StoreError::Unauthorized) => anyhow::bail!(UNAUTH_INVALID_SESSION),
        Err(e) => return Err(e).context("Failed to load the signed-in user"),
    };

    tracing::info!(user_id = %session.user_id, "Signed in");
    auth.sign_in(session);
    Ok(())
}
