use anyhow::{Context, Result};
use focus_client::GEMINI_MODEL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::Display;

const APP_DIR: &str = "goal-focus";
const ENV_PREFIX: &str = "GOAL_FOCUS";

/// Which service answers goal matching prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AiProvider {
    /// The hosted backend's generate-text endpoint.
    #[default]
    Backend,
    /// Google Gemini, keyed by `GEMINI_API_KEY`.
    Gemini,
}

/// How a generated answer is resolved to a goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatcherKind {
    #[default]
    Substring,
    Exact,
    Off,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Base URL of the Goal Focus backend, e.g. "http://localhost:8080"
    pub api_url: String,
    pub ai_provider: AiProvider,
    pub matcher: MatcherKind,
    pub gemini_model: String,
    /// Fallback log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            ai_provider: AiProvider::default(),
            matcher: MatcherKind::default(),
            gemini_model: GEMINI_MODEL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Cannot determine config directory")?
        .join(APP_DIR))
}

impl FocusConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("goal-focus.log"))
    }

    /// Load config from the optional config file, overridden by
    /// `GOAL_FOCUS_*` environment variables.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let settings = config::Config::builder()
            .add_source(config::File::from(path.clone()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read config at {}", path.display()))?;

        settings
            .try_deserialize::<Self>()
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    pub fn api_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn parse(raw: &str) -> FocusConfig {
        Config::builder()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse("");
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.ai_provider, AiProvider::Backend);
        assert_eq!(config.matcher, MatcherKind::Substring);
        assert_eq!(config.gemini_model, GEMINI_MODEL);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = parse(
            r#"
            api_url = "https://focus.example.com/"
            ai_provider = "gemini"
            matcher = "off"
            "#,
        );
        assert_eq!(config.api_url(), "https://focus.example.com");
        assert_eq!(config.ai_provider, AiProvider::Gemini);
        assert_eq!(config.matcher, MatcherKind::Off);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let raw = toml::to_string_pretty(&FocusConfig::default()).unwrap();
        assert!(raw.contains("ai_provider = \"backend\""));
        assert!(raw.contains("matcher = \"substring\""));

        let parsed: FocusConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.api_url, FocusConfig::default().api_url);
    }
}
