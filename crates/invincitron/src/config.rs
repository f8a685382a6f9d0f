//! Application configuration loaded from TOML.

use clap::ValueEnum;
use derive_getters::Getters;
use derive_more::{Display, Error};
use invincitron_tictactoe::{Mark, MoveSource, RandomPlayer, StrategyPlayer};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "invincitron.toml";

/// Which automated player faces the engine (or the human).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OpponentKind {
    /// The rule cascade.
    #[default]
    Strategy,
    /// Uniformly random free cells.
    Random,
}

impl OpponentKind {
    /// Builds a move source of this kind, seeded when `seed` is given.
    #[instrument(skip(name), fields(name = %name))]
    pub fn build(self, name: &str, seed: Option<u64>) -> Box<dyn MoveSource> {
        match (self, seed) {
            (OpponentKind::Strategy, Some(seed)) => Box::new(StrategyPlayer::with_seed(name, seed)),
            (OpponentKind::Strategy, None) => Box::new(StrategyPlayer::new(name)),
            (OpponentKind::Random, Some(seed)) => Box::new(RandomPlayer::with_seed(name, seed)),
            (OpponentKind::Random, None) => Box::new(RandomPlayer::new(name)),
        }
    }
}

/// Settings for `play` and `simulate`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Mark the human plays. Asked interactively when unset.
    #[serde(default)]
    human_mark: Option<Mark>,

    /// Automated player the engine is matched against.
    #[serde(default)]
    opponent: OpponentKind,

    /// Seed for every random choice. Fresh entropy when unset.
    #[serde(default)]
    seed: Option<u64>,

    /// Number of games `simulate` plays.
    #[serde(default = "default_games")]
    games: u32,
}

#[instrument]
fn default_games() -> u32 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            human_mark: None,
            opponent: OpponentKind::default(),
            seed: None,
            games: default_games(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the human mark when `mark` is set.
    pub fn with_human_mark(mut self, mark: Option<Mark>) -> Self {
        if mark.is_some() {
            self.human_mark = mark;
        }
        self
    }

    /// Overrides the opponent when `opponent` is set.
    pub fn with_opponent(mut self, opponent: Option<OpponentKind>) -> Self {
        if let Some(opponent) = opponent {
            self.opponent = opponent;
        }
        self
    }

    /// Overrides the seed when `seed` is set.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Overrides the game count when `games` is set.
    pub fn with_games(mut self, games: Option<u32>) -> Self {
        if let Some(games) = games {
            self.games = games;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(*config.games(), 100);
        assert_eq!(*config.opponent(), OpponentKind::Strategy);
    }

    #[test]
    fn test_parse_all_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            human_mark = "O"
            opponent = "random"
            seed = 7
            games = 12
            "#,
        )
        .unwrap();
        assert_eq!(*config.human_mark(), Some(Mark::O));
        assert_eq!(*config.opponent(), OpponentKind::Random);
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(*config.games(), 12);
    }

    #[test]
    fn test_unset_overrides_keep_file_values() {
        let config: AppConfig = toml::from_str("seed = 3\ngames = 5").unwrap();
        let config = config.with_seed(None).with_games(None).with_human_mark(Some(Mark::X));
        assert_eq!(*config.seed(), Some(3));
        assert_eq!(*config.games(), 5);
        assert_eq!(*config.human_mark(), Some(Mark::X));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = AppConfig::from_file("/nonexistent/invincitron.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_bad_value_is_config_error() {
        let dir = std::env::temp_dir().join("invincitron_config_test.toml");
        std::fs::write(&dir, "opponent = \"perfect\"").unwrap();
        let err = AppConfig::from_file(&dir).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        std::fs::remove_file(&dir).ok();
    }
}
