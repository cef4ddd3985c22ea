//! Game configuration.

use super::{Difficulty, Mark, SessionRng};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings a UI chooses before or between games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark the human plays. `X` always moves first.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Strength of the computer opponent.
    #[serde(default)]
    difficulty: Difficulty,

    /// Fixed seed for reproducible games; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_human_mark() -> Mark {
    Mark::X
}

impl GameConfig {
    /// Creates a configuration without a fixed seed.
    pub fn new(human_mark: Mark, difficulty: Difficulty) -> Self {
        Self {
            human_mark,
            difficulty,
            seed: None,
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// The mark the computer plays.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Builds the random source this configuration asks for.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn rng(&self) -> SessionRng {
        match self.seed {
            Some(seed) => SessionRng::new(seed),
            None => {
                let rng = SessionRng::from_random();
                debug!(seed = rng.seed(), "Drew random seed");
                rng
            }
        }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Parsed config");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            human_mark = %config.human_mark,
            difficulty = %config.difficulty,
            "Config loaded successfully"
        );
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_human_mark(), Difficulty::default())
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
    /// Creates a new configuration error at the caller's location.
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
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.human_mark(), &Mark::X);
        assert_eq!(config.computer_mark(), Mark::O);
        assert_eq!(config.difficulty(), &Difficulty::Hard);
        assert_eq!(config.seed(), &None);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            human_mark = "O"
            difficulty = "medium"
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.human_mark(), &Mark::O);
        assert_eq!(config.difficulty(), &Difficulty::Medium);
        assert_eq!(config.seed(), &Some(7));
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let err = GameConfig::from_toml_str(r#"difficulty = "impossible""#).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GameConfig::default().with_seed(99);
        assert_eq!(config.rng().seed(), 99);
    }
}
