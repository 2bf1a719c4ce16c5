//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use ttt_engine::{Mark, PlayerKind};

/// Who plays each side and who opens.
///
/// ```toml
/// player_x = "human"
/// player_o = "ai"
/// first = "X"
/// ```
///
/// A missing player kind is asked for interactively before every game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize, new)]
#[setters(prefix = "with_", strip_option)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Who plays X.
    player_x: Option<PlayerKind>,

    /// Who plays O.
    player_o: Option<PlayerKind>,

    /// Which mark moves first.
    first: Mark,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(None, None, Mark::X)
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides; `None` keeps the current value.
    pub fn with_overrides(
        self,
        player_x: Option<PlayerKind>,
        player_o: Option<PlayerKind>,
        first: Option<Mark>,
    ) -> Self {
        let mut config = self;
        if let Some(kind) = player_x {
            config = config.with_player_x(kind);
        }
        if let Some(kind) = player_o {
            config = config.with_player_o(kind);
        }
        if let Some(mark) = first {
            config = config.with_first(mark);
        }
        config
    }

    /// Player kind for `mark`, if configured.
    pub fn player(&self, mark: Mark) -> Option<PlayerKind> {
        match mark {
            Mark::X => self.player_x,
            Mark::O => self.player_o,
        }
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
