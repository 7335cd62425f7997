//! Configuration for the hotseat front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable overriding the first player's name.
pub const ENV_PLAYER_X: &str = "HOTSEAT_PLAYER_X";
/// Environment variable overriding the second player's name.
pub const ENV_PLAYER_O: &str = "HOTSEAT_PLAYER_O";
/// Environment variable overriding the log file path.
pub const ENV_LOG_FILE: &str = "HOTSEAT_LOG_FILE";

/// Front-end settings loaded from `hotseat.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct HotseatConfig {
    /// Name for the player holding X. Blank means "Player 1".
    player_x: Option<String>,

    /// Name for the player holding O. Blank means "Player 2".
    player_o: Option<String>,

    /// Where the terminal UI writes its logs.
    log_file: PathBuf,

    /// Open the name form before the first game.
    ask_names: bool,
}

impl Default for HotseatConfig {
    fn default() -> Self {
        Self {
            player_x: None,
            player_o: None,
            log_file: PathBuf::from("hotseat.log"),
            ask_names: true,
        }
    }
}

impl HotseatConfig {
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

    /// Loads `path` if it exists, otherwise defaults, then applies
    /// `HOTSEAT_*` environment overrides.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = if path.as_ref().exists() {
            Self::from_file(path)?
        } else {
            debug!("Config file not found, using defaults");
            Self::default()
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Applies overrides from an environment lookup.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(name) = lookup(ENV_PLAYER_X) {
            self.player_x = Some(name);
        }
        if let Some(name) = lookup(ENV_PLAYER_O) {
            self.player_o = Some(name);
        }
        if let Some(path) = lookup(ENV_LOG_FILE) {
            self.log_file = PathBuf::from(path);
        }
        self
    }

    /// Applies command-line name overrides. `None` keeps the current value.
    pub fn with_names(mut self, player_x: Option<String>, player_o: Option<String>) -> Self {
        if player_x.is_some() {
            self.player_x = player_x;
        }
        if player_o.is_some() {
            self.player_o = player_o;
        }
        self
    }

    /// Sets whether the name form opens before the first game.
    pub fn with_ask_names(mut self, ask_names: bool) -> Self {
        self.ask_names = ask_names;
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
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
