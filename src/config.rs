//! User settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "time_travel_tictactoe.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Where the TUI writes its trace log.
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    log_filter: String,

    /// Whether the TUI captures mouse clicks.
    mouse: bool,

    /// Whether the move list shows `(row, col)` next to each move.
    show_coordinates: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("time_travel_tictactoe.log"),
            log_filter: "info".to_string(),
            mouse: true,
            show_coordinates: true,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text. Missing keys keep their defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves settings for a run.
    ///
    /// An explicit path must exist. Without one, the default file is read if
    /// present and built-in defaults are used otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Overrides the log destination.
    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
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
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_toml("mouse = false").unwrap();
        assert!(!*settings.mouse());
        assert!(*settings.show_coordinates());
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Settings::from_toml("colour = \"red\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
