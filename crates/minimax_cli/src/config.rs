//! Engine configuration for the command-line driver.

use derive_getters::Getters;
use derive_more::{Display, Error};
use minimax_tictactoe::TieBreak;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration loaded from a TOML file.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rule for choosing among equally good moves.
    #[serde(default)]
    tie_break: TieBreak,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(tie_break = %config.tie_break, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Returns a copy with the tie-break rule replaced when `tie_break` is set.
    pub fn with_tie_break(mut self, tie_break: Option<TieBreak>) -> Self {
        if let Some(tie_break) = tie_break {
            self.tie_break = tie_break;
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(*config.tie_break(), TieBreak::First);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config("tie_break = \"last\"\nlog_filter = \"debug\"\n");
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.tie_break(), TieBreak::Last);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let file = write_config("");
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_invalid_tie_break_rejected() {
        let file = write_config("tie_break = \"middle\"\n");
        let err = EngineConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = EngineConfig::from_file("/nonexistent/minimax.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(EngineConfig::load(None).unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_tie_break_override() {
        let config = EngineConfig::default().with_tie_break(Some(TieBreak::Last));
        assert_eq!(*config.tie_break(), TieBreak::Last);

        let config = config.with_tie_break(None);
        assert_eq!(*config.tie_break(), TieBreak::Last);
    }
}
