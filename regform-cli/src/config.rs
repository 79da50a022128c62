//! Optional JSON configuration for the terminal form.

use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use regform::config::{DEFAULT_FEEDBACK_DURATION, FormConfig};
use serde::Deserialize;
use thiserror::Error;

/// Config error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

/// Contents of `config.json`. Every key is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Lifetime of the success banner in milliseconds.
    pub feedback_ms: u64,
    /// Log level written to the log file.
    pub log_level: String,
    /// Log accepted submissions.
    pub log_submissions: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            feedback_ms: DEFAULT_FEEDBACK_DURATION.as_millis() as u64,
            log_level: "debug".to_string(),
            log_submissions: true,
        }
    }
}

impl CliConfig {
    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Form controller settings derived from this config.
    pub fn form_config(&self) -> FormConfig {
        FormConfig::new()
            .feedback_duration(Duration::from_millis(self.feedback_ms))
            .log_submissions(self.log_submissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_library() {
        let config = CliConfig::default();
        assert_eq!(config.form_config().feedback_duration, DEFAULT_FEEDBACK_DURATION);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_partial_config() {
        let config = CliConfig::parse(r#"{ "feedback_ms": 1500 }"#).unwrap();
        assert_eq!(config.form_config().feedback_duration, Duration::from_millis(1500));
        assert!(config.log_submissions);
    }

    #[test]
    fn test_bad_log_level() {
        assert!(matches!(
            CliConfig::parse(r#"{ "log_level": "chatty" }"#),
            Err(ConfigError::LogLevel(level)) if level == "chatty"
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(CliConfig::parse("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = CliConfig::load(Some(Path::new("/nonexistent/regform/config.json"))).unwrap();
        assert_eq!(config.feedback_ms, 3000);
    }
}
