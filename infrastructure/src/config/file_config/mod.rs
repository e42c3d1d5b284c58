//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! once validated.

mod api;
mod gameplay;
mod output;

pub use api::FileApiConfig;
pub use gameplay::FileGameplayConfig;
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trivia_application::QuizParams;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("api.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("api.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("gameplay.backoff_base_ms cannot be 0")]
    InvalidBackoff,

    #[error("invalid difficulty step: {0}")]
    InvalidStep(#[from] trivia_domain::DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Question bank connection settings
    pub api: FileApiConfig,
    /// Retry, timing and difficulty tuning
    pub gameplay: FileGameplayConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if self.api.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.gameplay.backoff_base_ms == 0 {
            return Err(ConfigValidationError::InvalidBackoff);
        }
        self.gameplay.step()?;
        Ok(())
    }

    /// Controller parameters derived from `[gameplay]`.
    pub fn to_quiz_params(&self) -> Result<QuizParams, ConfigValidationError> {
        self.validate()?;
        self.gameplay.to_quiz_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
base_url = "http://localhost:8080"
timeout_seconds = 5

[gameplay]
max_retries = 5
backoff_base_ms = 250
feedback_delay_ms = 500
easy_step = 10.0
medium_step = 6.0
hard_step = 4.0
category = 18

[output]
color = false
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_seconds, 5);
        assert_eq!(config.gameplay.max_retries, 5);
        assert_eq!(config.gameplay.category, Some(18));
        assert!(!config.output.color);
        assert!(!config.output.show_progress);

        let params = config.to_quiz_params().unwrap();
        assert_eq!(params.max_retries, 5);
        assert_eq!(params.backoff_delay(1), Duration::from_millis(500));
        assert_eq!(params.feedback_delay, Duration::from_millis(500));
        assert_eq!(params.step.easy(), 10.0);
        assert_eq!(params.category, Some(18));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[gameplay]
max_retries = 1
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gameplay.max_retries, 1);
        // Defaults should apply
        assert_eq!(config.gameplay.feedback_delay_ms, 2000);
        assert_eq!(config.api, FileApiConfig::default());
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config_matches_quiz_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.to_quiz_params().unwrap(), QuizParams::default());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = FileConfig::default();
        config.api.timeout_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let mut config = FileConfig::default();
        config.api.base_url = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyBaseUrl));
    }

    #[test]
    fn test_validate_rejects_unbalanced_step() {
        let mut config = FileConfig::default();
        config.gameplay.hard_step = 3.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidStep(_))
        ));
    }

    #[test]
    fn test_validate_rejects_negative_step() {
        let mut config = FileConfig::default();
        config.gameplay.medium_step = -1.0;
        config.gameplay.hard_step = 6.0;
        assert!(config.validate().is_err());
    }
}
