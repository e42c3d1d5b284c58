//! Configuration file loading for trivia-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TRIVIA_*` environment variables (`TRIVIA_API__BASE_URL`, …)
//! 2. `--config <path>` specified file
//! 3. Project root: `./trivia.toml` or `./.trivia.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/trivia-quiz/config.toml`
//! 5. Fallback: `~/.config/trivia-quiz/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileApiConfig, FileConfig, FileGameplayConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
