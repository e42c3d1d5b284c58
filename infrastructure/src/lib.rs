//! Infrastructure layer for trivia-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod opentdb;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileApiConfig, FileConfig, FileGameplayConfig,
    FileOutputConfig,
};
pub use opentdb::OpenTdbQuestionBank;
