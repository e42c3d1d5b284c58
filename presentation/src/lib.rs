//! Presentation layer for trivia-quiz
//!
//! This crate contains CLI definitions, console formatting,
//! the loading spinner, and the interactive quiz REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use output::console::QuizFormatter;
pub use progress::reporter::LoadingIndicator;
pub use quiz::{QuizRepl, ReplCommand, ReplMode};
