//! Application layer for trivia-quiz
//!
//! This crate contains the quiz controller, the session token manager,
//! port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QuizParams;
pub use ports::{
    question_bank::{BankError, QuestionBank, QuestionRequest},
    quiz_event::{FetchError, QuizEvent},
};
pub use use_cases::{quiz_controller::QuizController, token_manager::TokenManager};
