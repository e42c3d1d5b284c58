//! Domain layer for trivia-quiz
//!
//! This crate contains the core game rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A session is one continuous play-through: questions keep coming while the
//! player answers correctly, and the first wrong answer ends it.
//!
//! ## Adaptive Difficulty
//!
//! Each question's tier is drawn from per-session [`DifficultyWeights`].
//! Every correct answer moves weight out of `easy` into `medium` and `hard`
//! until `easy` is exhausted.

pub mod core;
pub mod difficulty;
pub mod session;

// Re-export commonly used types
pub use self::core::{
    error::DomainError,
    question::{
        ANSWER_CHOICES, ChoiceFeedback, ChoiceState, QuestionDraft, TriviaQuestion,
        resolve_category,
    },
    token::SessionToken,
};
pub use difficulty::{
    tier::Difficulty,
    weights::{DifficultyStep, DifficultyWeights},
};
pub use session::{
    entities::{AnswerError, AnswerVerdict, Session, SessionPhase},
    snapshot::SessionSnapshot,
};
