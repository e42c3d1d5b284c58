//! Question bank port
//!
//! Defines the interface for talking to the remote trivia question bank.

use async_trait::async_trait;
use thiserror::Error;
use trivia_domain::{Difficulty, QuestionDraft, SessionToken};

/// Errors that can occur during question bank operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("Rate limited by the question bank")]
    RateLimited,

    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No questions available for this query")]
    NoResults,

    #[error("Invalid request parameter")]
    InvalidParameter,

    #[error("Session token not found")]
    TokenNotFound,

    #[error("Session token has returned all available questions")]
    TokenExhausted,
}

impl BankError {
    /// Check if this error should trigger the backoff/retry path
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, BankError::RateLimited)
    }
}

/// Parameters of a single-question request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    pub difficulty: Difficulty,
    pub token: SessionToken,
    /// Optional question bank category id
    pub category: Option<u32>,
}

impl QuestionRequest {
    pub fn new(difficulty: Difficulty, token: SessionToken) -> Self {
        Self {
            difficulty,
            token,
            category: None,
        }
    }

    pub fn with_category(mut self, category: Option<u32>) -> Self {
        self.category = category;
        self
    }
}

/// Remote source of trivia questions
///
/// This port defines how the application layer obtains questions.
/// Implementations (adapters) live in the infrastructure layer and are
/// responsible for wire decoding, including HTML entities.
#[async_trait]
pub trait QuestionBank: Send + Sync {
    /// Request a new deduplication token
    async fn request_token(&self) -> Result<SessionToken, BankError>;

    /// Reset an exhausted token so it can serve the full question pool again
    async fn reset_token(&self, token: &SessionToken) -> Result<SessionToken, BankError>;

    /// Fetch exactly one multiple-choice question
    async fn fetch_question(&self, request: &QuestionRequest) -> Result<QuestionDraft, BankError>;
}
