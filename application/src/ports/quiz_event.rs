//! Quiz event types emitted by QuizController for presentation layer rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. Renderers may also poll
//! [`QuizController::snapshot`](crate::QuizController::snapshot) at any time.

use std::time::Duration;
use thiserror::Error;
use trivia_domain::{AnswerVerdict, SessionSnapshot};

use super::question_bank::BankError;

/// Why a fetch attempt was abandoned. None of these end the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Could not obtain a session token: {0}")]
    TokenAcquisition(BankError),

    #[error("Still rate limited after {0} retries")]
    RetriesExhausted(u32),

    #[error("Question fetch failed: {0}")]
    Bank(BankError),

    #[error("Malformed question: {0}")]
    Malformed(String),
}

/// Events emitted by QuizController for the presentation layer to render
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    /// A fresh session began (score 0, starting weights)
    SessionStarted { generation: u64 },
    /// A question fetch is outstanding
    Loading,
    /// A rate-limited fetch will be retried after `delay`
    RetryScheduled { attempt: u32, delay: Duration },
    /// A new question is on screen
    QuestionReady(SessionSnapshot),
    /// The fetch was abandoned; the session is idle but still alive
    FetchFailed(FetchError),
    /// The player's choice was recorded; feedback is showing
    AnswerRecorded {
        verdict: AnswerVerdict,
        snapshot: SessionSnapshot,
    },
    /// A wrong answer ended the session
    SessionEnded { final_score: u32 },
    /// The host tore the session down
    SessionClosed,
}
