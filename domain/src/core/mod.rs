//! Core domain concepts shared across all subdomains.
//!
//! - [`question::TriviaQuestion`] — a decoded multiple-choice question
//! - [`question::ChoiceFeedback`] — per-choice correctness feedback
//! - [`token::SessionToken`] — opaque question-deduplication token
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod question;
pub mod token;
