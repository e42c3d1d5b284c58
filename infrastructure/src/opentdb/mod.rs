//! Open Trivia DB adapter
//!
//! Implements [`QuestionBank`](trivia_application::QuestionBank) over the
//! Open Trivia DB HTTP API.
//!
//! # Endpoints
//!
//! | Call | Path |
//! |------|------|
//! | request token | `api_token.php?command=request` |
//! | reset token | `api_token.php?command=reset&token=<t>` |
//! | one question | `api.php?amount=1&type=multiple&difficulty=<d>&token=<t>` |
//!
//! Question text and answers arrive HTML-entity encoded; [`decode`] turns
//! them into plain text before they reach the domain.

pub mod decode;
pub mod gateway;
pub mod protocol;

pub use gateway::OpenTdbQuestionBank;
