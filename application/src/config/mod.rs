//! Application-level configuration.
//!
//! - [`QuizParams`] — retry budget, backoff, feedback pause and reward step

pub mod quiz_params;

pub use quiz_params::QuizParams;
