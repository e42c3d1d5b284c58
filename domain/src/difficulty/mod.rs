//! Adaptive difficulty policy.
//!
//! - [`tier::Difficulty`] — the easy/medium/hard tier requested per question
//! - [`weights::DifficultyWeights`] — per-session selection probabilities
//! - [`weights::DifficultyStep`] — reward applied after each correct answer

pub mod tier;
pub mod weights;
