//! Gameplay configuration from TOML (`[gameplay]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use trivia_application::QuizParams;
use trivia_domain::DifficultyStep;

/// Raw gameplay configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameplayConfig {
    /// Retries after rate limiting before the fetch is abandoned
    pub max_retries: u32,
    /// Backoff base in milliseconds; retry `n` waits `base * 2^n`
    pub backoff_base_ms: u64,
    /// Pause after an answer before moving on
    pub feedback_delay_ms: u64,
    /// Percentage points taken from easy per correct answer
    pub easy_step: f64,
    /// Share of the step given to medium
    pub medium_step: f64,
    /// Share of the step given to hard
    pub hard_step: f64,
    /// Restrict questions to one Open Trivia DB category id
    pub category: Option<u32>,
}

impl Default for FileGameplayConfig {
    fn default() -> Self {
        let step = DifficultyStep::default();
        Self {
            max_retries: 3,
            backoff_base_ms: 1000,
            feedback_delay_ms: 2000,
            easy_step: step.easy(),
            medium_step: step.medium(),
            hard_step: step.hard(),
            category: None,
        }
    }
}

impl FileGameplayConfig {
    pub fn step(&self) -> Result<DifficultyStep, ConfigValidationError> {
        Ok(DifficultyStep::new(
            self.easy_step,
            self.medium_step,
            self.hard_step,
        )?)
    }

    pub fn to_quiz_params(&self) -> Result<QuizParams, ConfigValidationError> {
        Ok(QuizParams::default()
            .with_max_retries(self.max_retries)
            .with_backoff_base(Duration::from_millis(self.backoff_base_ms))
            .with_feedback_delay(Duration::from_millis(self.feedback_delay_ms))
            .with_step(self.step()?)
            .with_category(self.category))
    }
}
