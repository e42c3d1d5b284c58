//! Quiz parameters: controller timing and reward tuning.
//!
//! [`QuizParams`] groups the static parameters that control
//! [`QuizController`](crate::use_cases::quiz_controller::QuizController):
//! the rate-limit retry budget, backoff growth, the feedback pause after an
//! answer, and the difficulty reward step.

use std::time::Duration;
use trivia_domain::DifficultyStep;

/// Controller timing and policy parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizParams {
    /// Maximum number of retries after rate limiting (attempts = retries + 1).
    pub max_retries: u32,
    /// Base of the exponential backoff; retry `n` waits `base * 2^n`.
    pub backoff_base: Duration,
    /// Pause after an answer so the player can see correctness feedback.
    pub feedback_delay: Duration,
    /// Weight shift applied per correct answer.
    pub step: DifficultyStep,
    /// Restrict questions to one question bank category.
    pub category: Option<u32>,
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_base: Duration::from_millis(1000),
            feedback_delay: Duration::from_millis(2000),
            step: DifficultyStep::default(),
            category: None,
        }
    }
}

impl QuizParams {
    // ==================== Builder Methods ====================

    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    pub fn with_step(mut self, step: DifficultyStep) -> Self {
        self.step = step;
        self
    }

    pub fn with_category(mut self, category: Option<u32>) -> Self {
        self.category = category;
        self
    }

    /// Delay before retry number `attempt` (1-based).
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.backoff_base
            .saturating_mul(2u32.saturating_pow(attempt.min(16)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = QuizParams::default();
        assert_eq!(params.max_retries, 3);
        assert_eq!(params.feedback_delay, Duration::from_secs(2));
        assert_eq!(params.step, DifficultyStep::default());
        assert!(params.category.is_none());
    }

    #[test]
    fn test_backoff_strictly_increases() {
        let params = QuizParams::default();
        assert_eq!(params.backoff_delay(1), Duration::from_secs(2));
        assert_eq!(params.backoff_delay(2), Duration::from_secs(4));
        assert_eq!(params.backoff_delay(3), Duration::from_secs(8));
        for attempt in 1..10 {
            assert!(params.backoff_delay(attempt + 1) > params.backoff_delay(attempt));
        }
    }

    #[test]
    fn test_builder() {
        let params = QuizParams::default()
            .with_max_retries(5)
            .with_backoff_base(Duration::from_millis(10))
            .with_category(Some(9));
        assert_eq!(params.max_retries, 5);
        assert_eq!(params.backoff_delay(1), Duration::from_millis(20));
        assert_eq!(params.category, Some(9));
    }
}
