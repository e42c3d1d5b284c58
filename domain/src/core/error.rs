//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Invalid {field} weight: {value}")]
    InvalidWeight { field: &'static str, value: f64 },

    #[error("Difficulty weights must sum to 100, got {0}")]
    WeightsNotNormalized(f64),

    #[error("Difficulty step must move a positive amount out of easy and split it exactly (easy {easy}, medium {medium}, hard {hard})")]
    UnbalancedStep { easy: f64, medium: f64, hard: f64 },

    #[error("Malformed question: {0}")]
    MalformedQuestion(String),
}

impl DomainError {
    /// Check if this error describes a malformed question payload
    pub fn is_malformed_question(&self) -> bool {
        matches!(self, DomainError::MalformedQuestion(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_question_display() {
        let error = DomainError::MalformedQuestion("empty text".to_string());
        assert_eq!(error.to_string(), "Malformed question: empty text");
    }

    #[test]
    fn test_is_malformed_question_check() {
        assert!(DomainError::MalformedQuestion("x".to_string()).is_malformed_question());
        assert!(!DomainError::UnknownDifficulty("x".to_string()).is_malformed_question());
        assert!(!DomainError::WeightsNotNormalized(90.0).is_malformed_question());
    }
}
