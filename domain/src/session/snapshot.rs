//! Read-only session view for the presentation layer

use super::entities::SessionPhase;
use crate::core::question::ChoiceFeedback;
use crate::difficulty::weights::DifficultyWeights;

/// Point-in-time copy of everything a renderer may read.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub generation: u64,
    pub phase: SessionPhase,
    pub score: u32,
    pub is_loading: bool,
    pub weights: DifficultyWeights,
    pub retry_count: u32,
    pub category: Option<String>,
    pub question: Option<String>,
    pub answer_choices: Vec<String>,
    pub correct_answer: Option<String>,
    pub selected_answer: Option<String>,
}

impl SessionSnapshot {
    pub fn has_question(&self) -> bool {
        self.question.is_some()
    }

    /// Per-choice feedback for the choices on screen.
    pub fn feedback(&self) -> Vec<ChoiceFeedback<'_>> {
        ChoiceFeedback::for_choices(
            &self.answer_choices,
            self.correct_answer.as_deref().unwrap_or_default(),
            self.selected_answer.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::core::question::QuestionDraft;
    use crate::difficulty::tier::Difficulty;
    use crate::{ChoiceState, Session};

    #[test]
    fn test_feedback_matches_question_feedback() {
        let question = QuestionDraft {
            category: "Geography".to_string(),
            text: "Capital of Italy?".to_string(),
            correct_answer: "Rome".to_string(),
            incorrect_answers: vec!["Milan".into(), "Turin".into(), "Naples".into()],
            difficulty: Difficulty::Easy,
        }
        .validate(|_| {})
        .unwrap();

        let mut session = Session::new();
        session.begin_loading();
        session.question_loaded(question.clone());
        assert!(
            session
                .snapshot()
                .feedback()
                .iter()
                .all(|f| f.state == ChoiceState::Unanswered)
        );

        session
            .record_answer("Turin", &Default::default())
            .unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.feedback(), question.feedback(Some("Turin")));
        assert!(snapshot.feedback()[2].selected);
        assert_eq!(snapshot.feedback()[0].state, ChoiceState::Correct);
    }

    #[test]
    fn test_feedback_empty_without_question() {
        assert!(Session::new().snapshot().feedback().is_empty());
    }
}
