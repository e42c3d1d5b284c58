//! Session entity
//!
//! [`Session`] is the unit of play: score, difficulty weights, retry budget
//! and the question currently on screen. Every mutation goes through a
//! method here so the invariants (weights summing to 100, selection cleared
//! on question replacement, etc.) are enforced in one place.

use super::snapshot::SessionSnapshot;
use crate::core::question::TriviaQuestion;
use crate::difficulty::weights::{DifficultyStep, DifficultyWeights};
use thiserror::Error;

/// Externally observable phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No question and nothing in flight (fresh, torn down, or after a failed fetch)
    #[default]
    Idle,
    /// A question fetch (possibly a scheduled retry) is outstanding
    Loading,
    /// A question is displayed and can be answered
    Ready,
    /// A wrong answer ended the session
    Ended,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Loading => "loading",
            SessionPhase::Ready => "ready",
            SessionPhase::Ended => "ended",
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reasons an answer cannot be recorded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("No question is ready to be answered (session is {0})")]
    NotReady(SessionPhase),

    #[error("An answer has already been recorded for this question")]
    AlreadyAnswered,
}

/// Outcome of recording an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerVerdict {
    pub correct: bool,
    /// Score after the answer was applied
    pub score: u32,
}

/// One play-through from start to game over (Entity)
#[derive(Debug, Clone, Default)]
pub struct Session {
    generation: u64,
    phase: SessionPhase,
    score: u32,
    weights: DifficultyWeights,
    retry_count: u32,
    question: Option<TriviaQuestion>,
    selected_answer: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all session state and move to a new generation.
    ///
    /// Returns the new generation; work tagged with an older one is stale.
    pub fn reset(&mut self) -> u64 {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
        generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn weights(&self) -> &DifficultyWeights {
        &self.weights
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn question(&self) -> Option<&TriviaQuestion> {
        self.question.as_ref()
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Loading
    }

    /// Enter `Loading`, clearing the current question and selection.
    pub fn begin_loading(&mut self) {
        self.phase = SessionPhase::Loading;
        self.question = None;
        self.selected_answer = None;
    }

    /// Consume one retry from the budget.
    ///
    /// Returns the new retry count, or `None` once `max_retries` is reached.
    pub fn record_retry(&mut self, max_retries: u32) -> Option<u32> {
        if self.retry_count >= max_retries {
            return None;
        }
        self.retry_count += 1;
        Some(self.retry_count)
    }

    /// Install a freshly fetched question.
    pub fn question_loaded(&mut self, question: TriviaQuestion) {
        self.question = Some(question);
        self.selected_answer = None;
        self.retry_count = 0;
        self.phase = SessionPhase::Ready;
    }

    /// Give up on the current fetch; the session stays playable.
    pub fn fetch_abandoned(&mut self) {
        self.question = None;
        self.selected_answer = None;
        self.retry_count = 0;
        self.phase = SessionPhase::Idle;
    }

    /// Record the player's choice, scoring and adapting difficulty on a hit.
    ///
    /// # Errors
    ///
    /// Returns [`AnswerError::NotReady`] when no question is displayed and
    /// [`AnswerError::AlreadyAnswered`] when a choice was already recorded.
    pub fn record_answer(
        &mut self,
        choice: &str,
        step: &DifficultyStep,
    ) -> Result<AnswerVerdict, AnswerError> {
        let question = match (&self.phase, &self.question) {
            (SessionPhase::Ready, Some(question)) => question,
            _ => return Err(AnswerError::NotReady(self.phase)),
        };
        if self.selected_answer.is_some() {
            return Err(AnswerError::AlreadyAnswered);
        }

        let correct = question.is_correct(choice);
        self.selected_answer = Some(choice.to_string());

        if correct {
            self.score += 1;
            self.weights.advance(step);
        }

        Ok(AnswerVerdict {
            correct,
            score: self.score,
        })
    }

    /// Finish the session after a wrong answer; the score is kept for display.
    pub fn end(&mut self) -> u32 {
        self.phase = SessionPhase::Ended;
        self.question = None;
        self.selected_answer = None;
        self.score
    }

    /// Immutable view for renderers.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            generation: self.generation,
            phase: self.phase,
            score: self.score,
            is_loading: self.is_loading(),
            weights: self.weights,
            retry_count: self.retry_count,
            category: self.question.as_ref().map(|q| q.category().to_string()),
            question: self.question.as_ref().map(|q| q.text().to_string()),
            answer_choices: self
                .question
                .as_ref()
                .map(|q| q.choices().to_vec())
                .unwrap_or_default(),
            correct_answer: self.question.as_ref().map(|q| q.correct_answer().to_string()),
            selected_answer: self.selected_answer.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::question::QuestionDraft;
    use crate::difficulty::tier::Difficulty;

    fn question() -> TriviaQuestion {
        QuestionDraft {
            category: "Science: Computers".to_string(),
            text: "What does CPU stand for?".to_string(),
            correct_answer: "Central Processing Unit".to_string(),
            incorrect_answers: vec![
                "Central Process Unit".into(),
                "Computer Personal Unit".into(),
                "Central Processor Unit".into(),
            ],
            difficulty: Difficulty::Easy,
        }
        .validate(|_| {})
        .unwrap()
    }

    fn ready_session() -> Session {
        let mut session = Session::new();
        session.reset();
        session.begin_loading();
        session.question_loaded(question());
        session
    }

    #[test]
    fn test_reset_bumps_generation_and_clears_state() {
        let mut session = ready_session();
        session
            .record_answer("Central Processing Unit", &DifficultyStep::default())
            .unwrap();
        let previous = session.generation();

        let generation = session.reset();

        assert_eq!(generation, previous + 1);
        assert!(!session.is_current(previous));
        assert_eq!(session.score(), 0);
        assert_eq!(*session.weights(), DifficultyWeights::starting());
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.question().is_none());
        assert!(session.selected_answer().is_none());
    }

    #[test]
    fn test_correct_answer_scores_and_adapts() {
        let mut session = ready_session();
        let verdict = session
            .record_answer("Central Processing Unit", &DifficultyStep::default())
            .unwrap();

        assert!(verdict.correct);
        assert_eq!(verdict.score, 1);
        assert_eq!(session.weights().easy(), 95.0);
        assert_eq!(session.weights().medium(), 3.5);
        assert_eq!(session.weights().hard(), 1.5);
        assert_eq!(session.selected_answer(), Some("Central Processing Unit"));
    }

    #[test]
    fn test_wrong_answer_keeps_score() {
        let mut session = ready_session();
        let verdict = session
            .record_answer("Central Process Unit", &DifficultyStep::default())
            .unwrap();

        assert!(!verdict.correct);
        assert_eq!(verdict.score, 0);
        assert_eq!(*session.weights(), DifficultyWeights::starting());
        assert_eq!(session.end(), 0);
        assert_eq!(session.phase(), SessionPhase::Ended);
        assert!(session.selected_answer().is_none());
    }

    #[test]
    fn test_answer_preconditions() {
        let mut session = Session::new();
        assert_eq!(
            session.record_answer("x", &DifficultyStep::default()),
            Err(AnswerError::NotReady(SessionPhase::Idle))
        );

        let mut session = ready_session();
        session.record_answer("x", &DifficultyStep::default()).unwrap();
        assert_eq!(
            session.record_answer("Central Processing Unit", &DifficultyStep::default()),
            Err(AnswerError::AlreadyAnswered)
        );
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_retry_budget() {
        let mut session = Session::new();
        assert_eq!(session.record_retry(3), Some(1));
        assert_eq!(session.record_retry(3), Some(2));
        assert_eq!(session.record_retry(3), Some(3));
        assert_eq!(session.record_retry(3), None);

        session.question_loaded(question());
        assert_eq!(session.retry_count(), 0);
    }

    #[test]
    fn test_snapshot_reflects_question() {
        let session = ready_session();
        let snapshot = session.snapshot();

        assert_eq!(snapshot.phase, SessionPhase::Ready);
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.category.as_deref(), Some("Computers"));
        assert_eq!(snapshot.answer_choices.len(), 4);
        assert_eq!(
            snapshot.correct_answer.as_deref(),
            Some("Central Processing Unit")
        );
        assert!(snapshot.selected_answer.is_none());
    }
}
