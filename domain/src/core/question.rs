//! Trivia question value objects

use crate::DomainError;
use crate::difficulty::tier::Difficulty;
use serde::{Deserialize, Serialize};

/// Number of answer choices in a multiple-choice question.
pub const ANSWER_CHOICES: usize = 4;

/// Resolve the display category, preferring the subcategory.
///
/// The question bank encodes subcategories as `"Parent: Child"`; the child is
/// shown when present, otherwise the raw value is used.
pub fn resolve_category(raw: &str) -> &str {
    raw.split(": ")
        .nth(1)
        .filter(|sub| !sub.trim().is_empty())
        .unwrap_or(raw)
}

/// Unvalidated question fields, already entity-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub category: String,
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    pub difficulty: Difficulty,
}

impl QuestionDraft {
    /// Validate the draft and build the answer choices.
    ///
    /// `arrange` receives the choices (correct answer first, then the
    /// incorrect ones in wire order) and is expected to reorder them.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedQuestion`] when the text or correct
    /// answer is blank, the number of incorrect answers does not produce
    /// exactly [`ANSWER_CHOICES`] choices, or an incorrect answer repeats the
    /// correct one.
    pub fn validate(
        self,
        arrange: impl FnOnce(&mut [String]),
    ) -> Result<TriviaQuestion, DomainError> {
        if self.text.trim().is_empty() {
            return Err(DomainError::MalformedQuestion("empty question text".into()));
        }
        if self.correct_answer.trim().is_empty() {
            return Err(DomainError::MalformedQuestion("empty correct answer".into()));
        }
        if self.incorrect_answers.len() != ANSWER_CHOICES - 1 {
            return Err(DomainError::MalformedQuestion(format!(
                "expected {} incorrect answers, got {}",
                ANSWER_CHOICES - 1,
                self.incorrect_answers.len()
            )));
        }
        if self.incorrect_answers.contains(&self.correct_answer) {
            return Err(DomainError::MalformedQuestion(
                "correct answer listed among incorrect answers".into(),
            ));
        }

        let category = resolve_category(&self.category).to_string();

        let mut choices = Vec::with_capacity(ANSWER_CHOICES);
        choices.push(self.correct_answer.clone());
        choices.extend(self.incorrect_answers);
        arrange(&mut choices);

        Ok(TriviaQuestion {
            category,
            text: self.text,
            correct_answer: self.correct_answer,
            choices,
            difficulty: self.difficulty,
        })
    }
}

/// A validated multiple-choice question (Value Object)
///
/// Guarantees [`ANSWER_CHOICES`] choices with exactly one occurrence of the
/// correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaQuestion {
    category: String,
    text: String,
    correct_answer: String,
    choices: Vec<String>,
    difficulty: Difficulty,
}

impl TriviaQuestion {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }

    /// Per-choice feedback given the player's selection.
    ///
    /// Before an answer is selected every choice is [`ChoiceState::Unanswered`];
    /// afterwards all choices are revealed at once.
    pub fn feedback(&self, selected: Option<&str>) -> Vec<ChoiceFeedback<'_>> {
        ChoiceFeedback::for_choices(&self.choices, &self.correct_answer, selected)
    }
}

impl std::fmt::Display for TriviaQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.category, self.text)
    }
}

/// Correctness state of a single choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceState {
    /// No answer recorded yet
    Unanswered,
    /// This choice is the correct answer
    Correct,
    /// This choice is not the correct answer
    Incorrect,
}

/// Rendering hint for one answer choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceFeedback<'a> {
    pub choice: &'a str,
    pub state: ChoiceState,
    /// Whether the player tapped this choice
    pub selected: bool,
}

impl<'a> ChoiceFeedback<'a> {
    /// Feedback for every choice, in display order.
    pub fn for_choices(
        choices: &'a [String],
        correct_answer: &str,
        selected: Option<&str>,
    ) -> Vec<Self> {
        choices
            .iter()
            .map(|choice| {
                let state = match selected {
                    None => ChoiceState::Unanswered,
                    Some(_) if choice == correct_answer => ChoiceState::Correct,
                    Some(_) => ChoiceState::Incorrect,
                };
                ChoiceFeedback {
                    choice,
                    state,
                    selected: selected == Some(choice.as_str()),
                }
            })
            .collect()
    }
}
