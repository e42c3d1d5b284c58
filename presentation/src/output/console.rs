//! Console output formatter for quiz screens

use colored::Colorize;
use std::time::Duration;
use trivia_application::FetchError;
use trivia_domain::{AnswerVerdict, ChoiceState, SessionSnapshot};

/// Formats quiz state for console display
///
/// Every method returns a `String`; printing is left to the caller.
pub struct QuizFormatter;

impl QuizFormatter {
    /// Banner shown once at startup.
    pub fn welcome() -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Trivia Quiz"));
        output.push_str("\nAnswer with 1-4. One wrong answer ends the game.\n");
        output.push_str(&format!(
            "{}\n",
            "Keys: 1-4 answer · r retry · q quit".dimmed()
        ));
        output
    }

    /// Question screen with numbered choices.
    pub fn question(snapshot: &SessionSnapshot) -> String {
        let mut output = String::new();
        output.push_str(&Self::status_line(snapshot));
        output.push('\n');

        if let Some(category) = &snapshot.category {
            output.push_str(&format!("{}\n", category.cyan().bold()));
        }
        if let Some(question) = &snapshot.question {
            output.push_str(&format!("{}\n\n", question.bold()));
        }
        for (i, choice) in snapshot.answer_choices.iter().enumerate() {
            output.push_str(&format!("  {} {}\n", format!("[{}]", i + 1).yellow(), choice));
        }
        output
    }

    /// Choices re-rendered after an answer: correct in green, a wrong pick in red.
    pub fn feedback(verdict: &AnswerVerdict, snapshot: &SessionSnapshot) -> String {
        let mut output = String::new();
        for (i, item) in snapshot.feedback().iter().enumerate() {
            let label = format!("[{}]", i + 1);
            let marker = if item.selected { ">" } else { " " };
            let line = match item.state {
                ChoiceState::Correct => format!("{} {}", label, item.choice).green().bold(),
                ChoiceState::Incorrect if item.selected => {
                    format!("{} {}", label, item.choice).red().bold()
                }
                _ => format!("{} {}", label, item.choice).dimmed(),
            };
            output.push_str(&format!("{} {}\n", marker, line));
        }

        output.push('\n');
        if verdict.correct {
            output.push_str(&format!(
                "{} Score: {}\n",
                "Correct!".green().bold(),
                verdict.score
            ));
        } else {
            output.push_str(&format!("{}\n", "Wrong!".red().bold()));
        }
        output
    }

    pub fn game_over(final_score: u32) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Game Over"));
        output.push_str(&format!(
            "\nFinal score: {}\n\n{}",
            final_score.to_string().bold(),
            "Play again? [y/n] ".cyan()
        ));
        output
    }

    pub fn fetch_failed(error: &FetchError) -> String {
        format!(
            "{} {}\n{}\n",
            "Could not load a question:".red().bold(),
            error,
            "Press r to try again or q to quit.".dimmed()
        )
    }

    /// Used when the spinner is hidden.
    pub fn retry_notice(attempt: u32, delay: Duration) -> String {
        format!(
            "{} retry {} in {:.1}s",
            "Rate limited,".yellow(),
            attempt,
            delay.as_secs_f64()
        )
    }

    /// Score and current difficulty mix.
    pub fn status_line(snapshot: &SessionSnapshot) -> String {
        format!(
            "{} {}   {}",
            "Score:".cyan().bold(),
            snapshot.score,
            format!("({})", snapshot.weights).dimmed()
        )
    }

    fn header(title: &str) -> String {
        let line = "─".repeat(title.chars().count() + 8);
        format!(
            "{}\n    {}\n{}\n",
            line.cyan(),
            title.bold(),
            line.cyan()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_domain::{DifficultyWeights, SessionPhase};

    fn snapshot(selected: Option<&str>) -> SessionSnapshot {
        SessionSnapshot {
            generation: 1,
            phase: SessionPhase::Ready,
            score: 3,
            is_loading: false,
            weights: DifficultyWeights::starting(),
            retry_count: 0,
            category: Some("Geography".to_string()),
            question: Some("Capital of France?".to_string()),
            answer_choices: vec![
                "Berlin".to_string(),
                "Paris".to_string(),
                "Rome".to_string(),
                "Madrid".to_string(),
            ],
            correct_answer: Some("Paris".to_string()),
            selected_answer: selected.map(str::to_string),
        }
    }

    #[test]
    fn test_question_lists_numbered_choices() {
        colored::control::set_override(false);
        let output = QuizFormatter::question(&snapshot(None));
        assert!(output.contains("Geography"));
        assert!(output.contains("Capital of France?"));
        assert!(output.contains("[1] Berlin"));
        assert!(output.contains("[4] Madrid"));
        assert!(output.contains("Score: 3"));
    }

    #[test]
    fn test_feedback_marks_selection() {
        colored::control::set_override(false);
        let verdict = AnswerVerdict {
            correct: false,
            score: 3,
        };
        let output = QuizFormatter::feedback(&verdict, &snapshot(Some("Rome")));
        assert!(output.contains("> [3] Rome"));
        assert!(output.contains("  [2] Paris"));
        assert!(output.contains("Wrong!"));
    }

    #[test]
    fn test_game_over_shows_score() {
        colored::control::set_override(false);
        let output = QuizFormatter::game_over(7);
        assert!(output.contains("Game Over"));
        assert!(output.contains("Final score: 7"));
    }

    #[test]
    fn test_fetch_failed_offers_retry() {
        colored::control::set_override(false);
        let output = QuizFormatter::fetch_failed(&FetchError::RetriesExhausted(3));
        assert!(output.contains("after 3 retries"));
        assert!(output.contains("Press r"));
    }
}
