//! Keyboard input parsing for the quiz REPL

use trivia_domain::ANSWER_CHOICES;

/// What the REPL is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplMode {
    #[default]
    Playing,
    /// Game over screen, expecting y/n
    AwaitingPlayAgain,
}

/// A parsed line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// Zero-based index into the answer choices
    Answer(usize),
    Retry,
    PlayAgain,
    Quit,
    Unknown,
}

impl ReplCommand {
    pub fn parse(line: &str, mode: ReplMode) -> Self {
        let line = line.trim().to_lowercase();
        match (mode, line.as_str()) {
            (_, "q" | "quit" | "exit") => ReplCommand::Quit,
            (ReplMode::AwaitingPlayAgain, "y" | "yes") => ReplCommand::PlayAgain,
            (ReplMode::AwaitingPlayAgain, "n" | "no") => ReplCommand::Quit,
            (ReplMode::Playing, "r" | "retry") => ReplCommand::Retry,
            (ReplMode::Playing, key) => match key.parse::<usize>() {
                Ok(n) if (1..=ANSWER_CHOICES).contains(&n) => ReplCommand::Answer(n - 1),
                _ => ReplCommand::Unknown,
            },
            _ => ReplCommand::Unknown,
        }
    }
}
