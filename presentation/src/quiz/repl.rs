//! REPL (Read-Eval-Print Loop) for an interactive quiz

use super::input::{ReplCommand, ReplMode};
use crate::config::OutputConfig;
use crate::output::console::QuizFormatter;
use crate::progress::reporter::LoadingIndicator;
use colored::Colorize;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use trivia_application::{QuizController, QuizEvent};

/// Interactive quiz REPL
///
/// Renders controller events as they arrive and feeds stdin lines back
/// into the controller.
pub struct QuizRepl {
    controller: QuizController,
    events: mpsc::UnboundedReceiver<QuizEvent>,
    output: OutputConfig,
    mode: ReplMode,
    spinner: LoadingIndicator,
}

impl QuizRepl {
    /// Create a new QuizRepl over a controller and the receiving end of its event channel
    pub fn new(controller: QuizController, events: mpsc::UnboundedReceiver<QuizEvent>) -> Self {
        let output = OutputConfig::default();
        Self {
            controller,
            events,
            output,
            mode: ReplMode::default(),
            spinner: LoadingIndicator::new(output.show_progress),
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self.spinner = LoadingIndicator::new(output.show_progress);
        self
    }

    /// Run until the player quits or stdin closes
    pub async fn run(mut self) -> io::Result<()> {
        println!("{}", QuizFormatter::welcome());
        self.controller.start_session();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            tokio::select! {
                event = self.events.recv() => {
                    let Some(event) = event else { break };
                    self.render(event)?;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if !self.handle_input(&line) {
                        break;
                    }
                }
            }
        }

        self.spinner.stop();
        self.controller.end_session();
        Ok(())
    }

    fn render(&mut self, event: QuizEvent) -> io::Result<()> {
        match event {
            QuizEvent::SessionStarted { .. } | QuizEvent::SessionClosed => {}
            QuizEvent::Loading => self.spinner.start("Fetching question..."),
            QuizEvent::RetryScheduled { attempt, delay } => {
                if self.output.show_progress {
                    self.spinner.retrying(attempt, delay);
                } else {
                    println!("{}", QuizFormatter::retry_notice(attempt, delay));
                }
            }
            QuizEvent::QuestionReady(snapshot) => {
                self.spinner.stop();
                println!();
                println!("{}", QuizFormatter::question(&snapshot));
            }
            QuizEvent::FetchFailed(error) => {
                self.spinner.stop();
                println!("{}", QuizFormatter::fetch_failed(&error));
            }
            QuizEvent::AnswerRecorded { verdict, snapshot } => {
                println!("{}", QuizFormatter::feedback(&verdict, &snapshot));
            }
            QuizEvent::SessionEnded { final_score } => {
                self.mode = ReplMode::AwaitingPlayAgain;
                print!("{}", QuizFormatter::game_over(final_score));
                io::stdout().flush()?;
            }
        }
        Ok(())
    }

    /// Handle one input line. Returns false when the REPL should exit.
    fn handle_input(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return true;
        }

        match ReplCommand::parse(line, self.mode) {
            ReplCommand::Quit => {
                println!("Bye!");
                return false;
            }
            ReplCommand::PlayAgain => {
                self.mode = ReplMode::Playing;
                self.controller.start_session();
            }
            ReplCommand::Retry => {
                if !self.controller.fetch_question() {
                    println!("{}", "Nothing to retry right now.".dimmed());
                }
            }
            ReplCommand::Answer(index) => self.answer(index),
            ReplCommand::Unknown => match self.mode {
                ReplMode::Playing => println!("{}", "Keys: 1-4 answer · r retry · q quit".dimmed()),
                ReplMode::AwaitingPlayAgain => println!("Play again? [y/n]"),
            },
        }
        true
    }

    fn answer(&mut self, index: usize) {
        let snapshot = self.controller.snapshot();
        let Some(choice) = snapshot.answer_choices.get(index) else {
            println!("{}", "No question to answer yet.".dimmed());
            return;
        };

        if let Err(e) = self.controller.submit_answer(choice) {
            println!("{}", e.to_string().dimmed());
        }
    }
}
