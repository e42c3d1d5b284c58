//! Interactive terminal quiz

pub mod input;
pub mod repl;

pub use input::{ReplCommand, ReplMode};
pub use repl::QuizRepl;
