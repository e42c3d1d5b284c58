//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for trivia-quiz
#[derive(Parser, Debug)]
#[command(name = "trivia-quiz")]
#[command(author, version, about = "Adaptive trivia quiz in your terminal")]
#[command(long_about = r#"
Trivia Quiz asks multiple-choice questions from the Open Trivia DB.

Every correct answer scores a point and makes harder questions more likely.
One wrong answer ends the game.

Keys:
  1-4   answer with that choice
  r     retry after a failed fetch
  q     quit

Configuration files are loaded from (in priority order):
1. TRIVIA_* environment variables (e.g. TRIVIA_GAMEPLAY__MAX_RETRIES=5)
2. --config <path>     Explicit config file
3. ./trivia.toml       Project-level config
4. ~/.config/trivia-quiz/config.toml   Global config
"#)]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Seed for difficulty draws and answer shuffling
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable configuration discovery; an explicit --config file is still read
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
