//! CLI entrypoint for Trivia Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use trivia_application::{QuestionBank, QuizController};
use trivia_infrastructure::{ConfigLoader, FileConfig, OpenTdbQuestionBank};
use trivia_presentation::{Cli, OutputConfig, QuizRepl};

/// Install the tracing subscriber. The guard must live until exit so buffered
/// log lines are flushed.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = match (cli.no_config, cli.config.as_ref()) {
        (true, None) => ConfigLoader::load_defaults(),
        // Only the explicit file, no global/project discovery or env
        (true, Some(path)) => ConfigLoader::load_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?,
        (false, path) => ConfigLoader::load(path)
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?,
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let _log_guard = init_logging(&cli)?;
    info!("Starting Trivia Quiz");

    let config = load_config(&cli)?;
    let params = config.to_quiz_params()?;
    let output = OutputConfig {
        color: config.output.color,
        show_progress: config.output.show_progress,
    }
    .with_cli_overrides(cli.no_color, cli.quiet);

    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let bank: Arc<dyn QuestionBank> = Arc::new(
        OpenTdbQuestionBank::from_config(&config.api)
            .context("Failed to create question bank client")?,
    );
    info!("Using question bank at {}", config.api.base_url);

    let (tx, rx) = mpsc::unbounded_channel();
    let controller = match cli.seed {
        Some(seed) => QuizController::with_seed(bank, params, tx, seed),
        None => QuizController::new(bank, params, tx),
    };

    QuizRepl::new(controller, rx)
        .with_output(output)
        .run()
        .await
        .context("Terminal I/O failed")?;

    Ok(())
}
