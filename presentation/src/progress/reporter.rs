//! Loading spinner shown while a question is fetched

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner around the controller's loading state
///
/// A disabled indicator swallows every call, so callers never branch on
/// `--quiet` themselves.
pub struct LoadingIndicator {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl LoadingIndicator {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Start spinning, or update the message if already running.
    pub fn start(&mut self, message: impl Into<String>) {
        if !self.enabled {
            return;
        }
        let message = message.into();
        match &self.bar {
            Some(bar) => bar.set_message(message),
            None => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(Self::spinner_style());
                bar.set_message(message);
                bar.enable_steady_tick(Duration::from_millis(100));
                self.bar = Some(bar);
            }
        }
    }

    /// Show a backoff notice on the running spinner.
    pub fn retrying(&mut self, attempt: u32, delay: Duration) {
        self.start(format!(
            "{} retry {} in {:.1}s",
            "Rate limited,".yellow(),
            attempt,
            delay.as_secs_f64()
        ));
    }

    pub fn stop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_indicator_never_starts() {
        let mut indicator = LoadingIndicator::new(false);
        indicator.start("Loading");
        indicator.retrying(1, Duration::from_secs(2));
        assert!(!indicator.is_active());
    }

    #[test]
    fn test_start_and_stop() {
        let mut indicator = LoadingIndicator::new(true);
        indicator.start("Loading");
        assert!(indicator.is_active());
        indicator.start("Still loading");
        indicator.stop();
        assert!(!indicator.is_active());
    }
}
