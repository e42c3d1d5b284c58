//! Presentation-level configuration
//!
//! Configuration for colors and progress display, after CLI overrides.

use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while loading
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Apply `--no-color` and `--quiet`; flags can only turn things off.
    pub fn with_cli_overrides(mut self, no_color: bool, quiet: bool) -> Self {
        self.color &= !no_color;
        self.show_progress &= !quiet;
        self
    }
}
