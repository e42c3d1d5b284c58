//! Question bank configuration from TOML (`[api]` section)

use crate::opentdb::gateway::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};

/// Raw question bank configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Root of the Open Trivia DB API
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
