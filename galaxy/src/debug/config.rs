//! Debug configuration from environment variables

use std::path::PathBuf;

use lib_utils::get_env_or;

pub const DEFAULT_LOG_FILTER: &str = "galaxy=info,lib_starfield=info,warn";

/// Debug system configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log directory (daily rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "galaxy=debug,info")
    pub log_level: String,
    /// Mirror logs to stderr
    pub log_to_stderr: bool,
    /// Show the in-UI debug overlay on startup
    pub show_debug_ui: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_to_stderr: false,
            show_debug_ui: cfg!(feature = "debug-mode"),
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_dir: PathBuf::from(get_env_or("GALAXY_LOG_DIR", "logs")),
            log_level: get_env_or("RUST_LOG", &defaults.log_level),
            log_to_stderr: std::env::var("GALAXY_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(defaults.log_to_stderr),
            show_debug_ui: std::env::var("GALAXY_DEBUG_UI")
                .map(|v| v == "1")
                .unwrap_or(defaults.show_debug_ui),
        }
    }

    /// Daily log files land here as `galaxy.log.YYYY-MM-DD`.
    pub fn log_file_prefix(&self) -> PathBuf {
        self.log_dir.join(super::logger::LOG_FILE_NAME)
    }
}
