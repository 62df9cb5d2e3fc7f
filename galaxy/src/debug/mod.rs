//! # Debugging and Tracing Infrastructure
//!
//! File-based logging and in-UI diagnostics for the galaxy host.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `galaxy=debug,lib_starfield=trace`)
//! - `GALAXY_LOG_DIR`: Log directory (default: `logs`)
//! - `GALAXY_LOG_STDERR`: Mirror logs to stderr (1=on, 0=off)
//! - `GALAXY_DEBUG_UI`: Show the debug overlay on startup (1=on, 0=off)

pub mod config;
pub mod logger;
pub mod metrics;

pub use config::DebugConfig;
pub use metrics::FrameMetrics;

use tracing_appender::non_blocking::WorkerGuard;

/// Initialize the debugging system.
///
/// Call this at application startup, before any other operations, and hold
/// on to the returned guard until exit.
pub fn init(config: &DebugConfig) -> Option<WorkerGuard> {
    logger::init(config)
}
