//! # Starfield Errors
//!
//! The engine's drawing operations never fail: bad input is clamped and
//! missing colors fall back to defaults. The only fallible edges are the ones
//! that read external data, namely theme files and textual quality settings.

use thiserror::Error;

/// Convenience type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Theme file could not be read.
    #[error("Theme file error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file is not valid theme JSON.
    #[error("Theme format error: {0}")]
    ThemeFormat(#[from] serde_json::Error),

    /// Quality level name is not one of `low`, `medium`, `high`.
    #[error("Unknown quality level: {0}")]
    UnknownQuality(String),
}
