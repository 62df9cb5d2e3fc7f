//! # Common Error Types
//!
//! Consolidated error handling for the galaxy host application.
//!
//! The starfield engine itself never fails while drawing. What can fail is
//! everything around it: reading configuration from the environment, loading
//! a theme file and starting the native window.

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Environment configuration is missing a value or holds one out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Native window or graphics context failed.
    #[error("UI error: {0}")]
    Ui(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<lib_starfield::Error> for AppError {
    fn from(err: lib_starfield::Error) -> Self {
        match err {
            lib_starfield::Error::UnknownQuality(level) => AppError::Config(format!("Unknown quality level: {level}")),
            other => AppError::Theme(other.to_string()),
        }
    }
}

impl From<eframe::Error> for AppError {
    fn from(err: eframe::Error) -> Self {
        AppError::Ui(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(AppError::Config("x".to_string()).to_string(), "Configuration error: x");
        assert_eq!(AppError::Ui("no gl".to_string()).to_string(), "UI error: no gl");
    }

    #[test]
    fn test_starfield_errors_are_categorized() {
        let err: AppError = lib_starfield::Error::UnknownQuality("ultra".to_string()).into();
        assert!(matches!(err, AppError::Config(_)));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = lib_starfield::Error::from(io).into();
        assert!(matches!(err, AppError::Theme(msg) if msg.contains("missing")));
    }
}
