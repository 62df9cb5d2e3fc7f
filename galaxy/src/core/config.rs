//! # Application Configuration
//!
//! Configuration loaded from environment variables. All values are validated
//! on startup to fail fast if misconfigured.
//!
//! | Variable               | Values                 | Default |
//! |------------------------|------------------------|---------|
//! | `GALAXY_QUALITY`       | `low`, `medium`, `high`| `high`  |
//! | `GALAXY_THEME`         | `dark`, `light`        | `dark`  |
//! | `GALAXY_THEME_FILE`    | path to theme JSON     | none    |
//! | `GALAXY_WINDOW_WIDTH`  | 200 to 8192            | 390     |
//! | `GALAXY_WINDOW_HEIGHT` | 200 to 8192            | 844     |

use std::path::PathBuf;

use lib_starfield::{Quality, Theme};
use lib_utils::{get_env, get_env_parse_or, validate_not_empty, validate_range};

use crate::core::error::{AppError, Result};
use crate::ui::theme::ThemeChoice;

const MIN_WINDOW_SIDE: f32 = 200.0;
const MAX_WINDOW_SIDE: f32 = 8192.0;

/// Host configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub quality: Quality,
    pub theme: ThemeChoice,
    /// JSON theme layered over the preset.
    pub theme_file: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quality: Quality::High,
            theme: ThemeChoice::Dark,
            theme_file: None,
            window_width: 390.0,
            window_height: 844.0,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let theme_file = get_env("GALAXY_THEME_FILE").ok().map(PathBuf::from);

        Ok(Self {
            quality: get_env_parse_or("GALAXY_QUALITY", defaults.quality)?,
            theme: get_env_parse_or("GALAXY_THEME", defaults.theme)?,
            theme_file,
            window_width: get_env_parse_or("GALAXY_WINDOW_WIDTH", defaults.window_width)?,
            window_height: get_env_parse_or("GALAXY_WINDOW_HEIGHT", defaults.window_height)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        validate_range(self.window_width, MIN_WINDOW_SIDE, MAX_WINDOW_SIDE, "GALAXY_WINDOW_WIDTH")
            .map_err(AppError::Config)?;
        validate_range(self.window_height, MIN_WINDOW_SIDE, MAX_WINDOW_SIDE, "GALAXY_WINDOW_HEIGHT")
            .map_err(AppError::Config)?;
        if let Some(path) = &self.theme_file {
            validate_not_empty(&path.to_string_lossy(), "GALAXY_THEME_FILE").map_err(AppError::Config)?;
        }
        Ok(())
    }

    /// Custom theme from `theme_file`, if one is configured.
    pub fn load_custom_theme(&self) -> Result<Option<Theme>> {
        match &self.theme_file {
            Some(path) => {
                let theme = Theme::load_from_file(path)?;
                tracing::info!(path = %path.display(), "Custom theme loaded");
                Ok(Some(theme))
            }
            None => Ok(None),
        }
    }
}
