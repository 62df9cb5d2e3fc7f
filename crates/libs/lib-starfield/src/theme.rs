//! # Starfield Theme
//!
//! The background reads five colors from the host's theme. The [`Theme`] it
//! receives may be incomplete or hand-edited, so every field is optional and
//! [`Theme::resolve`] fills gaps with built-in defaults instead of failing.
//!
//! Theme files use camelCase keys, the same shape as an app-wide color table,
//! either flat or nested under a `colors` object:
//!
//! ```json
//! { "colors": { "background": "#0f172a", "starPrimary": "#ffffff", "nebula": "#c084fc" } }
//! ```

use lib_utils::{parse_hex, Rgb};
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::error::{Error, Result};

pub const FALLBACK_BACKGROUND: Rgb = Rgb::new(0x0f, 0x17, 0x2a);
pub const FALLBACK_STAR_PRIMARY: Rgb = Rgb::new(0xff, 0xff, 0xff);
pub const FALLBACK_STAR_SECONDARY: Rgb = Rgb::new(0xe6, 0xee, 0xf8);
pub const FALLBACK_NEBULA: Rgb = Rgb::new(0xc0, 0x84, 0xfc);
pub const FALLBACK_NEBULA_SECONDARY: Rgb = Rgb::new(0x63, 0x66, 0xf1);

/// Host-provided color set. Values are hex strings (`#rgb` or `#rrggbb`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    pub background: Option<String>,
    pub star_primary: Option<String>,
    pub star_secondary: Option<String>,
    pub nebula: Option<String>,
    pub nebula_secondary: Option<String>,
}

/// Color table as written in a theme file. `accent` and `primary` only stand
/// in for the nebula colors when the table has no nebula keys of its own.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ColorTable {
    background: Option<String>,
    star_primary: Option<String>,
    star_secondary: Option<String>,
    nebula: Option<String>,
    nebula_secondary: Option<String>,
    accent: Option<String>,
    primary: Option<String>,
}

impl From<ColorTable> for Theme {
    fn from(table: ColorTable) -> Self {
        Self {
            background: table.background,
            star_primary: table.star_primary,
            star_secondary: table.star_secondary,
            nebula: table.nebula.or(table.accent),
            nebula_secondary: table.nebula_secondary.or(table.primary),
        }
    }
}

impl Theme {
    /// Night palette: white stars on deep navy.
    pub fn dark() -> Self {
        Self {
            background: Some("#0f172a".to_string()),
            star_primary: Some("#ffffff".to_string()),
            star_secondary: Some("#e2e8f0".to_string()),
            nebula: Some("#c084fc".to_string()),
            nebula_secondary: Some("#6366f1".to_string()),
        }
    }

    /// Day palette: amber stars on a pale sky.
    pub fn light() -> Self {
        Self {
            background: Some("#f8fafc".to_string()),
            star_primary: Some("#f59e0b".to_string()),
            star_secondary: Some("#f59e0b".to_string()),
            nebula: Some("#ec4899".to_string()),
            nebula_secondary: Some("#7c3aed".to_string()),
        }
    }

    /// Parse a theme from JSON text. When the document has a `colors` object
    /// only that table is read; otherwise the document itself is the table.
    pub fn from_json(json: &str) -> Result<Self> {
        let Value::Object(mut root) = serde_json::from_str::<Value>(json)? else {
            return Err(not_an_object("theme document"));
        };
        let table = match root.remove("colors") {
            Some(Value::Object(colors)) => colors,
            Some(_) => return Err(not_an_object("`colors`")),
            None => root,
        };
        let table: ColorTable = serde_json::from_value(Value::Object(table))?;
        Ok(table.into())
    }

    /// Load a theme from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let theme = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), "Loaded starfield theme");
        Ok(theme)
    }

    /// Fill this theme's missing fields from `base`.
    pub fn layered_over(self, base: &Theme) -> Theme {
        Theme {
            background: self.background.or_else(|| base.background.clone()),
            star_primary: self.star_primary.or_else(|| base.star_primary.clone()),
            star_secondary: self.star_secondary.or_else(|| base.star_secondary.clone()),
            nebula: self.nebula.or_else(|| base.nebula.clone()),
            nebula_secondary: self.nebula_secondary.or_else(|| base.nebula_secondary.clone()),
        }
    }

    /// Resolve into concrete colors, substituting defaults for absent or invalid fields.
    pub fn resolve(&self) -> Palette {
        Palette {
            background: resolve_field("background", self.background.as_deref(), FALLBACK_BACKGROUND),
            star_primary: resolve_field("starPrimary", self.star_primary.as_deref(), FALLBACK_STAR_PRIMARY),
            star_secondary: resolve_field(
                "starSecondary",
                self.star_secondary.as_deref(),
                FALLBACK_STAR_SECONDARY,
            ),
            nebula: resolve_field("nebula", self.nebula.as_deref(), FALLBACK_NEBULA),
            nebula_secondary: resolve_field(
                "nebulaSecondary",
                self.nebula_secondary.as_deref(),
                FALLBACK_NEBULA_SECONDARY,
            ),
        }
    }
}

fn not_an_object(what: &str) -> Error {
    Error::ThemeFormat(serde_json::Error::custom(format!("{what} must be a JSON object")))
}

fn resolve_field(name: &'static str, value: Option<&str>, fallback: Rgb) -> Rgb {
    match value {
        Some(hex) => parse_hex(hex).unwrap_or_else(|err| {
            tracing::warn!(field = name, value = hex, error = %err, "Invalid theme color, using fallback");
            fallback
        }),
        None => {
            tracing::debug!(field = name, fallback = %fallback.to_hex(), "Theme color missing, using fallback");
            fallback
        }
    }
}

/// Fully resolved colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub star_primary: Rgb,
    pub star_secondary: Rgb,
    pub nebula: Rgb,
    pub nebula_secondary: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Theme::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_theme_uses_fallbacks() {
        let palette = Theme::default().resolve();
        assert_eq!(palette.background, FALLBACK_BACKGROUND);
        assert_eq!(palette.star_primary, Rgb::new(0xff, 0xff, 0xff));
        assert_eq!(palette.star_secondary, Rgb::new(0xe6, 0xee, 0xf8));
        assert_eq!(palette.nebula, FALLBACK_NEBULA);
        assert_eq!(palette.nebula_secondary, FALLBACK_NEBULA_SECONDARY);
    }

    #[test]
    fn test_invalid_field_falls_back_per_field() {
        let theme = Theme {
            background: Some("#000".to_string()),
            star_primary: Some("not-a-color".to_string()),
            ..Theme::default()
        };
        let palette = theme.resolve();
        assert_eq!(palette.background, Rgb::new(0, 0, 0));
        assert_eq!(palette.star_primary, FALLBACK_STAR_PRIMARY);
    }

    #[test]
    fn test_presets_resolve_cleanly() {
        let dark = Theme::dark().resolve();
        assert_eq!(
            dark,
            Palette {
                background: Rgb::new(0x0f, 0x17, 0x2a),
                star_primary: Rgb::new(0xff, 0xff, 0xff),
                star_secondary: Rgb::new(0xe2, 0xe8, 0xf0),
                nebula: Rgb::new(0xc0, 0x84, 0xfc),
                nebula_secondary: Rgb::new(0x63, 0x66, 0xf1),
            }
        );

        let light = Theme::light().resolve();
        assert_eq!(
            light,
            Palette {
                background: Rgb::new(0xf8, 0xfa, 0xfc),
                star_primary: Rgb::new(0xf5, 0x9e, 0x0b),
                star_secondary: Rgb::new(0xf5, 0x9e, 0x0b),
                nebula: Rgb::new(0xec, 0x48, 0x99),
                nebula_secondary: Rgb::new(0x7c, 0x3a, 0xed),
            }
        );
    }

    const DARK_APP_THEME: &str = r##"{
        "colors": {
            "primary": "#6366f1",
            "secondary": "#a78bfa",
            "accent": "#ec4899",
            "background": "#0f172a",
            "surface": "#1e293b",
            "text": "#f1f5f9",
            "starPrimary": "#ffffff",
            "starSecondary": "#e2e8f0",
            "starTertiary": "#fbbf24",
            "nebula": "#c084fc",
            "nebulaSecondary": "#6366f1",
            "border": "#334155",
            "overlay": "rgba(15, 23, 42, 0.8)"
        },
        "spacing": { "xs": 4, "sm": 8, "md": 16 },
        "typography": { "h1": { "fontSize": 28, "fontWeight": "bold" } }
    }"##;

    #[test]
    fn test_full_app_theme_table_loads() {
        let theme = Theme::from_json(DARK_APP_THEME).unwrap();
        assert_eq!(theme, Theme::dark());
        assert_ne!(theme.resolve(), Palette::default());
    }

    #[test]
    fn test_nebula_keys_win_over_accent_and_primary() {
        let theme = Theme::from_json(
            r##"{ "nebula": "#111111", "accent": "#222222", "nebulaSecondary": "#333333", "primary": "#444444" }"##,
        )
        .unwrap();
        assert_eq!(theme.nebula.as_deref(), Some("#111111"));
        assert_eq!(theme.nebula_secondary.as_deref(), Some("#333333"));
    }

    #[test]
    fn test_accent_and_primary_fill_missing_nebulae() {
        let flat = Theme::from_json(r##"{ "starPrimary": "#abcdef", "accent": "#123456" }"##).unwrap();
        assert_eq!(flat.star_primary.as_deref(), Some("#abcdef"));
        assert_eq!(flat.nebula.as_deref(), Some("#123456"));
        assert_eq!(flat.background, None);

        let wrapped = Theme::from_json(
            r##"{ "colors": { "background": "#0f172a", "primary": "#6366f1", "text": "#f1f5f9" } }"##,
        )
        .unwrap();
        assert_eq!(wrapped.background.as_deref(), Some("#0f172a"));
        assert_eq!(wrapped.nebula_secondary.as_deref(), Some("#6366f1"));
    }

    #[test]
    fn test_bad_color_table_is_reported() {
        let wrong_type = Theme::from_json(r#"{ "colors": { "background": 5 } }"#);
        assert!(matches!(wrong_type, Err(Error::ThemeFormat(_))));

        let not_a_table = Theme::from_json(r#"{ "colors": 5 }"#);
        assert!(matches!(not_a_table, Err(Error::ThemeFormat(_))));
    }

    #[test]
    fn test_layered_over_keeps_own_fields() {
        let custom = Theme {
            background: Some("#101010".to_string()),
            ..Theme::default()
        };
        let merged = custom.layered_over(&Theme::light());
        assert_eq!(merged.background.as_deref(), Some("#101010"));
        assert_eq!(merged.star_primary, Theme::light().star_primary);
    }

    #[test]
    fn test_json_rejects_non_object() {
        assert!(matches!(Theme::from_json("[1, 2, 3]"), Err(Error::ThemeFormat(_))));
        assert!(matches!(Theme::from_json("[]"), Err(Error::ThemeFormat(_))));
    }
}
