//! # GUI Theme
//!
//! Bridges the starfield palette into egui: color conversion, the dark/light
//! preset switch and the widget visuals that sit on top of the sky.

use std::fmt;
use std::str::FromStr;

use egui::{Color32, Context, Stroke, Visuals};
use lib_starfield::{Palette, Theme};
use lib_utils::Rgb;

/// Built-in theme preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn preset(self) -> Theme {
        match self {
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::Light => Theme::light(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::Dark => ThemeChoice::Light,
            ThemeChoice::Light => ThemeChoice::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeChoice::Dark => "dark",
            ThemeChoice::Light => "light",
        }
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ThemeChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeChoice::Dark),
            "light" => Ok(ThemeChoice::Light),
            other => Err(format!("unknown theme '{other}', expected dark or light")),
        }
    }
}

pub fn color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// `rgb` at `opacity` in `[0, 1]`.
pub fn with_opacity(rgb: Rgb, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(rgb.r, rgb.g, rgb.b, alpha)
}

/// Text color that reads on top of the palette's background.
pub fn text_color(choice: ThemeChoice) -> Color32 {
    match choice {
        ThemeChoice::Dark => Color32::from_rgb(0xf1, 0xf5, 0xf9),
        ThemeChoice::Light => Color32::from_rgb(0x0f, 0x17, 0x2a),
    }
}

/// Card fill: the sky color, slightly see-through.
pub fn card_fill(palette: &Palette) -> Color32 {
    with_opacity(palette.background, 0.82)
}

pub fn card_stroke(palette: &Palette) -> Stroke {
    Stroke::new(1.0, with_opacity(palette.nebula, 0.35))
}

pub fn visuals(choice: ThemeChoice, palette: &Palette) -> Visuals {
    let mut visuals = match choice {
        ThemeChoice::Dark => Visuals::dark(),
        ThemeChoice::Light => Visuals::light(),
    };
    visuals.override_text_color = Some(text_color(choice));
    visuals.panel_fill = color32(palette.background);
    visuals.window_fill = card_fill(palette);
    visuals.window_stroke = card_stroke(palette);
    visuals.selection.bg_fill = with_opacity(palette.nebula_secondary, 0.6);
    visuals.hyperlink_color = color32(palette.nebula);
    visuals
}

/// Apply the theme to the whole egui context.
pub fn apply(ctx: &Context, choice: ThemeChoice, palette: &Palette) {
    ctx.set_visuals(visuals(choice, palette));
    tracing::debug!(theme = %choice, "Visuals applied");
}
