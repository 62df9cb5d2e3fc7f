//! # Application
//!
//! [`GalaxyApp`] owns the starfield and drives it from the egui frame clock:
//! every frame it advances the twinkle loops, paints the sky under the demo
//! screen and requests the next repaint.

use egui::Context;
use lib_starfield::{GalaxyBackground, Quality, StarfieldConfig, Theme, Viewport};

use crate::core::Config;
use crate::debug::FrameMetrics;
use crate::ui::screens::{home, HomeAction};
use crate::ui::theme::{self, ThemeChoice};
use crate::ui::{background, debug_overlay};

pub struct GalaxyApp {
    background: GalaxyBackground,
    choice: ThemeChoice,
    /// Theme file fields, layered over the active preset.
    custom_theme: Option<Theme>,
    show_debug: bool,
    metrics: FrameMetrics,
}

impl GalaxyApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config, custom_theme: Option<Theme>, show_debug: bool) -> Self {
        let app = Self::from_config(config, custom_theme, show_debug);
        theme::apply(&cc.egui_ctx, app.choice, app.background.palette());
        app
    }

    /// Build without a window. The background mounts on the first frame.
    pub fn from_config(config: &Config, custom_theme: Option<Theme>, show_debug: bool) -> Self {
        let background = GalaxyBackground::new(
            &effective_theme(config.theme, custom_theme.as_ref()),
            Viewport::new(config.window_width, config.window_height),
            &StarfieldConfig::with_quality(config.quality),
        );
        Self {
            background,
            choice: config.theme,
            custom_theme,
            show_debug,
            metrics: FrameMetrics::default(),
        }
    }

    pub fn current_theme(&self) -> Theme {
        effective_theme(self.choice, self.custom_theme.as_ref())
    }

    pub fn background(&self) -> &GalaxyBackground {
        &self.background
    }

    pub fn theme_choice(&self) -> ThemeChoice {
        self.choice
    }

    /// Apply a user action. Returns `true` when the palette changed.
    pub fn apply_action(&mut self, action: HomeAction, now_ms: u64) -> bool {
        match action {
            HomeAction::ToggleTheme => {
                self.choice = self.choice.toggled();
                self.background.set_theme(&self.current_theme());
                tracing::info!(theme = %self.choice, "Theme switched");
                true
            }
            HomeAction::SetQuality(quality) => {
                self.rebuild(quality, now_ms);
                false
            }
        }
    }

    fn rebuild(&mut self, quality: Quality, now_ms: u64) {
        let was_mounted = self.background.is_mounted();
        let mut background = GalaxyBackground::new(
            &self.current_theme(),
            self.background.viewport(),
            &StarfieldConfig::with_quality(quality),
        );
        if was_mounted {
            background.mount(now_ms);
        }
        // Dropping the old field cancels its loops.
        self.background = background;
        tracing::info!(quality = %quality, stars = self.background.star_count(), "Starfield rebuilt");
    }

    fn now_ms(ctx: &Context) -> u64 {
        (ctx.input(|i| i.time) * 1000.0).max(0.0) as u64
    }
}

impl eframe::App for GalaxyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now_ms = Self::now_ms(ctx);
        self.metrics.record_frame(ctx.input(|i| i.unstable_dt) * 1000.0);

        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::D)) {
            self.show_debug = !self.show_debug;
            tracing::debug!(visible = self.show_debug, "Debug overlay toggled");
        }

        if !self.background.is_mounted() {
            self.background.mount(now_ms);
        }
        self.background.tick(now_ms, |_, _| {});

        let palette = *self.background.palette();
        let (choice, quality) = (self.choice, self.background.quality());
        let action = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                background::show(ui, &mut self.background, |ui| home::render(ui, &palette, choice, quality))
            })
            .inner;

        if let Some(action) = action {
            if self.apply_action(action, now_ms) {
                theme::apply(ctx, self.choice, self.background.palette());
            }
        }

        if self.show_debug {
            debug_overlay::render_debug_overlay(ctx, &self.background, &self.metrics);
        }

        ctx.request_repaint();
    }
}

/// Preset with the custom theme file applied on top.
fn effective_theme(choice: ThemeChoice, custom: Option<&Theme>) -> Theme {
    let preset = choice.preset();
    match custom {
        Some(custom) => custom.clone().layered_over(&preset),
        None => preset,
    }
}
