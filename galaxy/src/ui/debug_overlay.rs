//! In-UI debug overlay (toggle with Ctrl+D)

use egui::{Color32, Context};
use lib_starfield::GalaxyBackground;

use crate::debug::metrics::{FrameMetrics, SLOW_FRAME_MS};

/// Render debug overlay as an egui window
pub fn render_debug_overlay(ctx: &Context, background: &GalaxyBackground, metrics: &FrameMetrics) {
    egui::Window::new("Debug Monitor")
        .collapsible(true)
        .resizable(false)
        .default_pos([12.0, 12.0])
        .show(ctx, |ui| {
            ui.heading("Starfield");
            let viewport = background.viewport();
            ui.label(format!("Stars:     {}", background.star_count()));
            ui.label(format!("Running:   {}", background.running_count()));
            ui.label(format!("Layers:    {}", background.plan().layers().len()));
            ui.label(format!("Quality:   {}", background.quality()));
            ui.label(format!("Viewport:  {:.0} x {:.0}", viewport.width(), viewport.height()));
            ui.label(format!("Scale:     {:.2}", viewport.scale()));

            ui.separator();

            ui.heading("Performance");
            ui.label(format!("Frame: {:.1}ms", metrics.last_frame_ms));
            ui.label(format!("Avg:   {:.1}ms", metrics.avg_frame_ms));
            ui.label(format!("FPS:   {:.1}", metrics.fps()));
            if metrics.slow_frame_count > 0 {
                ui.colored_label(
                    Color32::from_rgb(255, 170, 0),
                    format!("Slow frames (>{SLOW_FRAME_MS}ms): {}", metrics.slow_frame_count),
                );
            }
        });
}
