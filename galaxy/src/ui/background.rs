//! # Galaxy Background Widget
//!
//! Paints a [`GalaxyBackground`] behind arbitrary egui content.
//!
//! The sky is drawn straight onto the layer painter before the content runs,
//! so it is always underneath and never allocates a widget. Pointer and
//! keyboard input go to the content untouched.
//!
//! egui has no blur, so soft edges are faked with stacked translucent circles:
//! each nebula is a set of concentric rings whose alpha accumulates toward the
//! center, and each star gets one wide, faint halo under its core.

use egui::{Painter, Rect, Ui};
use lib_starfield::{GalaxyBackground, NebulaShape, Scene, Viewport};

use crate::ui::theme::{color32, with_opacity};

/// Concentric circles per nebula.
const NEBULA_RINGS: usize = 8;

/// Paint the background into the available rect, then lay out `add_contents` on top.
pub fn show<R>(ui: &mut Ui, background: &mut GalaxyBackground, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let rect = ui.max_rect();
    background.set_viewport(Viewport::new(rect.width(), rect.height()));
    paint(ui.painter(), rect, &background.scene());
    add_contents(ui)
}

/// Paint a scene with its origin at `rect.min`.
pub fn paint(painter: &Painter, rect: Rect, scene: &Scene) {
    painter.rect_filled(rect, 0.0, color32(scene.background));

    let origin = rect.min;
    for nebula in &scene.nebulae {
        let center = origin + egui::vec2(nebula.x, nebula.y);
        for (radius, alpha) in nebula_rings(nebula) {
            painter.circle_filled(center, radius, with_opacity(nebula.color, alpha));
        }
    }

    for star in &scene.stars {
        let center = origin + egui::vec2(star.x, star.y);
        painter.circle_filled(center, star.glow_radius, with_opacity(star.color, star.glow_opacity));
        painter.circle_filled(center, star.radius, with_opacity(star.color, star.opacity));
    }
}

/// `(radius, alpha)` per ring, outermost first. Alphas sum to the nebula's opacity.
fn nebula_rings(nebula: &NebulaShape) -> impl Iterator<Item = (f32, f32)> + '_ {
    let alpha = nebula.opacity / NEBULA_RINGS as f32;
    (0..NEBULA_RINGS).map(move |ring| {
        let scale = 1.0 - ring as f32 / NEBULA_RINGS as f32;
        (nebula.radius * scale, alpha)
    })
}
