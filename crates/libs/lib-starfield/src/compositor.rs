//! # Background Compositor
//!
//! [`GalaxyBackground`] owns the whole field: the layer plan, one descriptor
//! and one animation handle per star, and the resolved palette. Each frame the
//! host calls [`GalaxyBackground::tick`] with its clock and paints
//! [`GalaxyBackground::scene`], which is back to front:
//!
//! 1. a solid fill in the theme background,
//! 2. two soft nebula glows, off center and barely visible,
//! 3. every star at its live opacity.
//!
//! The caller's content is drawn after the scene. Nothing in the scene takes
//! input: it is a list of shapes to paint, not widgets.

use lib_utils::Rgb;

use crate::animation::AnimationHandle;
use crate::layers::{LayerPlan, Quality, StarfieldConfig};
use crate::star::{build_star, StarDescriptor};
use crate::theme::{Palette, Theme};
use crate::viewport::Viewport;

/// Fraction of a star's opacity carried by its halo.
const GLOW_STRENGTH: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NebulaRole {
    Primary,
    Secondary,
}

/// Percentage-based nebula placement.
#[derive(Debug, Clone, Copy)]
struct NebulaSpec {
    center_pct: (f32, f32),
    /// Radius as a fraction of the viewport's longer side.
    radius_frac: f32,
    opacity: f32,
    role: NebulaRole,
}

const NEBULAE: [NebulaSpec; 2] = [
    NebulaSpec {
        center_pct: (30.0, 28.0),
        radius_frac: 0.75,
        opacity: 0.08,
        role: NebulaRole::Primary,
    },
    NebulaSpec {
        center_pct: (78.0, 72.0),
        radius_frac: 0.6,
        opacity: 0.05,
        role: NebulaRole::Secondary,
    },
];

/// A soft circular glow, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NebulaShape {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgb,
    pub opacity: f32,
}

/// One star ready to paint, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSprite {
    pub global_index: usize,
    pub depth_index: usize,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub glow_radius: f32,
    pub glow_opacity: f32,
    pub color: Rgb,
    pub opacity: f32,
}

/// Paint list for one frame, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub background: Rgb,
    pub nebulae: Vec<NebulaShape>,
    pub stars: Vec<StarSprite>,
}

#[derive(Debug)]
struct MountedStar {
    descriptor: StarDescriptor,
    handle: AnimationHandle,
}

/// The starfield behind a screen.
#[derive(Debug)]
pub struct GalaxyBackground {
    palette: Palette,
    plan: LayerPlan,
    quality: Quality,
    viewport: Viewport,
    stars: Vec<MountedStar>,
    mounted: bool,
}

impl GalaxyBackground {
    pub fn new(theme: &Theme, viewport: Viewport, config: &StarfieldConfig) -> Self {
        let palette = theme.resolve();
        let plan = LayerPlan::from_config(config);
        let stars: Vec<MountedStar> = plan
            .stars()
            .map(|(layer, _, global)| {
                let descriptor = build_star(global, layer, &palette, viewport);
                let handle = AnimationHandle::for_star(&descriptor);
                MountedStar { descriptor, handle }
            })
            .collect();

        tracing::debug!(
            stars = stars.len(),
            layers = plan.layers().len(),
            quality = %config.quality,
            width = viewport.width(),
            height = viewport.height(),
            "Starfield built"
        );

        Self {
            palette,
            plan,
            quality: config.quality,
            viewport,
            stars,
            mounted: false,
        }
    }

    /// Start every star's loop.
    pub fn mount(&mut self, now_ms: u64) {
        for star in &mut self.stars {
            star.handle.start(now_ms);
        }
        self.mounted = true;
        tracing::info!(stars = self.stars.len(), "Starfield mounted");
    }

    /// Cancel every star's loop. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        for star in &mut self.stars {
            star.handle.cancel();
        }
        self.mounted = false;
        tracing::info!(stars = self.stars.len(), "Starfield unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Advance all running loops, reporting `(global_index, opacity)` for each
    /// change. Returns the number of changes.
    pub fn tick(&mut self, now_ms: u64, mut on_change: impl FnMut(usize, f32)) -> usize {
        let mut changed = 0;
        for star in &mut self.stars {
            if let Some(opacity) = star.handle.tick(now_ms) {
                on_change(star.descriptor.global_index(), opacity);
                changed += 1;
            }
        }
        changed
    }

    /// Apply a new viewport. Only pixel sizes are recomputed; star identity
    /// and percentage positions stay put. Returns `false` when nothing changed.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if viewport == self.viewport {
            return false;
        }
        for star in &mut self.stars {
            star.descriptor = star.descriptor.resized(viewport);
        }
        tracing::debug!(
            from_width = self.viewport.width(),
            from_height = self.viewport.height(),
            width = viewport.width(),
            height = viewport.height(),
            "Starfield resized"
        );
        self.viewport = viewport;
        true
    }

    /// Swap the theme, recoloring stars in place.
    pub fn set_theme(&mut self, theme: &Theme) {
        let palette = theme.resolve();
        if palette == self.palette {
            return;
        }
        for star in &mut self.stars {
            star.descriptor = star.descriptor.recolored(&palette);
        }
        self.palette = palette;
        tracing::debug!(background = %palette.background.to_hex(), "Starfield theme changed");
    }

    pub fn scene(&self) -> Scene {
        let (width, height) = (self.viewport.width(), self.viewport.height());
        let longest = width.max(height);

        let nebulae = NEBULAE
            .iter()
            .map(|spec| {
                let (x, y) = self.viewport.to_px(spec.center_pct.0, spec.center_pct.1);
                let color = match spec.role {
                    NebulaRole::Primary => self.palette.nebula,
                    NebulaRole::Secondary => self.palette.nebula_secondary,
                };
                NebulaShape {
                    x,
                    y,
                    radius: longest * spec.radius_frac,
                    color,
                    opacity: spec.opacity,
                }
            })
            .collect();

        let stars = self
            .stars
            .iter()
            .map(|star| {
                let d = &star.descriptor;
                let (x, y) = self.viewport.to_px(d.left_pct(), d.top_pct());
                let size = d.size_px();
                let opacity = star.handle.opacity();
                StarSprite {
                    global_index: d.global_index(),
                    depth_index: d.depth_index(),
                    x,
                    y,
                    radius: size / 2.0,
                    glow_radius: size,
                    glow_opacity: opacity * GLOW_STRENGTH,
                    color: d.color(),
                    opacity,
                }
            })
            .collect();

        Scene {
            width,
            height,
            background: self.palette.background,
            nebulae,
            stars,
        }
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub fn running_count(&self) -> usize {
        self.stars.iter().filter(|s| s.handle.is_running()).count()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &StarDescriptor> + '_ {
        self.stars.iter().map(|s| &s.descriptor)
    }

    /// Live opacity of a star, if the index exists.
    pub fn opacity(&self, global_index: usize) -> Option<f32> {
        self.stars.get(global_index).map(|s| s.handle.opacity())
    }

    pub fn plan(&self) -> &LayerPlan {
        &self.plan
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Drop for GalaxyBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}
