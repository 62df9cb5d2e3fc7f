//! # Star Descriptor Builder
//!
//! Resolves a `(global_index, layer)` pair into the immutable record of one
//! star. Everything except the pixel size is a pure function of the index and
//! the layer, so a resize changes how big a star renders but never where it
//! sits or how it twinkles.

use lib_utils::Rgb;

use crate::animation::TwinkleTiming;
use crate::layers::LayerSpec;
use crate::seed::SeedChannel;
use crate::theme::Palette;
use crate::viewport::Viewport;

/// Diameter of a far-layer star on the reference phone.
pub const BASE_STAR_PX: f32 = 1.0;

/// Stars never render smaller than this.
pub const MIN_STAR_PX: f32 = 0.8;

/// Every n-th star takes the secondary color.
const SECONDARY_COLOR_EVERY: usize = 5;

const JITTER_RANGE: (f64, f64) = (0.85, 1.2);
const BRIGHT_MS_RANGE: (f64, f64) = (1200.0, 3400.0);
const DIM_MS_RANGE: (f64, f64) = (1000.0, 3000.0);
const DELAY_MS_RANGE: (f64, f64) = (0.0, 1500.0);
const INITIAL_OPACITY_RANGE: (f64, f64) = (0.5, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Primary,
    Secondary,
}

impl ColorRole {
    pub fn for_index(global_index: usize) -> Self {
        if global_index % SECONDARY_COLOR_EVERY == 0 {
            ColorRole::Secondary
        } else {
            ColorRole::Primary
        }
    }

    pub fn pick(self, palette: &Palette) -> Rgb {
        match self {
            ColorRole::Primary => palette.star_primary,
            ColorRole::Secondary => palette.star_secondary,
        }
    }
}

/// Computed placement and appearance of one star. Read-only once built; use
/// [`StarDescriptor::resized`] or [`StarDescriptor::recolored`] for a changed copy.
#[derive(Debug, Clone, PartialEq)]
pub struct StarDescriptor {
    global_index: usize,
    depth_index: usize,
    left_pct: f32,
    top_pct: f32,
    base_size_px: f32,
    color: Rgb,
    color_role: ColorRole,
    scale_jitter: f32,
    bright_duration_ms: u32,
    dim_duration_ms: u32,
    start_delay_ms: u32,
    initial_opacity: f32,
    dim_floor: f32,
    size_multiplier: f32,
}

impl StarDescriptor {
    pub fn global_index(&self) -> usize {
        self.global_index
    }

    pub fn depth_index(&self) -> usize {
        self.depth_index
    }

    /// Horizontal position in `[0, 100)` percent of the viewport width.
    pub fn left_pct(&self) -> f32 {
        self.left_pct
    }

    /// Vertical position in `[0, 100)` percent of the viewport height.
    pub fn top_pct(&self) -> f32 {
        self.top_pct
    }

    /// Diameter in pixels before jitter.
    pub fn base_size_px(&self) -> f32 {
        self.base_size_px
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn color_role(&self) -> ColorRole {
        self.color_role
    }

    pub fn scale_jitter(&self) -> f32 {
        self.scale_jitter
    }

    pub fn initial_opacity(&self) -> f32 {
        self.initial_opacity
    }

    pub fn dim_floor(&self) -> f32 {
        self.dim_floor
    }

    /// Rendered diameter including jitter.
    pub fn size_px(&self) -> f32 {
        self.base_size_px * self.scale_jitter
    }

    pub fn timing(&self) -> TwinkleTiming {
        TwinkleTiming::new(
            i64::from(self.bright_duration_ms),
            i64::from(self.dim_duration_ms),
            i64::from(self.start_delay_ms),
        )
    }

    /// Same star at a new viewport size.
    pub fn resized(&self, viewport: Viewport) -> Self {
        Self {
            base_size_px: base_size(self.size_multiplier, viewport),
            ..self.clone()
        }
    }

    /// Same star under a new palette.
    pub fn recolored(&self, palette: &Palette) -> Self {
        Self {
            color: self.color_role.pick(palette),
            ..self.clone()
        }
    }
}

/// Build the descriptor for the star at `global_index` in `layer`.
pub fn build_star(global_index: usize, layer: &LayerSpec, palette: &Palette, viewport: Viewport) -> StarDescriptor {
    let depth = layer.depth_index;
    let draw = |channel: SeedChannel, (min, max): (f64, f64)| channel.draw_range(global_index, depth, min, max);

    let left_pct = (SeedChannel::Left.draw(global_index, depth) * 100.0) as f32;
    let top_pct = (SeedChannel::Top.draw(global_index, depth) * 100.0) as f32;
    let color_role = ColorRole::for_index(global_index);
    let initial_opacity = (draw(SeedChannel::Opacity, INITIAL_OPACITY_RANGE) as f32).max(layer.dim_floor);

    StarDescriptor {
        global_index,
        depth_index: depth,
        // f64 -> f32 can round 99.99999 up to 100.0
        left_pct: left_pct.min(PCT_MAX),
        top_pct: top_pct.min(PCT_MAX),
        base_size_px: base_size(layer.size_multiplier, viewport),
        color: color_role.pick(palette),
        color_role,
        scale_jitter: draw(SeedChannel::Jitter, JITTER_RANGE) as f32,
        bright_duration_ms: draw(SeedChannel::Bright, BRIGHT_MS_RANGE) as u32,
        dim_duration_ms: draw(SeedChannel::Dim, DIM_MS_RANGE) as u32,
        start_delay_ms: draw(SeedChannel::Delay, DELAY_MS_RANGE) as u32,
        initial_opacity: initial_opacity.min(1.0),
        dim_floor: layer.dim_floor,
        size_multiplier: layer.size_multiplier,
    }
}

/// Stays below 100 after rounding to f32.
const PCT_MAX: f32 = 99.99999;

fn base_size(size_multiplier: f32, viewport: Viewport) -> f32 {
    (BASE_STAR_PX * size_multiplier * viewport.scale()).max(MIN_STAR_PX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{LayerPlan, DEFAULT_LAYERS};
    use crate::theme::Theme;
    use std::collections::HashSet;

    fn palette() -> Palette {
        Palette::default()
    }

    #[test]
    fn test_build_is_deterministic() {
        let vp = Viewport::new(390.0, 844.0);
        for (layer, _, global) in LayerPlan::default().stars() {
            let a = build_star(global, layer, &palette(), vp);
            let b = build_star(global, layer, &palette(), vp);
            assert_eq!(a, b);
            assert_eq!(a.left_pct.to_bits(), b.left_pct.to_bits());
            assert_eq!(a.top_pct.to_bits(), b.top_pct.to_bits());
        }
    }

    #[test]
    fn test_fields_within_ranges() {
        let vp = Viewport::new(390.0, 844.0);
        for (layer, _, global) in LayerPlan::default().stars() {
            let star = build_star(global, layer, &palette(), vp);
            assert!((0.0..100.0).contains(&star.left_pct));
            assert!((0.0..100.0).contains(&star.top_pct));
            assert!((0.85..1.2).contains(&star.scale_jitter));
            assert!((1200..3400).contains(&star.bright_duration_ms));
            assert!((1000..3000).contains(&star.dim_duration_ms));
            assert!(star.start_delay_ms < 1500);
            assert!(star.initial_opacity >= star.dim_floor && star.initial_opacity <= 1.0);
            assert!(star.initial_opacity >= 0.5);
            assert!(star.base_size_px >= MIN_STAR_PX);
        }
    }

    #[test]
    fn test_spread_over_grid() {
        let layer = LayerSpec::new(0, 200, 1.0, 0.15);
        let buckets: HashSet<(usize, usize)> = (0..layer.star_count)
            .map(|i| build_star(i, &layer, &palette(), Viewport::default()))
            .map(|s| ((s.left_pct / 10.0) as usize, (s.top_pct / 10.0) as usize))
            .collect();
        assert!(buckets.len() >= 60, "only {} of 100 buckets populated", buckets.len());
    }

    #[test]
    fn test_layers_do_not_alias_on_local_index() {
        let plan = LayerPlan::default();
        let vp = Viewport::default();
        for local in 0..40 {
            let positions: Vec<(u32, u32)> = plan
                .layers()
                .iter()
                .map(|layer| {
                    let global = plan.range(layer.depth_index).start + local;
                    let star = build_star(global, layer, &palette(), vp);
                    (star.left_pct.to_bits(), star.top_pct.to_bits())
                })
                .collect();
            let unique: HashSet<_> = positions.iter().collect();
            assert_eq!(unique.len(), positions.len(), "layers alias at local index {local}");
        }
    }

    #[test]
    fn test_same_index_in_other_layer_moves() {
        // Even with an identical global index, the depth offset changes the seed.
        let far = build_star(3, &DEFAULT_LAYERS[0], &palette(), Viewport::default());
        let near = build_star(3, &DEFAULT_LAYERS[2], &palette(), Viewport::default());
        assert_ne!((far.left_pct, far.top_pct), (near.left_pct, near.top_pct));
    }

    #[test]
    fn test_resize_keeps_positions_and_scales_size() {
        let small = Viewport::new(400.0, 800.0);
        let large = Viewport::new(800.0, 1600.0);
        let ratio = large.diagonal() / small.diagonal();

        for (layer, _, global) in LayerPlan::default().stars() {
            let before = build_star(global, layer, &palette(), small);
            let after = before.resized(large);
            assert_eq!(before.left_pct, after.left_pct);
            assert_eq!(before.top_pct, after.top_pct);
            assert_eq!(before.bright_duration_ms, after.bright_duration_ms);
            let expected = before.base_size_px * ratio;
            assert!((after.base_size_px - expected).abs() < 1e-4);
            assert_eq!(after, build_star(global, layer, &palette(), large));
        }
    }

    #[test]
    fn test_tiny_viewport_clamps_size() {
        let star = build_star(0, &DEFAULT_LAYERS[0], &palette(), Viewport::new(0.0, 0.0));
        assert_eq!(star.base_size_px, MIN_STAR_PX);
    }

    #[test]
    fn test_color_alternation_and_recolor() {
        let palette = Theme::dark().resolve();
        let layer = &DEFAULT_LAYERS[0];
        for global in 0..20 {
            let star = build_star(global, layer, &palette, Viewport::default());
            let expected = if global % 5 == 0 { palette.star_secondary } else { palette.star_primary };
            assert_eq!(star.color, expected);
        }

        let light = Theme::light().resolve();
        let star = build_star(5, layer, &palette, Viewport::default()).recolored(&light);
        assert_eq!(star.color, light.star_secondary);
    }
}
