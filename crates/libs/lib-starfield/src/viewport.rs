//! Viewport geometry in device-independent pixels.

/// Smallest side length a viewport may have.
pub const MIN_VIEWPORT_SIDE: f32 = 1.0;

/// Diagonal of the 390×844 phone the star sizes were tuned on.
pub const REFERENCE_DIAGONAL: f32 = 929.75;

/// Current drawable area. Sides are always at least [`MIN_VIEWPORT_SIDE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Create a viewport, clamping zero, negative or non-finite sides to 1.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: clamp_side(width),
            height: clamp_side(height),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn diagonal(&self) -> f32 {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    /// Size scale relative to the reference phone.
    pub fn scale(&self) -> f32 {
        self.diagonal() / REFERENCE_DIAGONAL
    }

    /// Convert a percentage position into pixels.
    pub fn to_px(&self, left_pct: f32, top_pct: f32) -> (f32, f32) {
        (left_pct / 100.0 * self.width, top_pct / 100.0 * self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(390.0, 844.0)
    }
}

fn clamp_side(side: f32) -> f32 {
    if side.is_finite() {
        side.max(MIN_VIEWPORT_SIDE)
    } else {
        MIN_VIEWPORT_SIDE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_sides_clamp_to_one() {
        let vp = Viewport::new(0.0, -20.0);
        assert_eq!((vp.width(), vp.height()), (1.0, 1.0));

        let vp = Viewport::new(f32::NAN, f32::INFINITY);
        assert_eq!((vp.width(), vp.height()), (1.0, 1.0));
    }

    #[test]
    fn test_reference_phone_has_unit_scale() {
        let scale = Viewport::new(390.0, 844.0).scale();
        assert!((scale - 1.0).abs() < 1e-3, "scale was {scale}");
    }

    #[test]
    fn test_to_px() {
        let vp = Viewport::new(400.0, 800.0);
        assert_eq!(vp.to_px(50.0, 25.0), (200.0, 200.0));
    }
}
