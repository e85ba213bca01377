use crate::point::{MathPoint, PixelPoint};

/// Drawable area in whole pixels.
///
/// Both dimensions are non-zero by construction. Hosts report a zero size
/// while a window is minimized or mid-layout; [`PixelViewport::new`] returns
/// `None` for those and the caller skips the pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelViewport {
    width: u32,
    height: u32,
}

impl PixelViewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(Self { width, height })
        }
    }

    /// Maps a math-space point to pixel space.
    ///
    /// `x ∈ [-3, 3]` spans the width and `y ∈ [-1, 1]` spans the height with
    /// +Y flipped downwards. Points outside those ranges land outside the
    /// viewport; they are not clamped. Coordinates are truncated toward zero.
    #[inline]
    pub fn map(self, p: MathPoint) -> PixelPoint {
        let px = (p.x + 3.0) / 6.0 * f64::from(self.width);
        let py = (1.0 - (p.y + 1.0) / 2.0) * f64::from(self.height);
        PixelPoint::new(truncate(px), truncate(py))
    }
}

// `as` truncates toward zero and saturates out-of-range values (NaN → 0).
#[inline]
fn truncate(v: f64) -> i32 {
    v as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp(w: u32, h: u32) -> PixelViewport {
        PixelViewport::new(w, h).unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn zero_sizes_are_rejected() {
        assert!(PixelViewport::new(0, 600).is_none());
        assert!(PixelViewport::new(800, 0).is_none());
        assert!(PixelViewport::new(0, 0).is_none());
    }

    #[test]
    fn positive_sizes_are_kept() {
        let v = vp(800, 600);
        assert_eq!((v.width, v.height), (800, 600));
    }

    // ── map ───────────────────────────────────────────────────────────────

    #[test]
    fn corners_of_math_space() {
        let v = vp(800, 600);
        assert_eq!(v.map(MathPoint::new(-3.0, 1.0)), PixelPoint::new(0, 0));
        assert_eq!(v.map(MathPoint::new(3.0, -1.0)), PixelPoint::new(800, 600));
        assert_eq!(v.map(MathPoint::new(0.0, 0.0)), PixelPoint::new(400, 300));
    }

    #[test]
    fn truncates_instead_of_rounding() {
        // (x + 3) / 6 * 800 ≈ 399.9
        let x = 399.9 * 6.0 / 800.0 - 3.0;
        assert_eq!(vp(800, 600).map(MathPoint::new(x, 0.0)).x, 399);
    }

    #[test]
    fn truncates_toward_zero_for_negative_values() {
        // (x + 3) / 6 * 800 ≈ -0.5; flooring would give -1.
        let x = -0.5 * 6.0 / 800.0 - 3.0;
        assert_eq!(vp(800, 600).map(MathPoint::new(x, 0.0)).x, 0);
    }

    #[test]
    fn out_of_range_is_not_clamped() {
        let p = vp(600, 600).map(MathPoint::new(6.0, -2.0));
        assert_eq!(p, PixelPoint::new(900, 900));
    }
}
