/// Viewport size in logical pixels.
///
/// Renderers treat this as the coordinate basis for converting logical px
/// positions to NDC in shaders.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Whole-pixel size, truncated toward zero. Invalid viewports yield `(0, 0)`.
    #[inline]
    pub fn whole_pixels(self) -> (u32, u32) {
        if !self.is_valid() {
            return (0, 0);
        }
        (self.width as u32, self.height as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(Viewport::new(800.0, 600.0).is_valid());
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, -1.0).is_valid());
        assert!(!Viewport::new(f32::INFINITY, 600.0).is_valid());
    }

    #[test]
    fn whole_pixels_truncates() {
        assert_eq!(Viewport::new(800.0, 600.0).whole_pixels(), (800, 600));
        assert_eq!(Viewport::new(799.9, 600.5).whole_pixels(), (799, 600));
    }

    #[test]
    fn whole_pixels_of_invalid_is_zero() {
        assert_eq!(Viewport::new(0.0, 600.0).whole_pixels(), (0, 0));
        assert_eq!(Viewport::new(f32::NAN, 600.0).whole_pixels(), (0, 0));
    }
}
