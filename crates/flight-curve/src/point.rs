/// Point in normalized math space.
///
/// The figure keeps `x` roughly within `[-3, 3]` and `y` within `[-1, 1]`;
/// nothing enforces it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct MathPoint {
    pub x: f64,
    pub y: f64,
}

impl MathPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer point in pixel space (top-left origin, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The two curve points evaluated at one sample index.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointPair {
    /// Outer curve.
    pub a: MathPoint,
    /// Inner curve.
    pub b: MathPoint,
}

/// One line segment in pixel space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    pub from: PixelPoint,
    pub to: PixelPoint,
}

impl Segment {
    #[inline]
    pub const fn new(from: PixelPoint, to: PixelPoint) -> Self {
        Self { from, to }
    }
}
