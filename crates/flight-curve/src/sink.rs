use crate::point::{PixelPoint, Segment};

/// Drawing surface the curve renderer issues segments to.
pub trait LineSink {
    /// Requests anti-aliased (or aliased) strokes for subsequent lines.
    ///
    /// Surfaces that cannot anti-alias ignore the request.
    fn set_antialiasing(&mut self, enabled: bool) {
        let _ = enabled;
    }

    /// Draws a straight line between two pixel points.
    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint);
}

/// Records segments in draw order.
impl LineSink for Vec<Segment> {
    #[inline]
    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint) {
        self.push(Segment::new(from, to));
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    #[inline]
    fn set_antialiasing(&mut self, enabled: bool) {
        (**self).set_antialiasing(enabled);
    }

    #[inline]
    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint) {
        (**self).draw_line(from, to);
    }
}
