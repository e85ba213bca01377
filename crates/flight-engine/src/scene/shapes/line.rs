use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Straight stroke between two points (logical pixels).
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
    /// Feather the stroke edges over one physical pixel.
    pub antialias: bool,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, width: f32, color: Color, antialias: bool) -> Self {
        Self { from, to, width, color, antialias }
    }

    /// Lines that cannot produce any coverage.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0)
            || !self.from.is_finite()
            || !self.to.is_finite()
            || !self.color.is_finite()
    }
}

impl DrawList {
    /// Records a line draw command.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color, antialias: bool) {
        self.push(DrawCmd::Line(LineCmd::new(from, to, width, color, antialias)));
    }
}
