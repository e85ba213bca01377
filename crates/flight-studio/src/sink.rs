use flight_curve::{LineSink, PixelPoint};
use flight_engine::coords::Vec2;
use flight_engine::paint::Color;
use flight_engine::scene::DrawList;

/// Stroke applied to every line pushed through a [`DrawListSink`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

/// [`LineSink`] that records curve segments into a frame's [`DrawList`].
///
/// Integer pixel coordinates address pixel centers, so each endpoint is
/// shifted by half a pixel.
pub struct DrawListSink<'a> {
    list: &'a mut DrawList,
    stroke: Stroke,
    antialias: bool,
}

impl<'a> DrawListSink<'a> {
    pub fn new(list: &'a mut DrawList, stroke: Stroke) -> Self {
        Self { list, stroke, antialias: false }
    }
}

impl LineSink for DrawListSink<'_> {
    fn set_antialiasing(&mut self, enabled: bool) {
        self.antialias = enabled;
    }

    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint) {
        self.list.push_line(
            pixel_center(from),
            pixel_center(to),
            self.stroke.width,
            self.stroke.color,
            self.antialias,
        );
    }
}

#[inline]
fn pixel_center(p: PixelPoint) -> Vec2 {
    Vec2::new(p.x as f32 + 0.5, p.y as f32 + 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_curve::CurveRenderer;
    use flight_engine::scene::DrawCmd;

    const STROKE: Stroke = Stroke { width: 1.0, color: Color::BLACK };

    #[test]
    fn records_lines_at_pixel_centers() {
        let mut list = DrawList::new();
        let mut sink = DrawListSink::new(&mut list, STROKE);
        sink.draw_line(PixelPoint::new(0, 0), PixelPoint::new(10, -3));

        let DrawCmd::Line(line) = list.iter().next().unwrap();
        assert_eq!(line.from, Vec2::new(0.5, 0.5));
        assert_eq!(line.to, Vec2::new(10.5, -2.5));
        assert_eq!(line.width, 1.0);
        assert_eq!(line.color, Color::BLACK);
        assert!(!line.antialias);
    }

    #[test]
    fn antialiasing_applies_to_later_lines() {
        let mut list = DrawList::new();
        let mut sink = DrawListSink::new(&mut list, STROKE);
        sink.draw_line(PixelPoint::new(0, 0), PixelPoint::new(1, 1));
        sink.set_antialiasing(true);
        sink.draw_line(PixelPoint::new(0, 0), PixelPoint::new(1, 1));

        let aa: Vec<bool> = list
            .iter()
            .map(|cmd| {
                let DrawCmd::Line(line) = cmd;
                line.antialias
            })
            .collect();
        assert_eq!(aa, vec![false, true]);
    }

    #[test]
    fn full_figure_lands_in_the_draw_list() {
        let mut list = DrawList::new();
        let drawn = CurveRenderer::default().render(800, 600, &mut DrawListSink::new(&mut list, STROKE));

        assert_eq!(drawn, 2000);
        assert_eq!(list.len(), 2000);
        assert!(list.iter().all(|cmd| {
            let DrawCmd::Line(line) = cmd;
            line.antialias
        }));
    }
}
