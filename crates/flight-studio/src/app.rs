use anyhow::Result;
use flight_curve::CurveRenderer;
use flight_engine::core::{App, AppControl, FrameCtx};
use flight_engine::paint::Color;
use flight_engine::render::shapes::line::LineRenderer;
use flight_engine::scene::DrawList;

use crate::sink::{DrawListSink, Stroke};

/// Paints the figure: white background, thin black anti-aliased strokes.
pub struct BirdApp {
    curve: CurveRenderer,
    lines: LineRenderer,
    background: Color,
    stroke: Stroke,
}

impl BirdApp {
    pub fn new(curve: CurveRenderer) -> Self {
        Self {
            curve,
            lines: LineRenderer::new(),
            background: Color::WHITE,
            stroke: Stroke { width: 1.0, color: Color::BLACK },
        }
    }

    /// Records the whole figure for a `width`×`height` viewport.
    ///
    /// A fresh list per call: no geometry survives between redraws.
    fn record(&self, width: u32, height: u32) -> DrawList {
        let mut list = DrawList::with_capacity(self.curve.samples() as usize);
        let mut sink = DrawListSink::new(&mut list, self.stroke);
        self.curve.render(width, height, &mut sink);
        list
    }
}

impl App for BirdApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        let (width, height) = ctx.window.viewport().whole_pixels();
        let list = self.record(width, height);
        log::debug!(
            "frame {}: {} segments at {width}x{height}",
            ctx.frame_index,
            list.len()
        );

        let lines = &mut self.lines;
        ctx.render(self.background, |rctx, target| {
            lines.render(rctx, target, &list);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_curve::SAMPLE_COUNT;

    #[test]
    fn records_one_line_per_sample() {
        let app = BirdApp::new(CurveRenderer::default());
        assert_eq!(app.record(800, 600).len(), SAMPLE_COUNT as usize);
    }

    #[test]
    fn minimized_window_records_nothing() {
        let app = BirdApp::new(CurveRenderer::default());
        assert!(app.record(0, 0).is_empty());
        assert!(app.record(800, 0).is_empty());
    }

    #[test]
    fn recording_is_stateless() {
        let app = BirdApp::new(CurveRenderer::new(50));
        let first: Vec<_> = app.record(640, 480).iter().cloned().collect();
        let _ = app.record(1280, 960);
        let again: Vec<_> = app.record(640, 480).iter().cloned().collect();
        assert_eq!(first, again);
    }
}
