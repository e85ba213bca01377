use crate::point::Segment;
use crate::sample::sample;
use crate::sink::LineSink;
use crate::viewport::PixelViewport;
use crate::SAMPLE_COUNT;

/// Produces the figure's segments for a given viewport.
///
/// The renderer holds only its sample count. Every call recomputes all
/// segments from `(width, height, samples)`; nothing is cached between calls.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CurveRenderer {
    samples: u32,
}

impl CurveRenderer {
    #[inline]
    pub const fn new(samples: u32) -> Self {
        Self { samples }
    }

    #[inline]
    pub const fn samples(self) -> u32 {
        self.samples
    }

    /// Lazily yields one segment per sample index `1..=samples`, in order.
    ///
    /// Index 0 is never evaluated; the last index closes the loop at `t = 2π`.
    pub fn segments(self, viewport: PixelViewport) -> impl Iterator<Item = Segment> {
        let n = self.samples;
        (1..=n).map(move |i| {
            let pair = sample(i, n);
            Segment::new(viewport.map(pair.a), viewport.map(pair.b))
        })
    }

    /// Issues every segment to `sink` with anti-aliasing requested.
    ///
    /// Returns the number of lines drawn. A zero `width` or `height` skips the
    /// pass entirely and returns 0.
    pub fn render<S>(self, width: u32, height: u32, sink: &mut S) -> usize
    where
        S: LineSink + ?Sized,
    {
        let Some(viewport) = PixelViewport::new(width, height) else {
            log::debug!("skipping curve pass for empty viewport {width}x{height}");
            return 0;
        };

        sink.set_antialiasing(true);

        let mut drawn = 0;
        for seg in self.segments(viewport) {
            sink.draw_line(seg.from, seg.to);
            drawn += 1;
        }

        log::trace!("curve pass: {drawn} segments at {width}x{height}");
        drawn
    }
}

impl Default for CurveRenderer {
    fn default() -> Self {
        Self::new(SAMPLE_COUNT)
    }
}
