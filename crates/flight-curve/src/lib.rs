//! Sampling and pixel mapping for the **bird in flight** figure.
//!
//! The figure is made of `N` straight segments. Segment `i` joins a point on
//! curve A to a point on curve B, both evaluated at the same sample index:
//!
//! ```text
//! t  = 2π·i/N
//! A  = ( 3·sin(t)³,   -cos(8π·i/N)     )
//! B  = ( 1.5·sin(t)³, -0.5·cos(6π·i/N) )
//! ```
//!
//! This crate does no drawing itself. It hands integer pixel segments to a
//! [`LineSink`], which the host (a window runtime, a test, an offscreen
//! buffer) implements.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`point`] | `MathPoint`, `PixelPoint`, `PointPair`, `Segment` |
//! | [`sample`] | closed-form curve evaluation |
//! | [`viewport`] | `PixelViewport`, math → pixel mapping |
//! | [`sink`] | `LineSink` drawing surface contract |
//! | [`renderer`] | `CurveRenderer` |
//!
//! # Quick start
//!
//! ```rust
//! use flight_curve::{CurveRenderer, Segment};
//!
//! let mut segments: Vec<Segment> = Vec::new();
//! let drawn = CurveRenderer::default().render(800, 600, &mut segments);
//!
//! assert_eq!(drawn, 2000);
//! assert_eq!(segments.len(), 2000);
//! ```

pub mod point;
pub mod renderer;
pub mod sample;
pub mod sink;
pub mod viewport;

pub use point::{MathPoint, PixelPoint, PointPair, Segment};
pub use renderer::CurveRenderer;
pub use sample::sample;
pub use sink::LineSink;
pub use viewport::PixelViewport;

/// Number of segments in the figure.
pub const SAMPLE_COUNT: u32 = 2000;
