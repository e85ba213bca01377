//! `bird-in-flight`: opens a window and draws the figure.

mod app;
mod sink;

use anyhow::Result;
use winit::dpi::LogicalSize;

use flight_curve::{CurveRenderer, SAMPLE_COUNT};
use flight_engine::device::GpuInit;
use flight_engine::logging::{init_logging, LoggingConfig};
use flight_engine::window::{Runtime, RuntimeConfig};

use crate::app::BirdApp;

const WINDOW_TITLE: &str = "Bird in Flight";
const WINDOW_WIDTH: f64 = 800.0;
const WINDOW_HEIGHT: f64 = 600.0;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: WINDOW_TITLE.to_string(),
        initial_size: LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        centered: true,
    };

    log::info!("drawing {SAMPLE_COUNT} segments");
    Runtime::run(config, GpuInit::default(), BirdApp::new(CurveRenderer::new(SAMPLE_COUNT)))
}
