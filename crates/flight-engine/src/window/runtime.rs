use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Place the window in the middle of its monitor when it is created.
    pub centered: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "flight".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            centered: true,
        }
    }
}

/// Entry point for the runtime.
///
/// Drives a single window. Redraws are on demand: the window is painted when it
/// first appears and again after every resize or scale-factor change. Closing
/// the window ends the event loop.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.finish()
    }
}

#[self_referencing]
struct WindowEntry {
    frame_index: u64,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    exit_requested: bool,
    /// First fatal error, reported from `Runtime::run` after the loop ends.
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            exit_requested: false,
            failure: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        self.record_failure(err);
        self.request_exit(event_loop);
    }

    fn record_failure(&mut self, err: anyhow::Error) {
        log::error!("{err:#}");
        self.exit_requested = true;
        if self.failure.is_none() {
            self.failure = Some(err);
        }
    }

    /// Folds the outcome of a frame into runtime state. Returns `true` when the
    /// event loop should stop.
    fn settle_frame(&mut self, outcome: Result<AppControl>) -> bool {
        match outcome {
            Ok(AppControl::Continue) => false,
            Ok(AppControl::Exit) => {
                self.exit_requested = true;
                true
            }
            Err(err) => {
                self.record_failure(err.context("frame rendering failed"));
                true
            }
        }
    }

    /// Result reported from `Runtime::run` once the loop has ended.
    fn finish(&mut self) -> Result<()> {
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        if self.config.centered {
            center_on_monitor(&window);
        }

        log::info!(
            "window {:?} created ({}x{} logical)",
            self.config.title,
            self.config.initial_size.width,
            self.config.initial_size.height,
        );

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            frame_index: 0,
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed for window")
            },
        }
        .try_build()
    }

    fn draw_frame(&mut self, event_loop: &ActiveEventLoop) {
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else { return };

        let outcome = entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx { window: fields.window },
                gpu: fields.gpu,
                frame_index: *fields.frame_index,
            };

            let outcome = app.on_frame(&mut ctx);
            *fields.frame_index = fields.frame_index.wrapping_add(1);
            outcome
        });

        if self.settle_frame(outcome) {
            event_loop.exit();
        }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let Some(entry) = self.window.as_mut() else { return };
        entry.with_gpu_mut(|gpu| gpu.resize(new_size));
        entry.with_window(|w| w.request_redraw());
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.window = Some(entry);
            }
            Err(e) => self.fail(event_loop, e.context("failed to create initial window")),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            return;
        }

        let is_ours = self
            .window
            .as_ref()
            .is_some_and(|entry| entry.with_window(|w| w.id()) == window_id);
        if !is_ours {
            return;
        }

        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        // Runtime-managed window lifecycle / resize / redraw handling.
        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.window = None;
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                log::debug!("resized to {}x{} physical", new_size.width, new_size.height);
                self.resize(new_size);
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(new_size) = self.window.as_ref().map(|e| e.with_window(|w| w.inner_size())) {
                    self.resize(new_size);
                }
            }

            WindowEvent::RedrawRequested => self.draw_frame(event_loop),

            _ => {}
        }
    }
}

/// Moves `window` to the middle of the monitor it opened on.
///
/// Platforms without window positioning (Wayland) ignore the request.
fn center_on_monitor(window: &Window) {
    let Some(monitor) = window.current_monitor() else {
        log::debug!("no monitor reported; leaving window placement to the platform");
        return;
    };

    let position = centered_position(monitor.position(), monitor.size(), window.outer_size());
    window.set_outer_position(position);
}

fn centered_position(
    monitor_origin: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window_size: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let offset = |monitor: u32, window: u32| ((i64::from(monitor) - i64::from(window)) / 2) as i32;
    PhysicalPosition::new(
        monitor_origin.x + offset(monitor_size.width, window_size.width).max(0),
        monitor_origin.y + offset(monitor_size.height, window_size.height).max(0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Idle;

    impl CoreApp for Idle {
        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
            Ok(AppControl::Continue)
        }
    }

    fn state() -> AppState<Idle> {
        AppState::new(RuntimeConfig::default(), GpuInit::default(), Idle)
    }

    // ── frame outcomes ────────────────────────────────────────────────────

    #[test]
    fn continue_keeps_running() {
        let mut s = state();
        assert!(!s.settle_frame(Ok(AppControl::Continue)));
        assert!(!s.exit_requested);
        assert!(s.finish().is_ok());
    }

    #[test]
    fn exit_stops_cleanly() {
        let mut s = state();
        assert!(s.settle_frame(Ok(AppControl::Exit)));
        assert!(s.exit_requested);
        assert!(s.finish().is_ok());
    }

    #[test]
    fn frame_error_is_reported_from_run() {
        let mut s = state();
        assert!(s.settle_frame(Err(anyhow::anyhow!("surface acquisition failed: out of memory"))));
        assert!(s.exit_requested);

        let err = s.finish().unwrap_err();
        assert!(format!("{err:#}").contains("out of memory"), "{err:#}");
    }

    #[test]
    fn first_failure_wins() {
        let mut s = state();
        s.settle_frame(Err(anyhow::anyhow!("first")));
        s.settle_frame(Err(anyhow::anyhow!("second")));
        let err = s.finish().unwrap_err();
        assert!(format!("{err:#}").contains("first"), "{err:#}");
    }

    // ── placement ─────────────────────────────────────────────────────────

    #[test]
    fn centers_on_primary_monitor() {
        let p = centered_position(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(1920, 1080),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(p, PhysicalPosition::new(560, 240));
    }

    #[test]
    fn respects_monitor_origin() {
        let p = centered_position(
            PhysicalPosition::new(1920, -200),
            PhysicalSize::new(1280, 1024),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(p, PhysicalPosition::new(1920 + 240, -200 + 212));
    }

    #[test]
    fn oversized_window_pins_to_monitor_origin() {
        let p = centered_position(
            PhysicalPosition::new(100, 50),
            PhysicalSize::new(640, 480),
            PhysicalSize::new(800, 600),
        );
        assert_eq!(p, PhysicalPosition::new(100, 50));
    }

    #[test]
    fn default_config_is_centered_800x600() {
        let c = RuntimeConfig::default();
        assert!(c.centered);
        assert_eq!(c.initial_size, LogicalSize::new(800.0, 600.0));
    }
}
