use anyhow::{anyhow, Result};
use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Returns the logical window size as `(width, height)` in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        let phys = self.window.inner_size();
        let scale = self.window.scale_factor();
        let logi: winit::dpi::LogicalSize<f64> = phys.to_logical(scale);
        (logi.width as f32, logi.height as f32)
    }

    /// Returns the logical viewport of the window's drawable area.
    pub fn viewport(&self) -> Viewport {
        let (w, h) = self.logical_size();
        Viewport::new(w, h)
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    /// Redraw counter for this window, starting at 0.
    pub frame_index: u64,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`] and
    /// [`RenderTarget`], then presents the frame.
    ///
    /// Frames for a zero-sized (e.g. minimized) window are skipped without
    /// calling `draw`. A transient surface error skips the frame and schedules
    /// another redraw; a fatal one is returned as an error.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> Result<AppControl>
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let viewport = self.window.viewport();
        if !self.gpu.is_presentable() || !viewport.is_valid() {
            log::trace!("frame {} skipped: empty drawable", self.frame_index);
            return Ok(AppControl::Continue);
        }

        let scale_factor = self.window.window.scale_factor() as f32;

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let reason = err.to_string();
                return match recovery_for(self.gpu.handle_surface_error(err)) {
                    Recovery::Retry => {
                        // Nothing else wakes a waiting event loop.
                        self.window.window.request_redraw();
                        Ok(AppControl::Continue)
                    }
                    Recovery::Abort => Err(anyhow!("surface acquisition failed: {reason}")),
                };
            }
        };

        // Clear pass — dropped before the encoder is moved into submit().
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("flight clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r as f64,
                            g: clear.g as f64,
                            b: clear.b as f64,
                            a: clear.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            viewport,
            scale_factor,
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        Ok(AppControl::Continue)
    }
}

/// How a frame that failed to acquire its surface texture is followed up.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Recovery {
    /// Request another redraw.
    Retry,
    /// Stop the runtime with an error.
    Abort,
}

fn recovery_for(action: SurfaceErrorAction) -> Recovery {
    match action {
        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => Recovery::Retry,
        SurfaceErrorAction::Fatal => Recovery::Abort,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconfigured_surface_retries() {
        assert_eq!(recovery_for(SurfaceErrorAction::Reconfigured), Recovery::Retry);
    }

    #[test]
    fn skipped_frame_retries() {
        // On-demand redraw: a dropped frame must schedule its replacement.
        assert_eq!(recovery_for(SurfaceErrorAction::SkipFrame), Recovery::Retry);
    }

    #[test]
    fn fatal_error_aborts() {
        assert_eq!(recovery_for(SurfaceErrorAction::Fatal), Recovery::Abort);
    }
}
