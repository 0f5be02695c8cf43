use winit::window::Window;

use crate::device::{Gpu, SurfaceErrorAction};
use crate::render::RenderTarget;
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Everything an [`App`](super::App) gets for one frame.
///
/// `'a` spans the callback; `'w` is the window borrow held by the GPU.
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl FrameCtx<'_, '_> {
    /// Acquires the surface, lets `draw` record the whole frame, presents.
    ///
    /// A failed acquire skips `draw`; only a fatal surface error returns
    /// [`AppControl::Exit`].
    pub fn present<F>(&mut self, draw: F) -> AppControl
    where
        F: FnOnce(&mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.acquire() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.recover(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    _ => AppControl::Continue,
                };
            }
        };

        draw(&mut RenderTarget {
            encoder: &mut frame.encoder,
            view: &frame.view,
            viewport: self.gpu.viewport(),
        });

        self.window.pre_present_notify();
        self.gpu.present(frame);
        AppControl::Continue
    }
}
