use winit::event::WindowEvent;

use crate::coords::Viewport;
use crate::device::Gpu;

use super::ctx::FrameCtx;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Callbacks driven by [`crate::window::Runtime`], in the order a window
/// lives through them: resize (at least once before the first frame),
/// events and frames interleaved, then teardown exactly once.
pub trait App {
    /// Sees every window event before the runtime acts on it.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// The surface already has the new size when this runs.
    fn on_resize(&mut self, gpu: &Gpu<'_>, viewport: Viewport) {
        let _ = (gpu, viewport);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Last chance to release GPU resources; the device is still alive.
    fn on_teardown(&mut self, gpu: &Gpu<'_>) {
        let _ = gpu;
    }
}
