//! GPU rendering.
//!
//! [`WgpuBackend`] owns the pattern's buffers and pipelines; [`Canvas`] owns
//! the retained offscreen target they draw into and copies it to the surface.

mod backend;
mod canvas;
mod target;

pub use backend::{GpuGeometry, GpuProgram, WgpuBackend};
pub use canvas::{Canvas, Snapshot, CANVAS_FORMAT, DEPTH_FORMAT, SAMPLE_COUNT};
pub use target::RenderTarget;
