//! GPU device and window surface.

mod gpu;

pub use gpu::{Gpu, GpuInit, SurfaceErrorAction, SurfaceFrame};
