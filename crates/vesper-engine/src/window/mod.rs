//! winit event loop, the window, and the GPU surface bound to it.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
