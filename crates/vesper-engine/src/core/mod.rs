//! The contract between the window runtime and the application: a handful
//! of callbacks plus the per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
