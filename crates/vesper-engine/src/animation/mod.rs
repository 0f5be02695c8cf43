//! The per-frame tick: newest configuration in, scene updated, clear color
//! out.

mod tick;

pub use tick::{AnimationLoop, FrameInfo};
