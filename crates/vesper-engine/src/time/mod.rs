//! Animation time.
//!
//! The runtime owns one `FrameClock` per window and ticks it once per frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
