//! Coordinate helpers.

mod viewport;

pub use viewport::Viewport;
