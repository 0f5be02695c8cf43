//! Perspective orbit camera.

mod orbit;

pub use orbit::OrbitCamera;
