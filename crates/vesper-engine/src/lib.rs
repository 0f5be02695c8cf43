//! Vesper engine crate.
//!
//! Turns a [`vesper_pattern::PatternConfig`] into an animated GPU scene:
//! procedural geometry, the shading styles, the scene lifecycle, and the
//! winit/wgpu runtime that drives them.
//!
//! The lifecycle layers (`scene`, `animation`) are generic over
//! [`scene::ShadingBackend`] and never touch wgpu directly; `render` holds
//! the wgpu implementation.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod camera;

pub mod geometry;
pub mod shading;
pub mod scene;
pub mod animation;
pub mod render;
pub mod shared;
pub mod viewer;
