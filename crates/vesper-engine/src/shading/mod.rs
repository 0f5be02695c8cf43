//! Shading programs.
//!
//! Every style is a [`ShaderDef`]: a pair of WGSL modules plus the fixed
//! pipeline flags that decide how its output is composited. The WGSL is
//! assembled at compile time from the shared pieces in `shaders/`:
//!
//! - vertex: `common` + `noise` + `displace` + `mesh` or `points`
//! - fragment: `common` + `color` (+ `noise` or `voronoi`) + the style body
//!
//! Nothing here touches the GPU; see `render::WgpuBackend`.

mod def;
mod registry;
mod uniforms;

pub use def::{BlendMode, RenderMode, ShaderDef, Side};
pub use registry::{lookup, shader_for};
pub use uniforms::{PatternUniforms, ViewUniforms};
