use crate::geometry::Geometry;
use crate::shading::{PatternUniforms, ShaderDef};

/// The GPU capabilities the scene needs, kept abstract so the lifecycle can
/// run against something other than wgpu.
///
/// Handles are owned by the caller and given back on release; a backend
/// never keeps its own references to them.
pub trait ShadingBackend {
    /// Device-resident vertex and index data.
    type Geometry;
    /// A compiled program with its uniform storage.
    type Program;

    /// Uploads `geometry` in the form `def` draws it (points, triangles, or
    /// edges).
    fn upload_geometry(&mut self, geometry: &Geometry, def: &ShaderDef) -> Self::Geometry;

    fn compile_program(&mut self, def: &'static ShaderDef) -> Self::Program;

    fn set_uniforms(&mut self, program: &mut Self::Program, uniforms: &PatternUniforms);

    fn release_geometry(&mut self, geometry: Self::Geometry);

    fn release_program(&mut self, program: Self::Program);
}
