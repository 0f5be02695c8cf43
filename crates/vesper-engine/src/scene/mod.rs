//! Scene lifecycle: the single render object and when it gets rebuilt.
//!
//! The scene only talks to the GPU through [`ShadingBackend`], so the
//! rebuild and disposal rules are tested here against a counting backend.

mod backend;
mod manager;
mod object;

pub use backend::ShadingBackend;
pub use manager::{SceneManager, SceneState, ROTATION_STEP};
pub use object::{BuildKey, RenderObject, Renderable};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::geometry::Geometry;
    use crate::shading::{PatternUniforms, ShaderDef};

    use super::ShadingBackend;

    /// Records every call; handles are plain counters.
    #[derive(Default)]
    pub(crate) struct CountingBackend {
        pub uploads: usize,
        pub compiles: usize,
        pub uniform_writes: usize,
        pub released_geometries: usize,
        pub released_programs: usize,
        pub last_uniforms: Option<PatternUniforms>,
    }

    impl CountingBackend {
        pub(crate) fn live_geometries(&self) -> usize {
            self.uploads - self.released_geometries
        }
    }

    #[derive(Debug)]
    pub(crate) struct FakeGeometry {
        pub vertices: usize,
    }

    #[derive(Debug)]
    pub(crate) struct FakeProgram {
        pub def: &'static ShaderDef,
    }

    impl ShadingBackend for CountingBackend {
        type Geometry = FakeGeometry;
        type Program = FakeProgram;

        fn upload_geometry(&mut self, geometry: &Geometry, _def: &ShaderDef) -> FakeGeometry {
            self.uploads += 1;
            FakeGeometry { vertices: geometry.vertex_count() }
        }

        fn compile_program(&mut self, def: &'static ShaderDef) -> FakeProgram {
            self.compiles += 1;
            FakeProgram { def }
        }

        fn set_uniforms(&mut self, _program: &mut FakeProgram, uniforms: &PatternUniforms) {
            self.uniform_writes += 1;
            self.last_uniforms = Some(*uniforms);
        }

        fn release_geometry(&mut self, _geometry: FakeGeometry) {
            self.released_geometries += 1;
        }

        fn release_program(&mut self, _program: FakeProgram) {
            self.released_programs += 1;
        }
    }
}
