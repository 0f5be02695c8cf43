use vesper_pattern::{PatternConfig, ShapeId, StyleId};

use crate::shading::ShaderDef;

use super::backend::ShadingBackend;

/// The configuration fields that decide what gets built. Anything outside
/// this key only reaches the GPU as uniforms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BuildKey {
    pub shape: ShapeId,
    pub density: u32,
    pub style: Option<StyleId>,
}

impl BuildKey {
    pub fn of(config: &PatternConfig) -> Self {
        Self {
            shape: config.shape,
            density: config.density,
            style: config.style,
        }
    }
}

/// Uploaded geometry, tagged with how it is drawn.
#[derive(Debug)]
pub enum Renderable<G> {
    Mesh(G),
    Points(G),
}

impl<G> Renderable<G> {
    pub fn geometry(&self) -> &G {
        match self {
            Renderable::Mesh(g) | Renderable::Points(g) => g,
        }
    }

    pub(crate) fn into_geometry(self) -> G {
        match self {
            Renderable::Mesh(g) | Renderable::Points(g) => g,
        }
    }
}

/// The single live drawable: geometry, program, and what it was built from.
pub struct RenderObject<B: ShadingBackend> {
    /// Distinct for every build, so callers can tell a rebuild from an update.
    pub(crate) generation: u64,
    pub(crate) key: BuildKey,
    pub(crate) def: &'static ShaderDef,
    pub(crate) renderable: Renderable<B::Geometry>,
    pub(crate) program: B::Program,
}

impl<B: ShadingBackend> RenderObject<B> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn key(&self) -> BuildKey {
        self.key
    }

    pub fn def(&self) -> &'static ShaderDef {
        self.def
    }

    pub fn renderable(&self) -> &Renderable<B::Geometry> {
        &self.renderable
    }

    pub fn program(&self) -> &B::Program {
        &self.program
    }

    /// Hands both resources back to `backend`.
    pub(crate) fn release(self, backend: &mut B) {
        backend.release_geometry(self.renderable.into_geometry());
        backend.release_program(self.program);
    }
}
