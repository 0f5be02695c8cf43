//! Parametric geometry for the shape catalog.
//!
//! [`generate`] is total: every [`ShapeId`] maps to a builder and the density
//! is clamped before it reaches one. Output is CPU-side only; uploading is
//! the shading backend's job.

mod knot;
mod mobius;
mod polyhedron;
mod primitives;
mod sweep;

use glam::Vec3;
use vesper_pattern::ShapeId;

/// Lowest segment count any builder receives.
pub const MIN_DENSITY: u32 = 3;
/// Highest segment count any builder receives.
pub const MAX_DENSITY: u32 = 512;

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }

    /// Same attributes, advanced once per instance (one point sprite each).
    pub fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            step_mode: wgpu::VertexStepMode::Instance,
            ..Self::layout()
        }
    }
}

/// Triangle geometry: positions and normals of equal length, plus an
/// optional triangle-list index buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Option<Vec<u32>>,
}

impl Geometry {
    pub(crate) fn indexed() -> Self {
        Self {
            indices: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.positions.len() / 3,
        }
    }

    /// Appends a vertex and returns its index.
    pub(crate) fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        index
    }

    /// Appends an indexed triangle. Only valid on geometry built with
    /// [`Geometry::indexed`]; non-indexed builders push corners directly.
    pub(crate) fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        debug_assert!(self.indices.is_some(), "push_triangle on non-indexed geometry");
        if let Some(indices) = self.indices.as_mut() {
            indices.extend_from_slice(&[a, b, c]);
        }
    }

    /// Corner indices of every triangle, whether or not the geometry is
    /// indexed.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        let count = self.triangle_count() as u32;
        (0..count).map(move |t| match &self.indices {
            Some(indices) => {
                let i = t as usize * 3;
                [indices[i], indices[i + 1], indices[i + 2]]
            }
            None => [t * 3, t * 3 + 1, t * 3 + 2],
        })
    }

    /// Replaces the normals with ones derived from the faces.
    ///
    /// Indexed geometry gets area-weighted smooth normals; non-indexed
    /// geometry gets one flat normal per triangle.
    pub fn compute_vertex_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.positions.len()];
        for [a, b, c] in self.triangles() {
            let (pa, pb, pc) = (
                Vec3::from(self.positions[a as usize]),
                Vec3::from(self.positions[b as usize]),
                Vec3::from(self.positions[c as usize]),
            );
            let face = (pc - pb).cross(pa - pb);
            for i in [a, b, c] {
                acc[i as usize] += face;
            }
        }
        self.normals = acc
            .into_iter()
            .map(|n| n.normalize_or_zero().to_array())
            .collect();
    }

    /// Line-list indices for wireframe drawing: the three edges of every
    /// triangle. Shared edges are emitted once per triangle.
    pub fn wireframe_indices(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.triangle_count() * 6);
        for [a, b, c] in self.triangles() {
            out.extend_from_slice(&[a, b, b, c, c, a]);
        }
        out
    }

    /// Interleaves positions and normals for upload.
    pub fn vertices(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(&position, &normal)| MeshVertex { position, normal })
            .collect()
    }
}

/// Builds the geometry for `shape` at tessellation `density`.
pub fn generate(shape: ShapeId, density: u32) -> Geometry {
    let s = density.clamp(MIN_DENSITY, MAX_DENSITY);
    match shape {
        ShapeId::Sphere => primitives::sphere(1.0, s, s),
        ShapeId::Torus => knot::torus(1.0, 0.4, s, s * 2),
        ShapeId::TorusKnot => knot::torus_knot(1.0, 0.3, s * 4, s, 2, 3),
        ShapeId::Cinquefoil => knot::torus_knot(1.0, 0.25, s * 4, s, 2, 5),
        ShapeId::StarKnot => knot::torus_knot(1.0, 0.2, s * 4, s, 3, 7),
        ShapeId::Cube => primitives::cuboid(1.6, s),
        ShapeId::Cone => primitives::cylinder(0.0, 1.0, 2.0, s, s),
        ShapeId::Cylinder => primitives::cylinder(1.0, 1.0, 2.0, s, s),
        ShapeId::Octahedron => polyhedron::octahedron(s.min(8)),
        ShapeId::Icosahedron => polyhedron::icosahedron(s.min(8)),
        ShapeId::Dodecahedron => polyhedron::dodecahedron(s.min(6)),
        ShapeId::Tetrahedron => polyhedron::tetrahedron(s.min(8)),
        ShapeId::Capsule => sweep::capsule(0.7, 1.2, s.min(32), s),
        ShapeId::Crystal => polyhedron::crystal(s.min(8)),
        ShapeId::Spring => sweep::spring(0.15, (s * 3).max(64), (s / 4).max(8)),
        ShapeId::Mobius => mobius::mobius(s),
    }
}
