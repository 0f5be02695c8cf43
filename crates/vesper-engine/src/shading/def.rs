use vesper_pattern::StyleId;

/// Whether a style draws a continuous surface or point sprites.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderMode {
    Mesh,
    Points,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlendMode {
    /// Source-over when transparent, replace when opaque.
    Normal,
    /// `src * alpha + dst`.
    Additive,
}

/// Which faces are drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    /// Back faces are culled.
    Front,
    Double,
}

/// Immutable description of one shading style.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShaderDef {
    pub style: StyleId,
    /// Complete WGSL module with a `vs_main` entry point.
    pub vertex: &'static str,
    /// Complete WGSL module with an `fs_main` entry point.
    pub fragment: &'static str,
    pub mode: RenderMode,
    pub wireframe: bool,
    pub transparent: bool,
    pub depth_write: bool,
    pub blend: BlendMode,
    pub side: Side,
}

impl ShaderDef {
    /// Opaque, single-sided, depth-writing surface.
    pub(crate) const fn mesh(style: StyleId, vertex: &'static str, fragment: &'static str) -> Self {
        Self {
            style,
            vertex,
            fragment,
            mode: RenderMode::Mesh,
            wireframe: false,
            transparent: false,
            depth_write: true,
            blend: BlendMode::Normal,
            side: Side::Front,
        }
    }

    pub(crate) const fn points(self) -> Self {
        Self { mode: RenderMode::Points, ..self }
    }

    pub(crate) const fn double_sided(self) -> Self {
        Self { side: Side::Double, ..self }
    }

    pub(crate) const fn transparent(self) -> Self {
        Self { transparent: true, ..self }
    }

    pub(crate) const fn no_depth_write(self) -> Self {
        Self { depth_write: false, ..self }
    }

    pub(crate) const fn additive(self) -> Self {
        Self { blend: BlendMode::Additive, ..self }
    }

    pub(crate) const fn wireframe(self) -> Self {
        Self { wireframe: true, ..self }
    }

    /// Whether the draw needs blending at all.
    pub fn blends(&self) -> bool {
        self.transparent || self.blend == BlendMode::Additive
    }

    /// Whether the back faces need a separate pass drawn before the front
    /// faces, so a translucent surface composites its far side first.
    pub fn split_back_faces(&self) -> bool {
        self.transparent && self.side == Side::Double && self.mode == RenderMode::Mesh
    }
}
