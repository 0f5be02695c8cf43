use vesper_pattern::PatternConfig;

use crate::geometry;
use crate::shading::{shader_for, PatternUniforms, RenderMode, ViewUniforms};

use super::backend::ShadingBackend;
use super::object::{BuildKey, RenderObject, Renderable};

/// Per-tick rotation applied for each unit of rotation speed.
pub const ROTATION_STEP: f32 = 0.01;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SceneState {
    /// Nothing to draw: not built yet, or the style has no descriptor.
    Empty,
    Built,
    /// Torn down; later calls are ignored.
    Disposed,
}

/// Owns the one live [`RenderObject`] and decides when to replace it.
pub struct SceneManager<B: ShadingBackend> {
    object: Option<RenderObject<B>>,
    /// Key of the most recent build attempt, including ones that produced
    /// an empty scene.
    last_key: Option<BuildKey>,
    rotation: f32,
    generations: u64,
    disposed: bool,
}

impl<B: ShadingBackend> Default for SceneManager<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ShadingBackend> SceneManager<B> {
    pub fn new() -> Self {
        Self {
            object: None,
            last_key: None,
            rotation: 0.0,
            generations: 0,
            disposed: false,
        }
    }

    pub fn state(&self) -> SceneState {
        match (&self.object, self.disposed) {
            (_, true) => SceneState::Disposed,
            (Some(_), false) => SceneState::Built,
            (None, false) => SceneState::Empty,
        }
    }

    pub fn object(&self) -> Option<&RenderObject<B>> {
        self.object.as_ref()
    }

    /// Accumulated rotation around Y, in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Rebuilds if shape, density or style differ from the last build.
    /// Returns whether a build ran.
    pub fn ensure_built(&mut self, backend: &mut B, config: &PatternConfig) -> bool {
        if self.disposed {
            return false;
        }

        let key = BuildKey::of(config);
        if self.last_key == Some(key) {
            return false;
        }

        self.build(backend, key);
        true
    }

    /// Replaces the live object with one built for `key`.
    ///
    /// The previous object is released before anything new is allocated. A
    /// key whose style has no descriptor leaves the scene empty.
    pub fn build(&mut self, backend: &mut B, key: BuildKey) {
        if self.disposed {
            return;
        }

        self.last_key = Some(key);
        self.dispose_current(backend);

        let Some(def) = key.style.map(shader_for) else {
            log::warn!("no shading program for {key:?}; scene left empty");
            return;
        };

        let geo = geometry::generate(key.shape, key.density);
        let uploaded = backend.upload_geometry(&geo, def);
        let renderable = match def.mode {
            RenderMode::Mesh => Renderable::Mesh(uploaded),
            RenderMode::Points => Renderable::Points(uploaded),
        };
        let program = backend.compile_program(def);

        self.generations += 1;
        self.rotation = 0.0;
        self.object = Some(RenderObject {
            generation: self.generations,
            key,
            def,
            renderable,
            program,
        });

        log::info!(
            "built {} / {} at density {} ({} vertices)",
            key.shape,
            def.style,
            key.density,
            geo.vertex_count()
        );
    }

    /// Pushes this frame's uniforms into the live program, if any.
    ///
    /// `time` is elapsed seconds already scaled by the noise speed.
    pub fn sync_uniforms(
        &mut self,
        backend: &mut B,
        config: &PatternConfig,
        time: f32,
        view: &ViewUniforms,
    ) {
        let rotation = self.rotation;
        if let Some(object) = self.object.as_mut() {
            let uniforms = PatternUniforms::new(config, time, rotation, view);
            backend.set_uniforms(&mut object.program, &uniforms);
        }
    }

    /// Adds `speed * ROTATION_STEP`. The angle is left unbounded.
    pub fn advance_rotation(&mut self, speed: f32) {
        if self.object.is_some() {
            self.rotation += speed * ROTATION_STEP;
        }
    }

    /// Releases the live object. Safe to call more than once.
    pub fn teardown(&mut self, backend: &mut B) {
        if self.disposed {
            return;
        }
        self.dispose_current(backend);
        self.disposed = true;
    }

    fn dispose_current(&mut self, backend: &mut B) {
        if let Some(old) = self.object.take() {
            log::debug!("disposing generation {} ({:?})", old.generation, old.key);
            old.release(backend);
        }
    }
}
