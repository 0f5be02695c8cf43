use vesper_pattern::{PatternConfig, Rgb};

use crate::scene::{SceneManager, ShadingBackend};
use crate::shading::ViewUniforms;
use crate::shared::ConfigCell;

/// What the caller needs to draw the frame a tick prepared.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameInfo {
    pub clear_color: Rgb,
    /// Whether the render object was rebuilt on this tick.
    pub rebuilt: bool,
}

/// Drives one [`SceneManager`] from a [`ConfigCell`].
///
/// Scheduling belongs to the window runtime; this type only does the work
/// of a single tick, and refuses to do it after [`AnimationLoop::cancel`].
pub struct AnimationLoop<B: ShadingBackend> {
    config: ConfigCell,
    scene: SceneManager<B>,
    cancelled: bool,
}

impl<B: ShadingBackend> AnimationLoop<B> {
    pub fn new(config: ConfigCell) -> Self {
        Self {
            config,
            scene: SceneManager::new(),
            cancelled: false,
        }
    }

    pub fn scene(&self) -> &SceneManager<B> {
        &self.scene
    }

    pub fn config(&self) -> &ConfigCell {
        &self.config
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Runs one tick against the newest configuration.
    ///
    /// `elapsed` is seconds of visible running time since the loop
    /// started, not wall-clock time: the frame clock stops while the window
    /// is occluded, so noise resumes from where it paused. Returns `None`
    /// once cancelled.
    pub fn tick(&mut self, backend: &mut B, elapsed: f32, view: &ViewUniforms) -> Option<FrameInfo> {
        if self.cancelled {
            return None;
        }

        let snapshot = self.config.load();
        let config: &PatternConfig = &snapshot;

        let rebuilt = self.scene.ensure_built(backend, config);
        self.scene.advance_rotation(config.rotation_speed);
        self.scene
            .sync_uniforms(backend, config, elapsed * config.noise_speed, view);

        Some(FrameInfo {
            clear_color: config.background_color,
            rebuilt,
        })
    }

    /// Stops further ticks and releases the scene. Idempotent.
    pub fn cancel(&mut self, backend: &mut B) {
        if self.cancelled {
            return;
        }
        self.cancelled = true;
        self.scene.teardown(backend);
        log::debug!("animation loop cancelled");
    }
}
