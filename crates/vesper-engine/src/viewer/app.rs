use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::animation::AnimationLoop;
use crate::camera::OrbitCamera;
use crate::coords::Viewport;
use crate::core::{App, AppControl, FrameCtx};
use crate::device::Gpu;
use crate::render::{Canvas, Snapshot, WgpuBackend};
use crate::shading::ViewUniforms;
use crate::shared::{ConfigCell, SnapshotRequest};

use super::keys::{edit, key_action, KeyAction};

/// Pixel-scroll distance counted as one wheel line.
const PIXELS_PER_LINE: f32 = 50.0;

/// GPU resources, created once the surface exists.
struct GpuResources {
    backend: WgpuBackend,
    canvas: Canvas,
}

impl GpuResources {
    fn new(gpu: &Gpu<'_>) -> Self {
        Self {
            backend: WgpuBackend::new(gpu.device(), gpu.queue()),
            canvas: Canvas::new(gpu.device(), gpu.surface_format(), gpu.viewport()),
        }
    }
}

#[derive(Default)]
struct Pointer {
    position: Option<(f64, f64)>,
    dragging: bool,
}

type SnapshotHandler = Box<dyn FnMut(Snapshot)>;

/// [`App`] that renders whatever the shared [`ConfigCell`] currently holds.
///
/// Orbit with the left mouse button, zoom with the wheel. Keys: Left/Right
/// presets, Up/Down shapes, PageUp/PageDown styles, R reset, S snapshot,
/// Escape quit.
pub struct PatternViewer {
    config: ConfigCell,
    snapshots: SnapshotRequest,
    on_snapshot: Option<SnapshotHandler>,

    animation: AnimationLoop<WgpuBackend>,
    camera: OrbitCamera,
    viewport: Viewport,
    pointer: Pointer,
    preset: Option<usize>,
    title: String,

    gpu: Option<GpuResources>,
}

impl PatternViewer {
    pub fn new(config: ConfigCell, snapshots: SnapshotRequest) -> Self {
        Self {
            animation: AnimationLoop::new(config.clone()),
            config,
            snapshots,
            on_snapshot: None,
            camera: OrbitCamera::new(1.0),
            viewport: Viewport::default(),
            pointer: Pointer::default(),
            preset: None,
            title: String::new(),
            gpu: None,
        }
    }

    /// Receives every captured snapshot. Without a handler snapshots are
    /// only logged.
    pub fn with_snapshot_handler(mut self, handler: impl FnMut(Snapshot) + 'static) -> Self {
        self.on_snapshot = Some(Box::new(handler));
        self
    }

    fn on_key(&mut self, action: KeyAction) -> AppControl {
        match action {
            KeyAction::Quit => return AppControl::Exit,
            KeyAction::Snapshot => self.snapshots.request(),
            _ => {
                let preset = &mut self.preset;
                self.config
                    .update(|current| edit(action, current, preset).unwrap_or_else(|| current.clone()));
            }
        }
        AppControl::Continue
    }

    fn on_pointer_moved(&mut self, x: f64, y: f64) {
        if let (true, Some((px, py))) = (self.pointer.dragging, self.pointer.position) {
            self.camera
                .drag((x - px) as f32, (y - py) as f32, self.viewport.height as f32);
        }
        self.pointer.position = Some((x, y));
    }

    fn view_uniforms(&self) -> ViewUniforms {
        ViewUniforms {
            view_proj: self.camera.view_projection(),
            view: self.camera.view(),
            camera_position: self.camera.position(),
            viewport: self.viewport,
        }
    }

    fn title_for(&self) -> String {
        let config = self.config.load();
        let style = config.style.map_or("none", |s| s.label());
        format!("vesper · {} · {}", config.shape.label(), style)
    }

    fn capture(&mut self, gpu: &Gpu<'_>) {
        let Some(res) = self.gpu.as_ref() else { return };
        match res.canvas.read_pixels(gpu.device(), gpu.queue()) {
            Ok(snapshot) => {
                log::info!("captured {}x{} snapshot", snapshot.width, snapshot.height);
                if let Some(handler) = self.on_snapshot.as_mut() {
                    handler(snapshot);
                }
            }
            Err(err) => log::warn!("snapshot failed: {err:#}"),
        }
    }
}

impl App for PatternViewer {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return AppControl::Continue;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(action) = key_action(code) {
                        return self.on_key(action);
                    }
                }
            }

            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                self.pointer.dragging = *state == ElementState::Pressed;
            }

            WindowEvent::CursorMoved { position, .. } => self.on_pointer_moved(position.x, position.y),

            WindowEvent::CursorLeft { .. } => {
                self.pointer.dragging = false;
                self.pointer.position = None;
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_LINE,
                };
                self.camera.zoom(lines);
            }

            _ => {}
        }
        AppControl::Continue
    }

    fn on_resize(&mut self, gpu: &Gpu<'_>, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_aspect_ratio(viewport.aspect());
        match self.gpu.as_mut() {
            Some(res) => res.canvas.resize(gpu.device(), viewport),
            None => self.gpu = Some(GpuResources::new(gpu)),
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.gpu.is_none() {
            self.on_resize(ctx.gpu, ctx.gpu.viewport());
        }

        self.camera.update();
        let view = self.view_uniforms();

        let Some(res) = self.gpu.as_mut() else { return AppControl::Continue };
        let Some(frame) = self.animation.tick(&mut res.backend, ctx.time.elapsed, &view) else {
            return AppControl::Exit;
        };

        let animation = &self.animation;
        let control = ctx.present(|target| {
            {
                let mut pass = res.canvas.begin_scene_pass(target.encoder, frame.clear_color);
                if let Some(object) = animation.scene().object() {
                    res.backend.draw(&mut pass, object);
                }
            }
            res.canvas.blit(target.encoder, target.view);
        });

        if self.snapshots.take() {
            self.capture(ctx.gpu);
        }

        let title = self.title_for();
        if frame.rebuilt || title != self.title {
            ctx.runtime.set_title(title.clone());
            self.title = title;
        }

        control
    }

    fn on_teardown(&mut self, _gpu: &Gpu<'_>) {
        if let Some(mut res) = self.gpu.take() {
            self.animation.cancel(&mut res.backend);
        }
        log::info!("viewer closed");
    }
}
