use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::time::FrameClock;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "vesper".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Requests an app makes during a frame; applied after `on_frame` returns.
/// Exiting goes through [`AppControl::Exit`] instead.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    title: Option<String>,
}

impl RuntimeCtx {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }
}

/// Single-window runtime.
///
/// Frames are chained: each presented frame requests the next redraw, so
/// FIFO presentation paces the animation. An occluded window stops the
/// chain and pauses the frame clock until it is visible again.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut driver = Driver::new(config, gpu_init, app);
        event_loop
            .run_app(&mut driver)
            .context("event loop exited with an error")?;

        // Some platforms never deliver `exiting`.
        driver.teardown();
        driver.error.map_or(Ok(()), Err)
    }
}

#[self_referencing]
struct Surface {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl Surface {
    fn open(event_loop: &ActiveEventLoop, config: &RuntimeConfig, init: GpuInit) -> Result<Self> {
        let attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.initial_size);
        let window = event_loop
            .create_window(attributes)
            .context("failed to create window")?;

        SurfaceTryBuilder {
            window,
            gpu_builder: |window| pollster::block_on(Gpu::new(window, init)),
        }
        .try_build()
        .context("GPU initialization failed")
    }

    fn request_redraw(&self) {
        self.with_window(|window| window.request_redraw());
    }
}

struct Driver<A> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,
    clock: FrameClock,
    surface: Option<Surface>,
    exiting: bool,
    error: Option<anyhow::Error>,
}

impl<A: App> Driver<A> {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            clock: FrameClock::new(),
            surface: None,
            exiting: false,
            error: None,
        }
    }

    /// Gives the app its teardown call and drops the window. Later calls
    /// are no-ops.
    fn teardown(&mut self) {
        self.exiting = true;
        if let Some(surface) = self.surface.take() {
            let app = &mut self.app;
            surface.with_gpu(|gpu| app.on_teardown(gpu));
            log::debug!("window closed");
        }
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.teardown();
        event_loop.exit();
    }

    fn resize(&mut self) {
        let Some(surface) = self.surface.as_mut() else { return };
        let app = &mut self.app;

        let viewport = Viewport::from_size(surface.with_window(|window| window.inner_size()));
        surface.with_gpu_mut(|gpu| {
            gpu.resize(viewport);
            app.on_resize(gpu, gpu.viewport());
        });
        surface.request_redraw();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(surface) = self.surface.as_mut() else { return };
        let app = &mut self.app;
        let time = self.clock.tick();
        let mut requests = RuntimeCtx::default();

        let control = surface.with_mut(|fields| {
            app.on_frame(&mut FrameCtx {
                window: fields.window,
                gpu: fields.gpu,
                time,
                runtime: &mut requests,
            })
        });

        if let Some(title) = requests.title.take() {
            surface.with_window(|window| window.set_title(&title));
        }
        if control == AppControl::Exit {
            self.close(event_loop);
            return;
        }
        if !self.clock.is_paused() {
            surface.request_redraw();
        }
    }
}

impl<A: App> ApplicationHandler for Driver<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() || self.exiting {
            return;
        }

        match Surface::open(event_loop, &self.config, self.gpu_init.clone()) {
            Ok(surface) => self.surface = Some(surface),
            Err(err) => {
                log::error!("{err:#}");
                self.error = Some(err);
                self.close(event_loop);
                return;
            }
        }

        // The first frame must already see the real surface size.
        self.resize();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if self.surface.is_none() {
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.close(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => self.close(event_loop),

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => self.resize(),

            WindowEvent::Occluded(true) => self.clock.pause(),
            WindowEvent::Occluded(false) => {
                self.clock.resume();
                if let Some(surface) = self.surface.as_ref() {
                    surface.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}
