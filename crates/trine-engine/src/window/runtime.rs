use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::device::{GpuInit, WgpuDevice, WgpuPlatform};
use crate::render::{FrameScheduler, LoopControl, Renderer, run_frame};
use crate::time::{FrameClock, RateMeter};

/// Frames averaged per frame-rate log line.
const RATE_WINDOW: u32 = 600;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "trine".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and renders until it is closed.
    ///
    /// GPU initialization failures end the loop and are returned.
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = AppState::new(config, gpu_init);
        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct SurfaceEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    platform: WgpuPlatform<'this>,
}

struct WindowEntry {
    surface: SurfaceEntry,
    renderer: Renderer<WgpuDevice>,
    clock: FrameClock,
    meter: RateMeter,
}

/// Schedules the next frame through winit's redraw request.
///
/// With FIFO presentation the request is serviced once per display refresh.
struct RedrawScheduler<'a> {
    window: &'a Window,
}

impl FrameScheduler for RedrawScheduler<'_> {
    fn schedule_next(&mut self) {
        self.window.request_redraw();
    }
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    window: Option<WindowEntry>,
    failure: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit) -> Self {
        Self {
            config,
            gpu_init,
            window: None,
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        event_loop.exit();
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(false);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = &self.gpu_init;
        let mut surface = SurfaceEntryTryBuilder {
            window,
            platform_builder: |w| WgpuPlatform::new(w, gpu_init),
        }
        .try_build()?;

        let renderer = surface
            .with_platform_mut(|platform| pollster::block_on(Renderer::initialize(platform, gpu_init)))
            .context("GPU initialization failed")?;

        Ok(WindowEntry {
            surface,
            renderer,
            clock: FrameClock::new(),
            meter: RateMeter::new(RATE_WINDOW),
        })
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(entry) = self.window.as_mut() else {
            return;
        };
        let WindowEntry {
            surface,
            renderer,
            clock,
            meter,
        } = entry;

        let control = surface.with_mut(|fields| {
            let mut scheduler = RedrawScheduler {
                window: fields.window,
            };
            run_frame(renderer, fields.platform, &mut scheduler)
        });

        let ft = clock.tick();
        if let Some(fps) = meter.record(ft.dt) {
            log::debug!("frame {}: {fps:.1} fps", ft.frame_index);
        }

        if control == LoopControl::Exit {
            self.fail(
                event_loop,
                anyhow::anyhow!("surface reported an unrecoverable error"),
            );
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.surface.with_window(|w| w.request_redraw());
                self.window = Some(entry);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}
