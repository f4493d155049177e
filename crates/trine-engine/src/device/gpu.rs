use anyhow::{Context, Result};
use winit::window::Window;

use super::config::GpuInit;
use super::desc::{DrawCall, PassDesc, PipelineDesc, ShaderProgram, SurfaceCaps, SurfaceSettings};
use super::error::SurfaceErrorAction;
use super::platform::{GpuDevice, GpuEncoder, GpuPass, GpuPlatform, SurfaceFrame};
use super::surface::surface_error_action;

/// wgpu platform bound to a window.
///
/// Owns the instance and the surface; the surface lifetime is tied to the
/// window via `'w`, so the window must outlive this value.
pub struct WgpuPlatform<'w> {
    window: &'w Window,

    /// wgpu instance used to create the adapter and surface.
    instance: wgpu::Instance,

    /// Surface bound to the window.
    surface: wgpu::Surface<'w>,

    init: GpuInit,

    /// Last applied configuration; kept to reconfigure after `Lost`/`Outdated`.
    config: Option<wgpu::SurfaceConfiguration>,
}

impl<'w> WgpuPlatform<'w> {
    /// Creates the instance and the window surface.
    ///
    /// Adapter/device acquisition happens later through [`GpuPlatform`].
    pub fn new(window: &'w Window, init: &GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: init.backends,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        Ok(Self {
            window,
            instance,
            surface,
            init: init.clone(),
            config: None,
        })
    }
}

impl<'w> GpuPlatform for WgpuPlatform<'w> {
    type Adapter = wgpu::Adapter;
    type Device = WgpuDevice;
    type Frame = WgpuFrame;

    async fn request_adapter(&mut self) -> Option<wgpu::Adapter> {
        let adapter = self
            .instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: self.init.power_preference,
                compatible_surface: Some(&self.surface),
                force_fallback_adapter: false,
            })
            .await
            .inspect_err(|e| log::warn!("adapter request failed: {e}"))
            .ok()?;

        let info = adapter.get_info();
        log::info!("adapter: {} ({:?})", info.name, info.backend);
        Some(adapter)
    }

    async fn request_device(&mut self, adapter: &wgpu::Adapter) -> Option<WgpuDevice> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("trine device"),
                required_features: self.init.required_features,
                required_limits: self.init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .inspect_err(|e| log::warn!("device request failed: {e}"))
            .ok()?;

        Some(WgpuDevice { device, queue })
    }

    fn surface_caps(&self, adapter: &wgpu::Adapter) -> SurfaceCaps {
        let caps = self.surface.get_capabilities(adapter);
        SurfaceCaps {
            formats: caps.formats,
            alpha_modes: caps.alpha_modes,
        }
    }

    fn configure_surface(&mut self, device: &WgpuDevice, settings: &SurfaceSettings) {
        let size = self.window.inner_size();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: settings.format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: settings.present_mode,
            alpha_mode: settings.alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: settings.desired_maximum_frame_latency,
        };

        self.surface.configure(&device.device, &config);
        self.config = Some(config);
    }

    fn current_frame(&mut self) -> Result<WgpuFrame, wgpu::SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        Ok(WgpuFrame {
            surface_texture,
            view,
        })
    }

    fn present(&mut self, frame: WgpuFrame) {
        self.window.pre_present_notify();
        drop(frame.view);
        frame.surface_texture.present();
    }

    fn recover(&mut self, device: &WgpuDevice, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        let action = surface_error_action(&err);
        if action == SurfaceErrorAction::Reconfigured {
            if let Some(config) = &self.config {
                self.surface.configure(&device.device, config);
            }
        }
        action
    }
}

/// Represents a single acquired frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next one.
pub struct WgpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
}

impl SurfaceFrame for WgpuFrame {
    type View = wgpu::TextureView;

    fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}

/// Logical device and its command queue.
pub struct WgpuDevice {
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl WgpuDevice {
    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}

impl GpuDevice for WgpuDevice {
    type ShaderModule = wgpu::ShaderModule;
    type Pipeline = wgpu::RenderPipeline;
    type View = wgpu::TextureView;
    type CommandBuffer = wgpu::CommandBuffer;
    type Encoder = wgpu::CommandEncoder;

    fn create_shader_module(&self, program: &ShaderProgram) -> wgpu::ShaderModule {
        self.device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(program.label),
                source: wgpu::ShaderSource::Wgsl(program.code.into()),
            })
    }

    fn create_render_pipeline(
        &self,
        desc: &PipelineDesc<'_, wgpu::ShaderModule>,
    ) -> wgpu::RenderPipeline {
        let targets = desc.color_targets();

        self.device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(desc.label),
                // Implicit layout derived from the shaders.
                layout: None,

                vertex: wgpu::VertexState {
                    module: desc.vertex.module,
                    entry_point: Some(desc.vertex.entry_point),
                    compilation_options: Default::default(),
                    buffers: &[],
                },

                fragment: Some(wgpu::FragmentState {
                    module: desc.fragment.module,
                    entry_point: Some(desc.fragment.entry_point),
                    compilation_options: Default::default(),
                    targets: &targets,
                }),

                primitive: desc.primitive_state(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
    }

    fn create_command_encoder(&self, label: &str) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some(label) })
    }

    fn submit(&self, buffer: wgpu::CommandBuffer) {
        self.queue.submit(std::iter::once(buffer));
    }
}

impl GpuEncoder<WgpuDevice> for wgpu::CommandEncoder {
    type Pass<'a>
        = wgpu::RenderPass<'a>
    where
        Self: 'a;

    fn begin_render_pass(&mut self, desc: &PassDesc<'_, wgpu::TextureView>) -> wgpu::RenderPass<'_> {
        wgpu::CommandEncoder::begin_render_pass(
            self,
            &wgpu::RenderPassDescriptor {
                label: Some(desc.label),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: desc.view,
                    resolve_target: None,
                    ops: desc.color_ops(),
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            },
        )
    }

    fn finish(self) -> wgpu::CommandBuffer {
        wgpu::CommandEncoder::finish(self)
    }
}

impl GpuPass<WgpuDevice> for wgpu::RenderPass<'_> {
    fn set_pipeline(&mut self, pipeline: &wgpu::RenderPipeline) {
        wgpu::RenderPass::set_pipeline(self, pipeline);
    }

    fn draw(&mut self, call: DrawCall) {
        wgpu::RenderPass::draw(self, call.vertices(), call.instances());
    }

    fn end(self) {
        // The pass is recorded into its encoder when dropped.
        drop(self);
    }
}
