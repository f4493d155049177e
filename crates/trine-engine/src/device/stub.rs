//! Recording platform for exercising the renderer without a GPU.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::desc::{DrawCall, PassDesc, PipelineDesc, ShaderProgram, ShaderStage, SurfaceCaps, SurfaceSettings};
use super::error::SurfaceErrorAction;
use super::platform::{GpuDevice, GpuEncoder, GpuPass, GpuPlatform, SurfaceFrame};
use super::surface::surface_error_action;

/// Snapshot of a created pipeline.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StubPipeline {
    pub label: String,
    pub vertex: (ShaderStage, String),
    pub fragment: (ShaderStage, String),
    pub targets: Vec<Option<wgpu::ColorTargetState>>,
    pub primitive: wgpu::PrimitiveState,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    RequestAdapter,
    RequestDevice,
    ConfigureSurface(SurfaceSettings),
    CreateShaderModule(ShaderStage),
    CreatePipeline(StubPipeline),
    AcquireFrame,
    Recover(SurfaceErrorAction),
    CreateEncoder,
    BeginPass(wgpu::Operations<wgpu::Color>),
    SetPipeline,
    Draw(DrawCall),
    EndPass,
    Finish,
    Submit,
    Present,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.0.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub(crate) struct StubPlatform {
    pub log: CallLog,
    pub has_adapter: bool,
    pub has_device: bool,
    pub caps: SurfaceCaps,
    /// Errors returned by upcoming acquisitions, in order.
    pub frame_errors: VecDeque<wgpu::SurfaceError>,
}

impl StubPlatform {
    pub fn new() -> Self {
        Self {
            log: CallLog::default(),
            has_adapter: true,
            has_device: true,
            caps: SurfaceCaps {
                formats: vec![wgpu::TextureFormat::Bgra8Unorm, wgpu::TextureFormat::Bgra8UnormSrgb],
                alpha_modes: vec![wgpu::CompositeAlphaMode::Opaque],
            },
            frame_errors: VecDeque::new(),
        }
    }
}

pub(crate) struct StubAdapter;

pub(crate) struct StubFrame(());

impl SurfaceFrame for StubFrame {
    type View = ();

    fn view(&self) -> &() {
        &self.0
    }
}

impl GpuPlatform for StubPlatform {
    type Adapter = StubAdapter;
    type Device = StubDevice;
    type Frame = StubFrame;

    async fn request_adapter(&mut self) -> Option<StubAdapter> {
        self.log.push(Call::RequestAdapter);
        self.has_adapter.then_some(StubAdapter)
    }

    async fn request_device(&mut self, _adapter: &StubAdapter) -> Option<StubDevice> {
        self.log.push(Call::RequestDevice);
        self.has_device.then(|| StubDevice {
            log: self.log.clone(),
        })
    }

    fn surface_caps(&self, _adapter: &StubAdapter) -> SurfaceCaps {
        self.caps.clone()
    }

    fn configure_surface(&mut self, _device: &StubDevice, settings: &SurfaceSettings) {
        self.log.push(Call::ConfigureSurface(*settings));
    }

    fn current_frame(&mut self) -> Result<StubFrame, wgpu::SurfaceError> {
        self.log.push(Call::AcquireFrame);
        match self.frame_errors.pop_front() {
            Some(err) => Err(err),
            None => Ok(StubFrame(())),
        }
    }

    fn present(&mut self, _frame: StubFrame) {
        self.log.push(Call::Present);
    }

    fn recover(&mut self, _device: &StubDevice, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        let action = surface_error_action(&err);
        self.log.push(Call::Recover(action));
        action
    }
}

pub(crate) struct StubDevice {
    log: CallLog,
}

pub(crate) struct StubModule {
    stage: ShaderStage,
}

pub(crate) struct StubCommandBuffer;

impl GpuDevice for StubDevice {
    type ShaderModule = StubModule;
    type Pipeline = StubPipeline;
    type View = ();
    type CommandBuffer = StubCommandBuffer;
    type Encoder = StubEncoder;

    fn create_shader_module(&self, program: &ShaderProgram) -> StubModule {
        self.log.push(Call::CreateShaderModule(program.stage));
        StubModule {
            stage: program.stage,
        }
    }

    fn create_render_pipeline(&self, desc: &PipelineDesc<'_, StubModule>) -> StubPipeline {
        let pipeline = StubPipeline {
            label: desc.label.to_string(),
            vertex: (desc.vertex.module.stage, desc.vertex.entry_point.to_string()),
            fragment: (desc.fragment.module.stage, desc.fragment.entry_point.to_string()),
            targets: desc.color_targets().to_vec(),
            primitive: desc.primitive_state(),
        };
        self.log.push(Call::CreatePipeline(pipeline.clone()));
        pipeline
    }

    fn create_command_encoder(&self, _label: &str) -> StubEncoder {
        self.log.push(Call::CreateEncoder);
        StubEncoder {
            log: self.log.clone(),
        }
    }

    fn submit(&self, _buffer: StubCommandBuffer) {
        self.log.push(Call::Submit);
    }
}

pub(crate) struct StubEncoder {
    log: CallLog,
}

impl GpuEncoder<StubDevice> for StubEncoder {
    type Pass<'a>
        = StubPass<'a>
    where
        Self: 'a;

    fn begin_render_pass(&mut self, desc: &PassDesc<'_, ()>) -> StubPass<'_> {
        self.log.push(Call::BeginPass(desc.color_ops()));
        StubPass { log: &self.log }
    }

    fn finish(self) -> StubCommandBuffer {
        self.log.push(Call::Finish);
        StubCommandBuffer
    }
}

pub(crate) struct StubPass<'a> {
    log: &'a CallLog,
}

impl GpuPass<StubDevice> for StubPass<'_> {
    fn set_pipeline(&mut self, _pipeline: &StubPipeline) {
        self.log.push(Call::SetPipeline);
    }

    fn draw(&mut self, call: DrawCall) {
        self.log.push(Call::Draw(call));
    }

    fn end(self) {
        self.log.push(Call::EndPass);
    }
}
