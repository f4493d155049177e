use super::desc::{DrawCall, PassDesc, PipelineDesc, ShaderProgram, SurfaceCaps, SurfaceSettings};
use super::error::SurfaceErrorAction;

/// Entry point to a GPU and its presentable surface.
///
/// Adapter and device acquisition are asynchronous and yield `None` when the
/// platform cannot supply the object.
#[allow(async_fn_in_trait)]
pub trait GpuPlatform {
    type Adapter;
    type Device: GpuDevice;
    type Frame: SurfaceFrame<View = <Self::Device as GpuDevice>::View>;

    async fn request_adapter(&mut self) -> Option<Self::Adapter>;

    async fn request_device(&mut self, adapter: &Self::Adapter) -> Option<Self::Device>;

    /// Surface capabilities when driven by `adapter`.
    fn surface_caps(&self, adapter: &Self::Adapter) -> SurfaceCaps;

    fn configure_surface(&mut self, device: &Self::Device, settings: &SurfaceSettings);

    /// Acquires the surface's current backing texture.
    fn current_frame(&mut self) -> Result<Self::Frame, wgpu::SurfaceError>;

    /// Presents a frame whose commands were submitted.
    fn present(&mut self, frame: Self::Frame);

    /// Maps a failed acquisition to an action, reconfiguring when possible.
    fn recover(&mut self, device: &Self::Device, err: wgpu::SurfaceError) -> SurfaceErrorAction;
}

/// Acquired surface texture.
pub trait SurfaceFrame {
    type View;

    fn view(&self) -> &Self::View;
}

/// Logical device plus its command queue.
pub trait GpuDevice {
    type ShaderModule;
    type Pipeline;
    type View;
    type CommandBuffer;
    type Encoder: GpuEncoder<Self>;

    fn create_shader_module(&self, program: &ShaderProgram) -> Self::ShaderModule;

    fn create_render_pipeline(&self, desc: &PipelineDesc<'_, Self::ShaderModule>)
    -> Self::Pipeline;

    fn create_command_encoder(&self, label: &str) -> Self::Encoder;

    fn submit(&self, buffer: Self::CommandBuffer);
}

/// Host-side command recording.
pub trait GpuEncoder<D: GpuDevice + ?Sized> {
    type Pass<'a>: GpuPass<D>
    where
        Self: 'a;

    fn begin_render_pass(&mut self, desc: &PassDesc<'_, D::View>) -> Self::Pass<'_>;

    fn finish(self) -> D::CommandBuffer;
}

/// Commands recorded inside one render pass.
pub trait GpuPass<D: GpuDevice + ?Sized> {
    fn set_pipeline(&mut self, pipeline: &D::Pipeline);

    fn draw(&mut self, call: DrawCall);

    fn end(self);
}
