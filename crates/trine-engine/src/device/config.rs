/// Initialization parameters for the GPU layer.
///
/// The same value is handed to the platform (adapter/device selection) and to
/// the renderer (surface configuration).
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends wgpu may pick from.
    pub backends: wgpu::Backends,

    /// Adapter power preference.
    pub power_preference: wgpu::PowerPreference,

    /// Prefer an sRGB surface format over the surface's first reported format.
    ///
    /// Off by default: wgpu lists the preferred format first.
    pub prefer_srgb: bool,

    /// Present mode. FIFO presents once per display refresh.
    pub present_mode: wgpu::PresentMode,

    /// Requested alpha compositing mode.
    ///
    /// If the surface does not support it, the first supported mode is used.
    pub alpha_mode: wgpu::CompositeAlphaMode,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface (a hint).
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Opaque,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
