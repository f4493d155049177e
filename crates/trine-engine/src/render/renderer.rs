use crate::device::{
    GpuDevice, GpuEncoder, GpuInit, GpuPass, GpuPlatform, InitError, PassDesc, SurfaceErrorAction,
    SurfaceFrame, SurfaceSettings, choose_alpha_mode, choose_surface_format,
};

use super::pipeline::{
    CLEAR_COLOR, FRAGMENT_SHADER, TRIANGLE_DRAW, VERTEX_SHADER, triangle_pipeline,
};

/// Result of one `render_frame` call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// Commands were submitted and the frame presented.
    Submitted,
    /// No frame could be acquired; nothing was encoded.
    Skipped(SurfaceErrorAction),
}

/// Fully initialized triangle renderer.
///
/// Only [`Renderer::initialize`] creates one, so a value of this type always
/// owns a device, a configured surface and the pipeline.
pub struct Renderer<D: GpuDevice> {
    device: D,
    pipeline: D::Pipeline,
    surface: SurfaceSettings,
}

impl<D: GpuDevice> Renderer<D> {
    /// Acquires adapter and device, configures the surface and builds the
    /// pipeline. The adapter is released before returning.
    pub async fn initialize<P>(platform: &mut P, init: &GpuInit) -> Result<Self, InitError>
    where
        P: GpuPlatform<Device = D>,
    {
        let adapter = platform
            .request_adapter()
            .await
            .ok_or(InitError::NoAdapter)?;

        let device = platform
            .request_device(&adapter)
            .await
            .ok_or(InitError::NoDevice)?;

        let caps = platform.surface_caps(&adapter);
        drop(adapter);

        let format =
            choose_surface_format(&caps, init.prefer_srgb).ok_or(InitError::NoSurfaceFormat)?;

        let surface = SurfaceSettings {
            format,
            alpha_mode: choose_alpha_mode(&caps, init.alpha_mode),
            present_mode: init.present_mode,
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        platform.configure_surface(&device, &surface);

        let vertex = device.create_shader_module(&VERTEX_SHADER);
        let fragment = device.create_shader_module(&FRAGMENT_SHADER);
        let pipeline = device.create_render_pipeline(&triangle_pipeline(&vertex, &fragment, format));

        log::info!(
            "renderer ready: format {:?}, alpha {:?}, present {:?}",
            surface.format,
            surface.alpha_mode,
            surface.present_mode
        );

        Ok(Self {
            device,
            pipeline,
            surface,
        })
    }

    /// Surface configuration chosen during initialization.
    pub fn surface_settings(&self) -> &SurfaceSettings {
        &self.surface
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Clears the current surface texture and draws the triangle.
    pub fn render_frame<P>(&self, platform: &mut P) -> FrameOutcome
    where
        P: GpuPlatform<Device = D>,
    {
        let frame = match platform.current_frame() {
            Ok(frame) => frame,
            Err(err) => {
                log::debug!("surface acquisition failed: {err}");
                return FrameOutcome::Skipped(platform.recover(&self.device, err));
            }
        };

        let mut encoder = self.device.create_command_encoder("trine frame encoder");
        {
            let mut pass = encoder.begin_render_pass(&PassDesc {
                label: "trine triangle pass",
                view: frame.view(),
                clear: CLEAR_COLOR,
            });
            pass.set_pipeline(&self.pipeline);
            pass.draw(TRIANGLE_DRAW);
            pass.end();
        }

        self.device.submit(encoder.finish());
        platform.present(frame);

        FrameOutcome::Submitted
    }
}
