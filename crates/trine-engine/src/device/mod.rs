//! GPU device + surface management.
//!
//! This module is responsible for:
//! - the platform seam (`GpuPlatform`, `GpuDevice`, `GpuEncoder`, `GpuPass`)
//! - the wgpu implementation of that seam bound to a winit window
//! - surface format / alpha mode selection and surface error mapping

mod config;
mod desc;
mod error;
mod gpu;
mod platform;
mod surface;

#[cfg(test)]
pub(crate) mod stub;

pub use config::GpuInit;
pub use desc::{
    DrawCall, PassDesc, PipelineDesc, ShaderProgram, ShaderStage, StageDesc, SurfaceCaps,
    SurfaceSettings,
};
pub use error::{InitError, SurfaceErrorAction};
pub use gpu::{WgpuDevice, WgpuFrame, WgpuPlatform};
pub use platform::{GpuDevice, GpuEncoder, GpuPass, GpuPlatform, SurfaceFrame};
pub use surface::{choose_alpha_mode, choose_surface_format, surface_error_action};
