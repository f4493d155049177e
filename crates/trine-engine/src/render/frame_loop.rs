use crate::device::{GpuDevice, GpuPlatform, SurfaceErrorAction};

use super::renderer::{FrameOutcome, Renderer};

/// Arranges for the next frame to run on the next display refresh.
pub trait FrameScheduler {
    fn schedule_next(&mut self);
}

/// Control directive returned after each frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Renders one frame and schedules the next one unless the surface failed fatally.
pub fn run_frame<D, P, S>(renderer: &Renderer<D>, platform: &mut P, scheduler: &mut S) -> LoopControl
where
    D: GpuDevice,
    P: GpuPlatform<Device = D>,
    S: FrameScheduler + ?Sized,
{
    match renderer.render_frame(platform) {
        FrameOutcome::Skipped(SurfaceErrorAction::Fatal) => {
            log::error!("surface reported a fatal error; stopping the frame loop");
            LoopControl::Exit
        }
        FrameOutcome::Submitted | FrameOutcome::Skipped(_) => {
            scheduler.schedule_next();
            LoopControl::Continue
        }
    }
}
