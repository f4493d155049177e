//! Triangle renderer and its frame loop.
//!
//! The renderer only talks to the GPU through the `device` seam, so the
//! whole call sequence runs against any `GpuPlatform`.

mod frame_loop;
mod pipeline;
mod renderer;

pub use frame_loop::{FrameScheduler, LoopControl, run_frame};
pub use pipeline::{CLEAR_COLOR, FRAGMENT_SHADER, TRIANGLE_DRAW, VERTEX_SHADER, triangle_pipeline};
pub use renderer::{FrameOutcome, Renderer};
