//! Frame timing.
//!
//! One `FrameClock` per render loop; `tick()` once per presented frame.
//! `RateMeter` turns the deltas into a periodic frames-per-second figure.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime, RateMeter};
