//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the window, and drives the renderer once
//! per redraw.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
