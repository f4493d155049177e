//! Trine engine crate.
//!
//! Draws one fixed triangle through wgpu: device acquisition, a single
//! pipeline, and a clear-and-draw pass per display refresh.

pub mod device;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
