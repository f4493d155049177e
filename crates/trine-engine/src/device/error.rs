use std::fmt;

/// Fatal GPU initialization failure.
///
/// None of these are retried; they end startup.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InitError {
    /// The platform could not supply a GPU adapter.
    NoAdapter,
    /// The adapter could not supply a logical device.
    NoDevice,
    /// The surface reported no usable texture format for the adapter.
    NoSurfaceFormat,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            InitError::NoAdapter => "no GPU adapter found",
            InitError::NoDevice => "no GPU device found",
            InitError::NoSurfaceFormat => "surface supports no texture format on this adapter",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for InitError {}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate.
    Fatal,
}
