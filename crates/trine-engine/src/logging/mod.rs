//! Logging utilities.
//!
//! Centralizes logger initialization behind the `log` facade.

mod init;

pub use init::{DEFAULT_FILTER, LoggingConfig, init_logging};
