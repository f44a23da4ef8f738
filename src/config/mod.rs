//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, signal names)
//! - The library `Config` and the CLI options that map onto it

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Config, LogFormat, LogLevel, OutputFormat};
