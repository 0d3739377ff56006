//! Logging infrastructure for the storefront.
//!
//! This crate provides:
//! - `LogLevel` / `LogFormat` - Output settings
//! - `LogConfig` - Subscriber configuration
//! - `init` - Process-wide `tracing` subscriber installation

mod logging;

pub use logging::*;
