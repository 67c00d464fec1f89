//! Configuration module for bot settings
//!
//! This module provides:
//! - Configuration types (`AppConfig`, `GatewayConfig`)
//! - Environment loading (`load_config`)
//! - Interval constants with env overrides (`constants`)
//! - Logging configuration (`init_logging`)

pub mod constants;
mod loader;
pub mod logging;
mod types;

// Re-export types
pub use types::{AppConfig, ConfigError, GatewayConfig, QuoteSourceKind};

// Re-export loader functions
pub use loader::load_config;

// Re-export logging functions
pub use logging::init_logging;
