//! Core synchronization logic
//!
//! This module provides:
//! - Presentation formatters (`format_name`, `format_status`)
//! - The identity updater with per-target failure isolation
//! - The two concrete update cycles (name, status)
//! - The dual-cadence scheduler

pub mod cycles;
pub mod format;
pub mod scheduler;
pub mod updater;

pub use cycles::{NameUpdateCycle, StatusUpdateCycle};
pub use format::{format_name, format_status};
pub use scheduler::{CycleError, CycleReport, CycleTask, Scheduler};
pub use updater::IdentityUpdater;
