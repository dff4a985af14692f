//! # qa-core
//!
//! Foundation crate for QA status bookkeeping.
//! Defines the detector, task, event specie and QA bit types, errors,
//! config, constants and tracing setup. The other crates in the workspace
//! depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::QaConfig;
pub use errors::{ConfigError, QaError};
pub use types::{Detector, EventSpecie, QaBit, Task, TaskIndex};
