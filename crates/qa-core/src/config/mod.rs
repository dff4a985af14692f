//! Configuration for QA bookkeeping.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod defaults;
pub mod files_config;
pub mod logging_config;
pub mod qa_config;
pub mod thresholds_config;

pub use files_config::{FilesConfig, RefStorage};
pub use logging_config::LoggingConfig;
pub use qa_config::QaConfig;
pub use thresholds_config::ThresholdsConfig;
