//! Error handling for QA bookkeeping.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod qa_error;

pub use config_error::ConfigError;
pub use qa_error::QaError;
