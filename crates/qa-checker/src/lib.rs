//! # qa-checker
//!
//! Drives detector-specific quality checks and records their verdicts in a
//! [`QaStatus`](qa_status::QaStatus) table. Checks run either sequentially
//! against one table or fanned out per detector and merged.

pub mod check;
pub mod checker;
pub mod errors;
pub mod parallel;
pub mod thresholds;

pub use check::DetectorCheck;
pub use checker::{CheckOutcome, QaChecker, RunSummary, SkipReason};
pub use errors::CheckError;
pub use thresholds::Thresholds;
