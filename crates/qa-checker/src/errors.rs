//! Checker errors.

use qa_core::{Detector, TaskIndex};

/// Errors raised while running a detector check.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckError {
    #[error("{detector} check for {index} failed: {reason}")]
    Failed {
        detector: Detector,
        index: TaskIndex,
        reason: String,
    },

    #[error("{detector} check for {index} returned a non-finite value: {value}")]
    NonFiniteValue {
        detector: Detector,
        index: TaskIndex,
        value: f64,
    },
}

impl CheckError {
    /// Short stable label (snake_case) for use in logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Failed { .. } => "check_failed",
            Self::NonFiniteValue { .. } => "check_non_finite_value",
        }
    }
}
