//! Structured log events for QA status changes.
//!
//! Each function emits a `tracing` event with an `event` field and
//! structured context.

use crate::errors::QaError;
use crate::types::{Detector, EventSpecie, QaBit};

/// Log a QA bit being raised.
pub fn bit_raised(detector: Detector, stage: &str, specie: EventSpecie, bit: QaBit) {
    tracing::debug!(
        event = "bit_raised",
        detector = %detector,
        stage = %stage,
        specie = %specie,
        bit = %bit,
        "QA bit raised"
    );
}

/// Log a QA bit being cleared.
pub fn bit_cleared(detector: Detector, stage: &str, specie: EventSpecie, bit: QaBit) {
    tracing::debug!(
        event = "bit_cleared",
        detector = %detector,
        stage = %stage,
        specie = %specie,
        bit = %bit,
        "QA bit cleared"
    );
}

/// Log a request rejected because one of its values is out of range.
pub fn range_rejected(operation: &str, error: &QaError) {
    tracing::warn!(
        event = "range_rejected",
        operation = %operation,
        code = error.error_code(),
        error = %error,
        "QA status request rejected"
    );
}

/// Log a check stage that did not run.
pub fn stage_skipped(detector: Detector, stage: &str, reason: &str) {
    tracing::info!(
        event = "stage_skipped",
        detector = %detector,
        stage = %stage,
        reason = %reason,
        "QA check skipped"
    );
}

/// Log a FATAL bit found by an aggregate check.
pub fn fatal_detected(detector: Detector, specie: EventSpecie) {
    tracing::error!(
        event = "fatal_detected",
        detector = %detector,
        specie = %specie,
        "QA status is FATAL"
    );
}

/// Log one line of a human-readable status dump.
pub fn status_line(line: &str) {
    tracing::info!(event = "status_line", "{line}");
}
