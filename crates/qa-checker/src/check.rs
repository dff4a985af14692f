//! The [`DetectorCheck`] plug-in trait.

use qa_core::{Detector, EventSpecie, TaskIndex};

use crate::errors::CheckError;

/// A detector-specific quality check.
///
/// `check` returns a quality value; [`Thresholds`](crate::Thresholds) maps
/// it onto a QA bit. Lower is worse. Implementations own whatever data they
/// compare against reference.
pub trait DetectorCheck: Send + Sync {
    /// Detector this check reports for.
    fn detector(&self) -> Detector;

    /// Task indices this check can evaluate.
    fn targets(&self) -> &[TaskIndex] {
        TaskIndex::ALL
    }

    /// Quality value for `index` under `specie`.
    fn check(&self, index: TaskIndex, specie: EventSpecie) -> Result<f64, CheckError>;
}
