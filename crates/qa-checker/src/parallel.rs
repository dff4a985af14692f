//! Fan-out/fan-in checking.
//!
//! Each detector is checked on a rayon worker against a private
//! [`QaStatus`]; the partial tables are merged on the calling thread.

use qa_core::{Detector, EventSpecie};
use qa_status::QaStatus;
use rayon::prelude::*;

use crate::checker::{QaChecker, RunSummary};

impl QaChecker {
    /// Run every registered check in parallel, one worker table per
    /// detector, and return the merged table with its summary.
    pub fn run_parallel(&self, species: &[EventSpecie]) -> (QaStatus, RunSummary) {
        let partials: Vec<(QaStatus, RunSummary)> = Detector::ALL
            .par_iter()
            .filter(|&&detector| self.has_check(detector))
            .map(|&detector| {
                let mut local = QaStatus::new();
                let summary = self.run_detector(&mut local, detector, species);
                (local, summary)
            })
            .collect();

        let mut merged = QaStatus::new();
        let mut summary = RunSummary::default();
        for (local, partial) in &partials {
            merged.merge(local);
            summary.absorb(*partial);
        }
        summary.fatal = merged.check_fatal();

        tracing::info!(
            workers = partials.len(),
            checked = summary.checked,
            skipped = summary.skipped,
            fatal = summary.fatal,
            "parallel QA checks merged"
        );
        (merged, summary)
    }
}
