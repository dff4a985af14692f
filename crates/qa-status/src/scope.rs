//! Borrowed (detector, stage) context for status updates.
//!
//! Replaces a "current detector / current task" held inside the table: the
//! context lives exactly as long as the borrow.

use qa_core::{Detector, EventSpecie, QaBit};

use crate::layout::Stage;
use crate::registry::QaStatus;

/// Mutable view of one detector's stage across all event species.
#[derive(Debug)]
pub struct StageScope<'a> {
    status: &'a mut QaStatus,
    detector: Detector,
    stage: Stage,
}

impl<'a> StageScope<'a> {
    pub(crate) fn new(status: &'a mut QaStatus, detector: Detector, stage: Stage) -> Self {
        Self {
            status,
            detector,
            stage,
        }
    }

    pub fn detector(&self) -> Detector {
        self.detector
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn set(&mut self, bit: QaBit, specie: EventSpecie) -> &mut Self {
        self.status.set(self.detector, self.stage, specie, bit);
        self
    }

    pub fn unset(&mut self, bit: QaBit, specie: EventSpecie) -> &mut Self {
        self.status.unset(self.detector, self.stage, specie, bit);
        self
    }

    pub fn is_set(&self, bit: QaBit, specie: EventSpecie) -> bool {
        self.status.is_set(self.detector, self.stage, specie, bit)
    }

    /// Raised bits of this stage under `specie`, least severe first.
    pub fn raised(&self, specie: EventSpecie) -> Vec<QaBit> {
        self.status
            .status(self.detector, specie)
            .raised_bits(self.stage)
            .collect()
    }
}
