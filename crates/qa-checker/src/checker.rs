//! Runs registered detector checks and records their verdicts.

use std::fmt;

use qa_core::tracing::events;
use qa_core::{Detector, EventSpecie, QaBit, QaConfig, QaError, TaskIndex};
use qa_status::{QaStatus, Stage};

use crate::check::DetectorCheck;
use crate::errors::CheckError;
use crate::thresholds::Thresholds;

/// Why a (detector, task index) check did not run.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The detector is not in the selection.
    DetectorNotSelected,
    /// The task index is not in the target selection.
    TargetNotSelected,
    /// No check is registered for the detector.
    NoChecker,
    /// The check ran and failed.
    Failed(CheckError),
}

impl SkipReason {
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::DetectorNotSelected => "detector_not_selected",
            Self::TargetNotSelected => "target_not_selected",
            Self::NoChecker => "no_checker",
            Self::Failed(e) => e.error_code(),
        }
    }
}

/// Result of one [`QaChecker::run`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// The check ran for every requested specie. Each entry holds the bit
    /// raised for that specie, if any.
    Checked(Vec<(EventSpecie, Option<QaBit>)>),
    Skipped(SkipReason),
}

impl CheckOutcome {
    pub fn is_checked(&self) -> bool {
        matches!(self, Self::Checked(_))
    }
}

/// Counters for a batch of checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub checked: usize,
    pub skipped: usize,
    /// FATAL raised anywhere in the table after the batch. The caller decides
    /// whether to abort the pipeline.
    pub fatal: bool,
}

impl RunSummary {
    pub(crate) fn record(&mut self, outcome: &CheckOutcome) {
        if outcome.is_checked() {
            self.checked += 1;
        } else {
            self.skipped += 1;
        }
    }

    pub(crate) fn absorb(&mut self, other: RunSummary) {
        self.checked += other.checked;
        self.skipped += other.skipped;
        self.fatal |= other.fatal;
    }
}

/// Registry of per-detector checks plus the detector and target selection.
pub struct QaChecker {
    checks: [Option<Box<dyn DetectorCheck>>; Detector::COUNT],
    detectors: [bool; Detector::COUNT],
    targets: [bool; TaskIndex::COUNT],
    thresholds: Thresholds,
}

impl QaChecker {
    /// Checker with no checks registered and everything selected.
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            checks: std::array::from_fn(|_| None),
            detectors: [true; Detector::COUNT],
            targets: [true; TaskIndex::COUNT],
            thresholds,
        }
    }

    pub fn from_config(config: &QaConfig) -> Self {
        Self::new(config.thresholds.into())
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Register `check` for its detector, returning the check it replaces.
    pub fn register(&mut self, check: Box<dyn DetectorCheck>) -> Option<Box<dyn DetectorCheck>> {
        let slot = &mut self.checks[check.detector().index()];
        slot.replace(check)
    }

    pub fn has_check(&self, detector: Detector) -> bool {
        self.checks[detector.index()].is_some()
    }

    /// Restrict checks to the detectors named in `list` (whitespace or comma
    /// separated, `ALL` for every detector). The selection is unchanged if
    /// any name is unknown.
    pub fn select_detectors(&mut self, list: &str) -> Result<(), QaError> {
        self.detectors = parse_selection(list, Detector::from_name, Detector::index)?;
        Ok(())
    }

    /// Restrict checks to the task indices named in `list`, in the same
    /// format as [`select_detectors`](Self::select_detectors).
    pub fn select_targets(&mut self, list: &str) -> Result<(), QaError> {
        self.targets = parse_selection(list, TaskIndex::from_name, TaskIndex::index)?;
        Ok(())
    }

    pub fn is_detector_selected(&self, detector: Detector) -> bool {
        self.detectors[detector.index()]
    }

    pub fn is_target_selected(&self, index: TaskIndex) -> bool {
        self.targets[index.index()]
    }

    /// Run the check of `detector` for `index` under each of `species` and
    /// raise the resulting bits in `status`, on both the index stage and the
    /// task-level stage of the owning task.
    ///
    /// Missing or unselected checks and failing checks leave `status`
    /// untouched and come back as [`CheckOutcome::Skipped`].
    pub fn run(
        &self,
        status: &mut QaStatus,
        detector: Detector,
        index: TaskIndex,
        species: &[EventSpecie],
    ) -> CheckOutcome {
        let stage = Stage::of_index(index);
        let _span =
            tracing::info_span!("qa.check", detector = %detector, stage = %stage).entered();

        let outcome = match self.evaluate(detector, index, species) {
            Ok(verdicts) => {
                let task_stage = Stage::of_task(index.task());
                for &(specie, bit) in &verdicts {
                    status.mark_event_specie(specie);
                    if let Some(bit) = bit {
                        status.set(detector, stage, specie, bit);
                        status.set(detector, task_stage, specie, bit);
                    }
                }
                CheckOutcome::Checked(verdicts)
            }
            Err(reason) => CheckOutcome::Skipped(reason),
        };

        if let CheckOutcome::Skipped(reason) = &outcome {
            if let SkipReason::Failed(e) = reason {
                tracing::warn!(code = e.error_code(), error = %e, "detector check failed");
            }
            events::stage_skipped(detector, &stage.to_string(), reason.as_label());
        }
        outcome
    }

    /// Compute every verdict before touching the table so a failure part way
    /// through leaves no partial result.
    fn evaluate(
        &self,
        detector: Detector,
        index: TaskIndex,
        species: &[EventSpecie],
    ) -> Result<Vec<(EventSpecie, Option<QaBit>)>, SkipReason> {
        if !self.is_detector_selected(detector) {
            return Err(SkipReason::DetectorNotSelected);
        }
        if !self.is_target_selected(index) {
            return Err(SkipReason::TargetNotSelected);
        }
        let check = self.checks[detector.index()]
            .as_deref()
            .ok_or(SkipReason::NoChecker)?;

        species
            .iter()
            .map(|&specie| {
                let value = check.check(index, specie).map_err(SkipReason::Failed)?;
                if !value.is_finite() {
                    return Err(SkipReason::Failed(CheckError::NonFiniteValue {
                        detector,
                        index,
                        value,
                    }));
                }
                Ok((specie, self.thresholds.classify(value)))
            })
            .collect()
    }

    /// Run every target of `detector`'s check. Detectors without a check
    /// contribute nothing.
    pub(crate) fn run_detector(
        &self,
        status: &mut QaStatus,
        detector: Detector,
        species: &[EventSpecie],
    ) -> RunSummary {
        let mut summary = RunSummary::default();
        if let Some(check) = self.checks[detector.index()].as_deref() {
            for &index in check.targets() {
                let outcome = self.run(status, detector, index, species);
                summary.record(&outcome);
            }
        }
        summary
    }

    /// Run every registered check on every one of its targets, then report
    /// whether the table holds a FATAL bit.
    pub fn run_all(&self, status: &mut QaStatus, species: &[EventSpecie]) -> RunSummary {
        let mut summary = RunSummary::default();
        for &detector in Detector::ALL {
            summary.absorb(self.run_detector(status, detector, species));
        }
        summary.fatal = status.check_fatal();
        tracing::info!(
            checked = summary.checked,
            skipped = summary.skipped,
            fatal = summary.fatal,
            "QA checks completed"
        );
        summary
    }
}

impl Default for QaChecker {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}

impl fmt::Debug for QaChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<Detector> = Detector::ALL
            .iter()
            .copied()
            .filter(|&d| self.has_check(d))
            .collect();
        f.debug_struct("QaChecker")
            .field("registered", &registered)
            .field("thresholds", &self.thresholds)
            .finish_non_exhaustive()
    }
}

fn parse_selection<T, const N: usize>(
    list: &str,
    lookup: impl Fn(&str) -> Result<T, QaError>,
    index: impl Fn(T) -> usize,
) -> Result<[bool; N], QaError> {
    let names: Vec<&str> = list
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();

    if names.is_empty() || names.iter().any(|n| n.eq_ignore_ascii_case("ALL")) {
        return Ok([true; N]);
    }

    let mut selected = [false; N];
    for name in names {
        selected[index(lookup(name)?)] = true;
    }
    Ok(selected)
}
