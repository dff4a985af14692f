//! The QA status table for one run or one worker.

use qa_core::tracing::events;
use qa_core::{Detector, EventSpecie, QaBit, QaError, Task, TaskIndex};
use serde::{Deserialize, Serialize};

use crate::layout::Stage;
use crate::scope::StageScope;
use crate::word::StatusWord;

/// A fully typed status address: which bit of which word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub detector: Detector,
    pub stage: Stage,
    pub specie: EventSpecie,
    pub bit: QaBit,
}

/// A status address as raw integers, as handed over by external drivers.
///
/// `detector`, `task`, `index` and `bit` are dense enum indices; `specie` is
/// the event specie bitmask value (a single bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawTarget {
    pub detector: i32,
    pub task: i32,
    pub index: Option<i32>,
    pub specie: u32,
    pub bit: i32,
}

impl RawTarget {
    /// Validate every field and build the typed address.
    pub fn resolve(&self) -> Result<Target, QaError> {
        let detector = Detector::try_from(self.detector)?;
        let task = Task::try_from(self.task)?;
        let index = self.index.map(TaskIndex::try_from).transpose()?;
        let stage = Stage::new(task, index)?;
        let specie = EventSpecie::from_bits(self.specie)?;
        let bit = QaBit::try_from(self.bit)?;
        Ok(Target {
            detector,
            stage,
            specie,
            bit,
        })
    }
}

/// QA status table: one [`StatusWord`] per (detector, event specie), plus the
/// list of event species seen during the run.
///
/// Plain owned data. Workers that run concurrently each fill their own
/// table and the results are combined with [`QaStatus::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaStatus {
    words: [[StatusWord; EventSpecie::COUNT]; Detector::COUNT],
    species_seen: [bool; EventSpecie::COUNT],
}

impl QaStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise `bit` for `stage` of `detector` under `specie`.
    pub fn set(
        &mut self,
        detector: Detector,
        stage: impl Into<Stage>,
        specie: EventSpecie,
        bit: QaBit,
    ) {
        let stage = stage.into();
        self.word_mut(detector, specie).raise(stage, bit);
        events::bit_raised(detector, &stage.to_string(), specie, bit);
    }

    /// Clear `bit` for `stage` of `detector` under `specie`.
    pub fn unset(
        &mut self,
        detector: Detector,
        stage: impl Into<Stage>,
        specie: EventSpecie,
        bit: QaBit,
    ) {
        let stage = stage.into();
        self.word_mut(detector, specie).clear(stage, bit);
        events::bit_cleared(detector, &stage.to_string(), specie, bit);
    }

    /// Whether `bit` is raised for exactly `stage`.
    pub fn is_set(
        &self,
        detector: Detector,
        stage: impl Into<Stage>,
        specie: EventSpecie,
        bit: QaBit,
    ) -> bool {
        self.status(detector, specie).is_raised(stage.into(), bit)
    }

    /// Raise a bit addressed by raw values. Nothing changes if any value is
    /// out of range.
    pub fn set_raw(&mut self, raw: RawTarget) -> Result<(), QaError> {
        let target = Self::resolve_logged("set", raw)?;
        self.set(target.detector, target.stage, target.specie, target.bit);
        Ok(())
    }

    /// Clear a bit addressed by raw values. Nothing changes if any value is
    /// out of range.
    pub fn unset_raw(&mut self, raw: RawTarget) -> Result<(), QaError> {
        let target = Self::resolve_logged("unset", raw)?;
        self.unset(target.detector, target.stage, target.specie, target.bit);
        Ok(())
    }

    /// Point query by raw values. An unresolvable address is reported as not set.
    pub fn is_set_raw(&self, raw: RawTarget) -> bool {
        raw.resolve()
            .map(|t| self.is_set(t.detector, t.stage, t.specie, t.bit))
            .unwrap_or(false)
    }

    /// Any bit raised in any stage of `detector` under `specie`.
    pub fn is_set_any(&self, detector: Detector, specie: EventSpecie) -> bool {
        !self.status(detector, specie).is_empty()
    }

    /// Any bit raised in any stage of `task` (the task-level stage and each of
    /// its indices) for `detector` under `specie`.
    pub fn is_set_any_in_task(&self, detector: Detector, task: Task, specie: EventSpecie) -> bool {
        self.status(detector, specie).any_in_task(task)
    }

    /// Whether FATAL is raised anywhere in the table.
    pub fn check_fatal(&self) -> bool {
        for &detector in Detector::ALL {
            for &specie in EventSpecie::ALL {
                if self.status(detector, specie).any_with(QaBit::Fatal) {
                    events::fatal_detected(detector, specie);
                    return true;
                }
            }
        }
        false
    }

    /// Copy of the status word for (`detector`, `specie`).
    pub fn status(&self, detector: Detector, specie: EventSpecie) -> StatusWord {
        self.words[detector.index()][specie.index()]
    }

    fn word_mut(&mut self, detector: Detector, specie: EventSpecie) -> &mut StatusWord {
        &mut self.words[detector.index()][specie.index()]
    }

    /// Handle bound to one (detector, stage) for repeated set/unset calls.
    pub fn scope(&mut self, detector: Detector, stage: impl Into<Stage>) -> StageScope<'_> {
        StageScope::new(self, detector, stage.into())
    }

    /// Record that `specie` occurred in this run.
    pub fn mark_event_specie(&mut self, specie: EventSpecie) {
        self.species_seen[specie.index()] = true;
    }

    pub fn is_event_specie_set(&self, specie: EventSpecie) -> bool {
        self.species_seen[specie.index()]
    }

    /// Event species recorded with [`mark_event_specie`](Self::mark_event_specie).
    pub fn event_species(&self) -> impl Iterator<Item = EventSpecie> + '_ {
        EventSpecie::ALL
            .iter()
            .copied()
            .filter(|&specie| self.is_event_specie_set(specie))
    }

    /// Clear every word of `detector`.
    pub fn reset_detector(&mut self, detector: Detector) {
        for word in &mut self.words[detector.index()] {
            word.reset();
        }
    }

    /// Clear every word and forget the species seen.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// OR `other` into this table, word by word. Seen species are combined the same way.
    pub fn merge(&mut self, other: &QaStatus) {
        for (mine, theirs) in self.words.iter_mut().zip(other.words.iter()) {
            for (word, other_word) in mine.iter_mut().zip(theirs.iter()) {
                *word |= *other_word;
            }
        }
        for (seen, other_seen) in self.species_seen.iter_mut().zip(other.species_seen) {
            *seen |= other_seen;
        }
    }

    /// Merge every table in `others` into this one.
    pub fn merge_all<'a>(&mut self, others: impl IntoIterator<Item = &'a QaStatus>) {
        for other in others {
            self.merge(other);
        }
    }

    fn resolve_logged(operation: &str, raw: RawTarget) -> Result<Target, QaError> {
        raw.resolve().inspect_err(|e| events::range_rejected(operation, e))
    }
}
