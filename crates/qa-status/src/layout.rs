//! Bit layout of a status word.
//!
//! Each [`Task`] owns a contiguous run of nibbles starting at
//! [`offset`]: one for the task-level stage, then one per [`TaskIndex`] the
//! task owns, in declaration order.
//!
//! ```text
//! bit   0    4    8   12   16   20   24   28   32   36   40   44   48  52
//!       | RAW|Raws| SIM|Hits|SDig|Digi| REC|RecP|TrkS|RecP| ESD|ESDs| ANA|
//! ```
//!
//! Within a nibble, bit `n` is [`QaBit::from_index(n)`](QaBit::from_index).

use std::fmt;

use qa_core::constants::{BITS_PER_STAGE, STATUS_WORD_BITS};
use qa_core::{QaBit, QaError, Task, TaskIndex};
use serde::{Deserialize, Serialize};

/// Base bit position of `task`'s first nibble.
pub const fn offset(task: Task) -> u32 {
    match task {
        Task::Raw => 0,
        Task::Sim => 8,
        Task::Rec => 24,
        Task::Esd => 40,
        Task::Ana => 48,
    }
}

/// One past the highest bit the layout uses.
pub const USED_BITS: u32 = offset(Task::Ana) + BITS_PER_STAGE;

const _: () = assert!(USED_BITS <= STATUS_WORD_BITS);
const _: () = assert!(QaBit::COUNT as u32 <= BITS_PER_STAGE);

/// A processing stage that owns one nibble of a status word: a task, optionally
/// narrowed to one of its task indices.
///
/// A stage built from a [`TaskIndex`] always carries that index's own task,
/// so a mismatched (task, index) pair cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Stage {
    task: Task,
    index: Option<TaskIndex>,
}

impl Stage {
    /// Total number of stages.
    pub const COUNT: usize = 13;

    /// All stages in bit order.
    pub const ALL: [Stage; Stage::COUNT] = [
        Self::of_task(Task::Raw),
        Self::of_index(TaskIndex::Raws),
        Self::of_task(Task::Sim),
        Self::of_index(TaskIndex::Hits),
        Self::of_index(TaskIndex::SDigits),
        Self::of_index(TaskIndex::Digits),
        Self::of_task(Task::Rec),
        Self::of_index(TaskIndex::RecPoints),
        Self::of_index(TaskIndex::TrackSegments),
        Self::of_index(TaskIndex::RecParticles),
        Self::of_task(Task::Esd),
        Self::of_index(TaskIndex::Esds),
        Self::of_task(Task::Ana),
    ];

    /// Task-level stage, used when no finer index applies.
    pub const fn of_task(task: Task) -> Self {
        Self { task, index: None }
    }

    /// Stage of a task index; the task is derived from the index.
    pub const fn of_index(index: TaskIndex) -> Self {
        Self {
            task: index.task(),
            index: Some(index),
        }
    }

    /// Build a stage from an explicit pair, rejecting an index that belongs to
    /// another task.
    pub fn new(task: Task, index: Option<TaskIndex>) -> Result<Self, QaError> {
        match index {
            None => Ok(Self::of_task(task)),
            Some(index) => Ok(Self::of_index(index.ensure_task(task)?)),
        }
    }

    pub fn task(self) -> Task {
        self.task
    }

    pub fn index(self) -> Option<TaskIndex> {
        self.index
    }

    /// Stages belonging to `task`: the task-level stage first, then its indices.
    pub fn of(task: Task) -> impl Iterator<Item = Stage> {
        std::iter::once(Self::of_task(task))
            .chain(task.indices().iter().copied().map(Self::of_index))
    }

    /// Nibble number within the task's run.
    fn slot(self) -> u32 {
        match self.index {
            None => 0,
            Some(index) => 1 + index.position() as u32,
        }
    }

    /// Position of the stage's lowest bit in the status word.
    pub fn shift(self) -> u32 {
        offset(self.task) + BITS_PER_STAGE * self.slot()
    }

    /// Mask covering the stage's whole nibble.
    pub fn mask(self) -> u64 {
        0xFu64 << self.shift()
    }

    /// Position of `bit` for this stage in the status word.
    pub fn bit_position(self, bit: QaBit) -> u32 {
        self.shift() + bit.index() as u32
    }
}

impl From<Task> for Stage {
    fn from(task: Task) -> Self {
        Self::of_task(task)
    }
}

impl From<TaskIndex> for Stage {
    fn from(index: TaskIndex) -> Self {
        Self::of_index(index)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            None => write!(f, "{}", self.task),
            Some(index) => write!(f, "{}/{}", self.task, index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_bit_order_and_matches_of() {
        let from_tasks: Vec<Stage> = Task::ALL.iter().flat_map(|&t| Stage::of(t)).collect();
        assert_eq!(from_tasks, Stage::ALL.to_vec());
        for pair in Stage::ALL.windows(2) {
            assert_eq!(pair[0].shift() + BITS_PER_STAGE, pair[1].shift());
        }
    }

    #[test]
    fn of_index_agrees_with_task_index_task() {
        for &index in TaskIndex::ALL {
            assert_eq!(Stage::of_index(index).task(), index.task());
        }
    }

    #[test]
    fn highest_bit_fits_in_word() {
        let top = Stage::ALL
            .iter()
            .map(|s| s.bit_position(QaBit::Fatal))
            .max()
            .unwrap();
        assert_eq!(top + 1, USED_BITS);
    }
}
