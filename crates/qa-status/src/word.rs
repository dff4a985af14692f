//! [`StatusWord`]: packed QA bits for every stage of one (detector, specie) pair.

use qa_core::{QaBit, Task};
use serde::{Deserialize, Serialize};

use crate::layout::Stage;

/// Packed QA bits. See [`crate::layout`] for the bit assignment.
///
/// Bits accumulate: raising WARNING after INFO leaves both raised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusWord(u64);

impl StatusWord {
    pub const EMPTY: StatusWord = StatusWord(0);

    /// Raw packed value.
    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn raise(&mut self, stage: Stage, bit: QaBit) {
        self.0 |= 1u64 << stage.bit_position(bit);
    }

    pub fn clear(&mut self, stage: Stage, bit: QaBit) {
        self.0 &= !(1u64 << stage.bit_position(bit));
    }

    pub fn is_raised(self, stage: Stage, bit: QaBit) -> bool {
        self.0 & (1u64 << stage.bit_position(bit)) != 0
    }

    /// The stage's 4-bit nibble.
    pub fn nibble(self, stage: Stage) -> u8 {
        ((self.0 & stage.mask()) >> stage.shift()) as u8
    }

    /// Bits raised for `stage`, least severe first.
    pub fn raised_bits(self, stage: Stage) -> impl Iterator<Item = QaBit> {
        QaBit::decode_nibble(self.nibble(stage))
    }

    /// Any bit raised for `stage`.
    pub fn any_in(self, stage: Stage) -> bool {
        self.0 & stage.mask() != 0
    }

    /// Any bit raised for any stage of `task`.
    pub fn any_in_task(self, task: Task) -> bool {
        Stage::of(task).any(|stage| self.any_in(stage))
    }

    /// `bit` raised for any stage.
    pub fn any_with(self, bit: QaBit) -> bool {
        Stage::ALL.iter().any(|&stage| self.is_raised(stage, bit))
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Bitwise OR of two words.
    pub fn union(self, other: StatusWord) -> StatusWord {
        StatusWord(self.0 | other.0)
    }

    /// Clear every stage.
    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }
}

impl std::ops::BitOr for StatusWord {
    type Output = StatusWord;

    fn bitor(self, rhs: StatusWord) -> StatusWord {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for StatusWord {
    fn bitor_assign(&mut self, rhs: StatusWord) {
        *self = self.union(rhs);
    }
}
