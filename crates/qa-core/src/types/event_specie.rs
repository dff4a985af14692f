use crate::constants::MAX_EVENT_SPECIES;
use crate::errors::QaError;

qa_enum! {
    /// Run-condition category. QA status is tracked independently per specie.
    ///
    /// Externally a specie is a single bit of a mask (`bits()`); the status
    /// table stores it at `log2(bits)`, which is `index()`.
    EventSpecie, kind = "event specie" {
        Default => "Default",
        LowMultiplicity => "LowMultiplicity",
        HighMultiplicity => "HighMultiplicity",
        Cosmic => "Cosmic",
        Calib => "Calib",
    }
}

const _: () = assert!(EventSpecie::COUNT <= MAX_EVENT_SPECIES);

impl EventSpecie {
    /// Bitmask value of this specie.
    pub fn bits(self) -> u32 {
        1u32 << self.index()
    }

    /// Resolve a single-bit mask value to its specie.
    pub fn from_bits(bits: u32) -> Result<Self, QaError> {
        if !bits.is_power_of_two() {
            return Err(QaError::EventSpecieOutOfRange { bits });
        }
        Self::from_index(bits.trailing_zeros() as usize)
            .ok_or(QaError::EventSpecieOutOfRange { bits })
    }

    /// Every specie whose bit is present in `mask`. Unknown bits are ignored.
    pub fn from_mask(mask: u32) -> impl Iterator<Item = EventSpecie> {
        Self::ALL
            .iter()
            .copied()
            .filter(move |specie| mask & specie.bits() != 0)
    }
}
