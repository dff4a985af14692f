qa_enum! {
    /// QA severity signal. Variants are ordered from least to most severe.
    QaBit, kind = "QA bit" {
        Info => "INFO",
        Warning => "WARNING",
        Error => "ERROR",
        Fatal => "FATAL",
    }
}

try_from_index!(QaBit, BitOutOfRange);

impl QaBit {
    /// Mask of this bit inside a 4-bit stage nibble.
    pub fn nibble_mask(self) -> u8 {
        1u8 << self.index()
    }

    /// Bits raised in a nibble, least severe first.
    pub fn decode_nibble(nibble: u8) -> impl Iterator<Item = QaBit> {
        Self::ALL
            .iter()
            .copied()
            .filter(move |bit| nibble & bit.nibble_mask() != 0)
    }
}
