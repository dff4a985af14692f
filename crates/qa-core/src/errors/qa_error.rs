//! Range and lookup errors for the QA enumerations.

/// A raw value or name that does not map onto one of the closed QA enumerations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QaError {
    #[error("detector index {value} out of range [0, {max})")]
    DetectorOutOfRange { value: i32, max: usize },

    #[error("task {value} out of range [0, {max})")]
    TaskOutOfRange { value: i32, max: usize },

    #[error("task index {value} out of range [0, {max})")]
    TaskIndexOutOfRange { value: i32, max: usize },

    #[error("QA bit {value} out of range [0, {max})")]
    BitOutOfRange { value: i32, max: usize },

    #[error("event specie 0x{bits:x} is not a single known specie bit")]
    EventSpecieOutOfRange { bits: u32 },

    #[error("task index {index} belongs to task {expected}, not {given}")]
    TaskMismatch {
        index: String,
        expected: String,
        given: String,
    },

    #[error("unknown {kind} name: {name}")]
    UnknownName { kind: &'static str, name: String },
}

impl QaError {
    /// Short stable label (snake_case) for use as a structured log field.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DetectorOutOfRange { .. } => "detector_out_of_range",
            Self::TaskOutOfRange { .. } => "task_out_of_range",
            Self::TaskIndexOutOfRange { .. } => "task_index_out_of_range",
            Self::BitOutOfRange { .. } => "bit_out_of_range",
            Self::EventSpecieOutOfRange { .. } => "event_specie_out_of_range",
            Self::TaskMismatch { .. } => "task_mismatch",
            Self::UnknownName { .. } => "unknown_name",
        }
    }
}
