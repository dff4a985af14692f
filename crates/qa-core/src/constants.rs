/// Width of one stage nibble in a status word.
pub const BITS_PER_STAGE: u32 = 4;

/// Width of the integer a status word is stored in.
pub const STATUS_WORD_BITS: u32 = u64::BITS;

/// Upper bound on the number of event species a status table can index.
pub const MAX_EVENT_SPECIES: usize = 32;

/// Environment variable read by [`crate::tracing::init_tracing`].
pub const LOG_ENV_VAR: &str = "QA_LOG";
