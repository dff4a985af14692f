// Single source of truth for all default values.

// --- Files ---
pub const DEFAULT_DATA_FILE_NAME: &str = "QA";
pub const DEFAULT_RESULT_DIR: &str = "";
pub const DEFAULT_RESULT_FILE_NAME: &str = "QA.root";
pub const DEFAULT_REF_STORAGE: &str = "local://$ALICE_ROOT/QAref";
pub const DEFAULT_REF_FILE_NAME: &str = "QA.root";
pub const DEFAULT_REF_DIR_NAME: &str = "Ref";

// --- Reference storage labels ---
pub const LOCAL_STORAGE_LABEL: &str = "local://";
pub const ALIEN_STORAGE_LABEL: &str = "alien://";

// --- Thresholds ---
pub const DEFAULT_FATAL_MAX: f64 = 0.0;
pub const DEFAULT_ERROR_MAX: f64 = 0.0002;
pub const DEFAULT_WARNING_MAX: f64 = 0.5;
pub const DEFAULT_INFO_BELOW: f64 = 1.0;

// --- Logging ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
