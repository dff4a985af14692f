use serde::{Deserialize, Serialize};

use super::defaults;

/// Cut values used to turn a checker's quality value into a QA bit.
///
/// A value `v` maps to FATAL when `v <= fatal_max`, ERROR when
/// `v <= error_max`, WARNING when `v <= warning_max`, INFO when
/// `v < info_below`, and to no bit otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    pub fatal_max: f64,
    pub error_max: f64,
    pub warning_max: f64,
    pub info_below: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            fatal_max: defaults::DEFAULT_FATAL_MAX,
            error_max: defaults::DEFAULT_ERROR_MAX,
            warning_max: defaults::DEFAULT_WARNING_MAX,
            info_below: defaults::DEFAULT_INFO_BELOW,
        }
    }
}
