//! Quality value → QA bit classification.

use qa_core::config::ThresholdsConfig;
use qa_core::QaBit;

/// Classification cuts. See [`ThresholdsConfig`] for their meaning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Thresholds {
    config: ThresholdsConfig,
}

impl Thresholds {
    pub fn new(config: ThresholdsConfig) -> Self {
        Self { config }
    }

    /// QA bit for `value`, or `None` when the value is good enough to need no flag.
    pub fn classify(&self, value: f64) -> Option<QaBit> {
        let c = &self.config;
        if value <= c.fatal_max {
            Some(QaBit::Fatal)
        } else if value <= c.error_max {
            Some(QaBit::Error)
        } else if value <= c.warning_max {
            Some(QaBit::Warning)
        } else if value < c.info_below {
            Some(QaBit::Info)
        } else {
            None
        }
    }
}

impl From<ThresholdsConfig> for Thresholds {
    fn from(config: ThresholdsConfig) -> Self {
        Self::new(config)
    }
}
