//! Top-level QA configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FilesConfig, LoggingConfig, ThresholdsConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`QA_*`)
/// 2. Config file passed to [`QaConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QaConfig {
    pub files: FilesConfig,
    pub thresholds: ThresholdsConfig,
    pub logging: LoggingConfig,
}

impl QaConfig {
    /// Load configuration from an optional TOML file, then apply `QA_*`
    /// environment overrides and validate the result.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Read and parse a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `QA_RESULT_DIR`, `QA_REF_STORAGE` and `QA_LOG_LEVEL` overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("QA_RESULT_DIR") {
            self.files.result_dir = dir;
        }
        if let Ok(storage) = std::env::var("QA_REF_STORAGE") {
            if !storage.is_empty() {
                self.files.ref_storage = storage;
            }
        }
        if let Ok(level) = std::env::var("QA_LOG_LEVEL") {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        for (field, value) in [
            ("thresholds.fatal_max", t.fatal_max),
            ("thresholds.error_max", t.error_max),
            ("thresholds.warning_max", t.warning_max),
            ("thresholds.info_below", t.info_below),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("must be between 0.0 and 1.0, got {value}"),
                });
            }
        }

        let ordered = t.fatal_max <= t.error_max
            && t.error_max <= t.warning_max
            && t.warning_max <= t.info_below;
        if !ordered {
            return Err(ConfigError::ValidationFailed {
                field: "thresholds".to_string(),
                message: "must satisfy fatal_max <= error_max <= warning_max <= info_below"
                    .to_string(),
            });
        }

        if self.files.data_file_name.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "files.data_file_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.files.ref_storage_kind().is_none() {
            return Err(ConfigError::ValidationFailed {
                field: "files.ref_storage".to_string(),
                message: format!(
                    "must start with {} or {}, got {:?}",
                    super::defaults::LOCAL_STORAGE_LABEL,
                    super::defaults::ALIEN_STORAGE_LABEL,
                    self.files.ref_storage
                ),
            });
        }
        if self.files.result_file_name.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "files.result_file_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
