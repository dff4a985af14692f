use serde::{Deserialize, Serialize};

use super::defaults;
use crate::types::EventSpecie;

/// Names and locations of QA data, reference and result files.
///
/// Only names are resolved here; opening and writing the files is up to the
/// persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Stem shared by per-detector QA data files.
    pub data_file_name: String,
    /// Directory the result file is written into. Empty means the working directory.
    pub result_dir: String,
    /// File name of the QA result file.
    pub result_file_name: String,
    /// Storage URI holding reference data.
    pub ref_storage: String,
    /// File name of the reference data inside `ref_storage`.
    pub ref_file_name: String,
    /// Directory under a detector's reference area that holds reference data.
    pub ref_dir_name: String,
}

/// Kind of reference storage, told apart by the URI label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefStorage {
    /// `local://` path on this machine.
    Local,
    /// `alien://` grid catalogue.
    AliEn,
}

impl RefStorage {
    /// Classify a storage URI by its label. Unlabelled URIs return `None`.
    pub fn from_uri(uri: &str) -> Option<Self> {
        if uri.starts_with(defaults::LOCAL_STORAGE_LABEL) {
            Some(Self::Local)
        } else if uri.starts_with(defaults::ALIEN_STORAGE_LABEL) {
            Some(Self::AliEn)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Local => defaults::LOCAL_STORAGE_LABEL,
            Self::AliEn => defaults::ALIEN_STORAGE_LABEL,
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            data_file_name: defaults::DEFAULT_DATA_FILE_NAME.to_string(),
            result_dir: defaults::DEFAULT_RESULT_DIR.to_string(),
            result_file_name: defaults::DEFAULT_RESULT_FILE_NAME.to_string(),
            ref_storage: defaults::DEFAULT_REF_STORAGE.to_string(),
            ref_file_name: defaults::DEFAULT_REF_FILE_NAME.to_string(),
            ref_dir_name: defaults::DEFAULT_REF_DIR_NAME.to_string(),
        }
    }
}

impl FilesConfig {
    /// Data file name for `name` (usually a detector) and a run number,
    /// e.g. `ITS.QA.12345.root`.
    pub fn data_file_name_for(&self, name: &str, run: u32) -> String {
        format!("{name}.{}.{run}.root", self.data_file_name)
    }

    /// Full path of the result file.
    pub fn result_file_path(&self) -> String {
        if self.result_dir.is_empty() || self.result_dir.ends_with('/') {
            format!("{}{}", self.result_dir, self.result_file_name)
        } else {
            format!("{}/{}", self.result_dir, self.result_file_name)
        }
    }

    /// Storage kind of `ref_storage`.
    pub fn ref_storage_kind(&self) -> Option<RefStorage> {
        RefStorage::from_uri(&self.ref_storage)
    }

    /// Reference data directory for `specie`, e.g. `Ref/Cosmic`. Reference
    /// data is kept apart per event specie.
    pub fn ref_data_dir_for(&self, specie: EventSpecie) -> String {
        format!("{}/{specie}", self.ref_dir_name)
    }
}
