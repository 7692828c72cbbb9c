//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Storage configuration
///
/// With a `data_dir` set, analyses are persisted as JSON files under that
/// directory. Without one, storage is in-memory and lost on restart.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Directory for analysis files
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(dir) = &self.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(ValidationError::EmptyDataDir);
            }
        }
        Ok(())
    }
}
