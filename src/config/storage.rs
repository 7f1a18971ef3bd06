//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the persisted mode lives
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Which key-value store to open
    #[serde(default)]
    pub backend: StorageBackend,

    /// YAML file used by the file backend
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

/// Key-value store implementation
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Survives restarts
    #[default]
    File,
    /// Forgets everything on exit
    Memory,
}

impl StorageConfig {
    pub fn is_persistent(&self) -> bool {
        self.backend == StorageBackend::File
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_persistent() && self.path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyStoragePath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("./data/clarity.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.path, PathBuf::from("./data/clarity.yaml"));
        assert!(config.is_persistent());
    }

    #[test]
    fn test_validation_empty_path() {
        let config = StorageConfig {
            path: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyStoragePath));
    }

    #[test]
    fn test_memory_backend_ignores_path() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            path: PathBuf::new(),
        };
        assert!(!config.is_persistent());
        assert!(config.validate().is_ok());
    }
}
