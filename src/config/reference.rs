//! Reference dataset configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Reference dataset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceConfig {
    /// Path to the YAML reference dataset
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

impl ReferenceConfig {
    /// Validate reference configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dataset_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDatasetPath);
        }
        Ok(())
    }
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
        }
    }
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/reference.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_bundled_dataset() {
        let config = ReferenceConfig::default();
        assert_eq!(config.dataset_path, PathBuf::from("data/reference.yaml"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_path_fails_validation() {
        let config = ReferenceConfig {
            dataset_path: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }
}
