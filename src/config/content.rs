//! Content source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where replaceable survey content comes from
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ContentConfig {
    /// YAML file with curated actions and fallback copy; built-in tables when unset
    pub action_tables_path: Option<PathBuf>,
}

impl ContentConfig {
    /// Validate content configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.action_tables_path {
            Some(path) if path.as_os_str().is_empty() => {
                Err(ValidationError::EmptyActionTablesPath)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_path_is_valid() {
        assert!(ContentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_path_rejected() {
        let config = ContentConfig {
            action_tables_path: Some(PathBuf::new()),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyActionTablesPath));
    }
}
