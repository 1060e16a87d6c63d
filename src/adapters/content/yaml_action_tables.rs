//! YAML file adapter for action tables.
//!
//! Expected layout:
//!
//! ```yaml
//! money:
//!   curated:
//!     "Career & Income": "Invest in a course..."
//!   fallback:
//!     doing_well: "..."
//!     balanced: "..."
//!     on_track: "..."
//!     start_small: "..."
//! time:
//!   fallback: { ... }
//! ```

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::analysis::ActionTables;
use crate::ports::{ActionTablesSource, ContentError};

/// Reads action tables from a YAML file on every `load`.
#[derive(Debug, Clone)]
pub struct YamlActionTablesFile {
    path: PathBuf,
}

impl YamlActionTablesFile {
    /// Creates a source for the given file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses tables from YAML text without touching the filesystem.
    pub fn parse(&self, yaml: &str) -> Result<ActionTables, ContentError> {
        let tables: ActionTables =
            serde_yaml::from_str(yaml).map_err(|e| ContentError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        tables.validate()?;
        Ok(tables)
    }
}

impl ActionTablesSource for YamlActionTablesFile {
    fn load(&self) -> Result<ActionTables, ContentError> {
        let yaml = std::fs::read_to_string(&self.path).map_err(|source| ContentError::Io {
            path: self.path.clone(),
            source,
        })?;
        let tables = self.parse(&yaml)?;

        info!(
            path = %self.path.display(),
            money_curated = tables.money.curated.len(),
            time_curated = tables.time.curated.len(),
            "Loaded action tables"
        );
        Ok(tables)
    }
}
