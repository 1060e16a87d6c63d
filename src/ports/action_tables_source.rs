//! Content source port for action tables.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::analysis::ActionTables;
use crate::domain::foundation::DomainError;

/// Errors raised while loading replaceable content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid content: {0}")]
    Invalid(#[from] DomainError),
}

impl From<ContentError> for DomainError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::Invalid(inner) => inner,
            other => DomainError::invalid_content(other.to_string()),
        }
    }
}

/// Port for obtaining the action tables at startup.
pub trait ActionTablesSource {
    /// Loads and validates the tables.
    fn load(&self) -> Result<ActionTables, ContentError>;
}
