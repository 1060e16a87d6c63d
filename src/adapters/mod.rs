//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory session store
//! - `content` - Built-in and YAML-file action tables

pub mod content;
pub mod memory;

pub use content::{BuiltinActionTables, YamlActionTablesFile};
pub use memory::InMemoryWizardSessionStore;
