//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `WizardSessionStore` - Holds one `WizardEngine` per open session
//! - `ActionTablesSource` - Supplies curated actions and fallback copy

mod action_tables_source;
mod wizard_session_store;

pub use action_tables_source::{ActionTablesSource, ContentError};
pub use wizard_session_store::WizardSessionStore;
