//! Built-in action tables compiled into the crate.

use crate::domain::analysis::ActionTables;
use crate::ports::{ActionTablesSource, ContentError};

/// Serves [`ActionTables::standard`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinActionTables;

impl ActionTablesSource for BuiltinActionTables {
    fn load(&self) -> Result<ActionTables, ContentError> {
        let tables = ActionTables::standard();
        tables.validate()?;
        Ok(tables)
    }
}
