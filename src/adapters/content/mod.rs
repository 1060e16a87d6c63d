//! Content adapters - where action tables come from.

mod builtin;
mod yaml_action_tables;

pub use builtin::BuiltinActionTables;
pub use yaml_action_tables::YamlActionTablesFile;
