//! Application layer - Commands, views and the session service.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod commands;
mod view;
mod wizard_service;

pub use commands::WizardCommand;
pub use view::{AreaView, WizardView};
pub use wizard_service::WizardService;
