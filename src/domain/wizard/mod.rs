//! Wizard module - the step sequence and the engine that drives it.
//!
//! ```text
//! Welcome → Baseline → MoneyTutorial → Money → TimeTutorial → Time → Summary
//! ```
//!
//! One [`WizardEngine`] exists per user session; nothing is shared between
//! engines except the immutable [`AreaCatalog`](crate::domain::catalog::AreaCatalog).

mod engine;
mod events;
mod progress;
mod step;

pub use engine::{EngineSettings, WizardEngine};
pub use events::WizardEvent;
pub use progress::{QuestionProgress, ScenarioProgress, WizardState};
pub use step::WizardStep;
