//! WizardCommand - serialisable mirror of the engine operations.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Scenario};
use crate::domain::wizard::WizardEngine;

/// A user interaction posted by the presentation layer.
///
/// ```json
/// { "type": "set_score", "scenario": "money", "area_index": 2, "value": 8 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardCommand {
    AdvanceWelcome,
    SetScore {
        scenario: Scenario,
        area_index: usize,
        value: i64,
    },
    RevealNext {
        scenario: Scenario,
    },
    CompleteScenario {
        scenario: Scenario,
    },
    AcknowledgeTutorial {
        scenario: Scenario,
    },
    Reset,
    Finish,
}

impl WizardCommand {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            WizardCommand::AdvanceWelcome => "advance_welcome",
            WizardCommand::SetScore { .. } => "set_score",
            WizardCommand::RevealNext { .. } => "reveal_next",
            WizardCommand::CompleteScenario { .. } => "complete_scenario",
            WizardCommand::AcknowledgeTutorial { .. } => "acknowledge_tutorial",
            WizardCommand::Reset => "reset",
            WizardCommand::Finish => "finish",
        }
    }

    /// Runs the command against an engine.
    pub fn apply(self, engine: &mut WizardEngine) -> Result<(), DomainError> {
        match self {
            WizardCommand::AdvanceWelcome => engine.advance_welcome(),
            WizardCommand::SetScore {
                scenario,
                area_index,
                value,
            } => engine.set_score(scenario, area_index, value),
            WizardCommand::RevealNext { scenario } => engine.reveal_next(scenario),
            WizardCommand::CompleteScenario { scenario } => engine.complete_scenario(scenario),
            WizardCommand::AcknowledgeTutorial { scenario } => {
                engine.acknowledge_tutorial(scenario)
            }
            WizardCommand::Reset => {
                engine.reset();
                Ok(())
            }
            WizardCommand::Finish => engine.finish(),
        }
    }
}
