//! WizardStep - the fixed screen sequence of the wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Scenario, StateMachine};

/// Where the user currently is in the wizard.
///
/// ```text
/// Welcome → Baseline → MoneyTutorial → Money → TimeTutorial → Time → Summary
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Welcome,
    Baseline,
    MoneyTutorial,
    Money,
    TimeTutorial,
    Time,
    Summary,
}

impl WizardStep {
    /// The canonical order of steps.
    pub const ORDER: [WizardStep; 7] = [
        WizardStep::Welcome,
        WizardStep::Baseline,
        WizardStep::MoneyTutorial,
        WizardStep::Money,
        WizardStep::TimeTutorial,
        WizardStep::Time,
        WizardStep::Summary,
    ];

    /// Returns the scenario rated on this step, if it is a rating step.
    pub fn scenario(&self) -> Option<Scenario> {
        match self {
            WizardStep::Baseline => Some(Scenario::Baseline),
            WizardStep::Money => Some(Scenario::Money),
            WizardStep::Time => Some(Scenario::Time),
            _ => None,
        }
    }

    /// Returns the scenario this tutorial introduces, if it is a tutorial step.
    pub fn tutorial_scenario(&self) -> Option<Scenario> {
        match self {
            WizardStep::MoneyTutorial => Some(Scenario::Money),
            WizardStep::TimeTutorial => Some(Scenario::Time),
            _ => None,
        }
    }

    /// Returns the rating step for a scenario.
    pub fn rating_step(scenario: Scenario) -> WizardStep {
        match scenario {
            Scenario::Baseline => WizardStep::Baseline,
            Scenario::Money => WizardStep::Money,
            Scenario::Time => WizardStep::Time,
        }
    }

    /// Returns the tutorial step that introduces a scenario.
    pub fn tutorial_step(scenario: Scenario) -> Option<WizardStep> {
        match scenario {
            Scenario::Baseline => None,
            Scenario::Money => Some(WizardStep::MoneyTutorial),
            Scenario::Time => Some(WizardStep::TimeTutorial),
        }
    }

    /// Returns true on steps that accept ratings.
    pub fn accepts_scores(&self) -> bool {
        self.scenario().is_some()
    }

    /// Returns the step that follows this one, or None on Summary.
    pub fn next(&self) -> Option<WizardStep> {
        let idx = Self::ORDER.iter().position(|s| s == self)?;
        Self::ORDER.get(idx + 1).copied()
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Forward edges only; finishing from Summary returns to Welcome.
    ///
    /// A reset is not a transition and bypasses this table.
    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            WizardStep::Summary => vec![WizardStep::Welcome],
            other => other.next().into_iter().collect(),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStep::Welcome => "welcome",
            WizardStep::Baseline => "baseline",
            WizardStep::MoneyTutorial => "money_tutorial",
            WizardStep::Money => "money",
            WizardStep::TimeTutorial => "time_tutorial",
            WizardStep::Time => "time",
            WizardStep::Summary => "summary",
        };
        write!(f, "{}", s)
    }
}
