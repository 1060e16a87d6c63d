//! LifeArea value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AreaId, Scenario, ValidationError};

/// The reflective prompt shown under an area's heading, per scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioPrompts {
    pub baseline: String,
    pub money: String,
    pub time: String,
}

impl ScenarioPrompts {
    /// Creates prompts for all three scenarios.
    pub fn new(
        baseline: impl Into<String>,
        money: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            baseline: baseline.into(),
            money: money.into(),
            time: time.into(),
        }
    }

    /// Returns the prompt for a scenario.
    pub fn for_scenario(&self, scenario: Scenario) -> &str {
        match scenario {
            Scenario::Baseline => &self.baseline,
            Scenario::Money => &self.money,
            Scenario::Time => &self.time,
        }
    }
}

/// One of the life areas the user rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeArea {
    id: AreaId,
    label: String,
    prompts: ScenarioPrompts,
}

impl LifeArea {
    /// Creates a life area, rejecting an empty label or prompt.
    pub fn new(
        id: AreaId,
        label: impl Into<String>,
        prompts: ScenarioPrompts,
    ) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        for scenario in Scenario::all() {
            if prompts.for_scenario(*scenario).trim().is_empty() {
                return Err(ValidationError::empty_field(format!("prompts.{}", scenario)));
            }
        }
        Ok(Self { id, label, prompts })
    }

    /// Returns the stable identifier.
    pub fn id(&self) -> &AreaId {
        &self.id
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns all prompts.
    pub fn prompts(&self) -> &ScenarioPrompts {
        &self.prompts
    }

    /// Returns the prompt shown for a scenario.
    pub fn prompt(&self, scenario: Scenario) -> &str {
        self.prompts.for_scenario(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompts() -> ScenarioPrompts {
        ScenarioPrompts::new("now?", "with money?", "with time?")
    }

    #[test]
    fn new_accepts_complete_area() {
        let area = LifeArea::new(AreaId::new("health").unwrap(), "Health", prompts()).unwrap();
        assert_eq!(area.id().as_str(), "health");
        assert_eq!(area.label(), "Health");
    }

    #[test]
    fn new_rejects_blank_label() {
        let err = LifeArea::new(AreaId::new("health").unwrap(), "  ", prompts()).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("label"));
    }

    #[test]
    fn new_rejects_blank_prompt() {
        let err = LifeArea::new(
            AreaId::new("health").unwrap(),
            "Health",
            ScenarioPrompts::new("now?", "", "with time?"),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::empty_field("prompts.money"));
    }

    #[test]
    fn prompt_follows_scenario() {
        let area = LifeArea::new(AreaId::new("health").unwrap(), "Health", prompts()).unwrap();
        assert_eq!(area.prompt(Scenario::Baseline), "now?");
        assert_eq!(area.prompt(Scenario::Money), "with money?");
        assert_eq!(area.prompt(Scenario::Time), "with time?");
    }
}
