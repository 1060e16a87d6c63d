//! Per-scenario collection progress and the wizard state snapshot.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::WizardStep;
use crate::domain::foundation::{Scenario, Score};
use crate::domain::scoring::ScoreSet;

/// Collection progress of one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioProgress {
    revealed_count: usize,
    scores: ScoreSet,
}

impl ScenarioProgress {
    /// Starts a scenario: every area at `default`, the first one revealed.
    pub fn begin(area_count: usize, default: Score) -> Self {
        Self {
            revealed_count: 1.min(area_count),
            scores: ScoreSet::defaulted(area_count, default),
        }
    }

    /// Returns how many areas have been presented to the user.
    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    /// Returns the collected scores.
    pub fn scores(&self) -> &ScoreSet {
        &self.scores
    }

    /// Returns true once every area has been presented.
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed_count == self.scores.len()
    }

    /// Returns true once the scenario has been completed.
    pub fn is_frozen(&self) -> bool {
        self.scores.is_frozen()
    }

    pub(super) fn scores_mut(&mut self) -> &mut ScoreSet {
        &mut self.scores
    }

    pub(super) fn reveal_one(&mut self) {
        self.revealed_count += 1;
    }
}

/// Progress shown in the wizard header ("Q 3/7").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionProgress {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for QuestionProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q {}/{}", self.current, self.total)
    }
}

/// Everything the engine knows about one session's answers.
///
/// Holds no timestamps or ids, so two freshly started states compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardState {
    step: WizardStep,
    scenario_progress: BTreeMap<Scenario, ScenarioProgress>,
    tutorial_seen: BTreeMap<Scenario, bool>,
}

impl WizardState {
    /// The state at the Welcome step with nothing collected.
    pub fn initial() -> Self {
        let tutorial_seen = Scenario::all()
            .iter()
            .filter(|s| s.has_tutorial())
            .map(|s| (*s, false))
            .collect();
        Self {
            step: WizardStep::Welcome,
            scenario_progress: BTreeMap::new(),
            tutorial_seen,
        }
    }

    /// Returns the current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns a scenario's progress if it has started.
    pub fn progress(&self, scenario: Scenario) -> Option<&ScenarioProgress> {
        self.scenario_progress.get(&scenario)
    }

    /// Returns true if the tutorial for a scenario was acknowledged.
    pub fn tutorial_seen(&self, scenario: Scenario) -> bool {
        self.tutorial_seen.get(&scenario).copied().unwrap_or(false)
    }

    pub(super) fn set_step(&mut self, step: WizardStep) {
        self.step = step;
    }

    pub(super) fn progress_mut(&mut self, scenario: Scenario) -> Option<&mut ScenarioProgress> {
        self.scenario_progress.get_mut(&scenario)
    }

    pub(super) fn begin_scenario(&mut self, scenario: Scenario, progress: ScenarioProgress) {
        self.scenario_progress.insert(scenario, progress);
    }

    pub(super) fn mark_tutorial_seen(&mut self, scenario: Scenario) {
        self.tutorial_seen.insert(scenario, true);
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_reveals_first_area_only() {
        let progress = ScenarioProgress::begin(7, Score::MIDPOINT);
        assert_eq!(progress.revealed_count(), 1);
        assert!(!progress.is_fully_revealed());
        assert!(!progress.is_frozen());
        assert_eq!(progress.scores().values(), vec![5; 7]);
    }

    #[test]
    fn initial_state_is_welcome_with_unseen_tutorials() {
        let state = WizardState::initial();
        assert_eq!(state.step(), WizardStep::Welcome);
        assert!(state.progress(Scenario::Baseline).is_none());
        assert!(!state.tutorial_seen(Scenario::Money));
        assert!(!state.tutorial_seen(Scenario::Time));
    }

    #[test]
    fn initial_states_compare_equal() {
        assert_eq!(WizardState::initial(), WizardState::default());
    }

    #[test]
    fn question_progress_formats_like_header() {
        let progress = QuestionProgress { current: 3, total: 7 };
        assert_eq!(progress.to_string(), "Q 3/7");
    }
}
