//! WizardEngine - the aggregate driving one survey session.
//!
//! Every operation validates first and mutates second, so a rejected call
//! leaves the state exactly as it was.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{QuestionProgress, ScenarioProgress, WizardEvent, WizardState, WizardStep};
use crate::domain::analysis::{
    ActionRecommender, PersonalSnapshot, ScenarioScores, SummaryCalculator, SummaryResult,
};
use crate::domain::catalog::AreaCatalog;
use crate::domain::foundation::{
    DomainError, Scenario, Score, SessionId, StateMachine, Timestamp,
};
use crate::domain::scoring::ScoreSet;

/// Tunables applied when a scenario begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Value every unrevealed area starts at.
    pub default_score: Score,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_score: Score::MIDPOINT,
        }
    }
}

/// Drives the step sequence and owns the answers of a single session.
#[derive(Debug, Clone)]
pub struct WizardEngine {
    session_id: SessionId,
    catalog: Arc<AreaCatalog>,
    settings: EngineSettings,
    state: WizardState,

    /// Uncommitted domain events
    domain_events: Vec<WizardEvent>,
}

impl WizardEngine {
    /// Creates an engine at the Welcome step with default settings.
    pub fn new(catalog: Arc<AreaCatalog>) -> Self {
        Self::with_settings(SessionId::new(), catalog, EngineSettings::default())
    }

    /// Creates an engine for a known session id.
    pub fn with_settings(
        session_id: SessionId,
        catalog: Arc<AreaCatalog>,
        settings: EngineSettings,
    ) -> Self {
        let mut engine = Self {
            session_id,
            catalog,
            settings,
            state: WizardState::initial(),
            domain_events: Vec::new(),
        };
        engine.record_event(WizardEvent::Started {
            session_id,
            started_at: Timestamp::now(),
        });
        engine
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn catalog(&self) -> &AreaCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> EngineSettings {
        self.settings
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.step()
    }

    /// Returns true once the Summary step has been reached.
    pub fn is_complete(&self) -> bool {
        self.state.step() == WizardStep::Summary
    }

    /// Returns the scenario currently accepting scores, if any.
    pub fn active_scenario(&self) -> Option<Scenario> {
        self.state.step().scenario()
    }

    /// Returns the progress of the active scenario.
    pub fn active_scenario_progress(&self) -> Option<&ScenarioProgress> {
        self.active_scenario()
            .and_then(|scenario| self.state.progress(scenario))
    }

    pub fn scenario_progress(&self, scenario: Scenario) -> Option<&ScenarioProgress> {
        self.state.progress(scenario)
    }

    /// Returns the score set of a scenario once it has started.
    pub fn score_set(&self, scenario: Scenario) -> Option<&ScoreSet> {
        self.state.progress(scenario).map(ScenarioProgress::scores)
    }

    /// Reads one score.
    pub fn score(&self, scenario: Scenario, area_index: usize) -> Option<Score> {
        self.score_set(scenario)?.get(area_index)
    }

    pub fn tutorial_seen(&self, scenario: Scenario) -> bool {
        self.state.tutorial_seen(scenario)
    }

    /// Returns true while only the first area of the active scenario is shown.
    pub fn shows_hint(&self) -> bool {
        self.active_scenario_progress()
            .map_or(false, |p| p.revealed_count() == 1)
    }

    /// Returns the "Q n/7" header for the current step.
    pub fn question_progress(&self) -> QuestionProgress {
        let total = self.catalog.len();
        let current = match self.state.step() {
            WizardStep::Summary => total,
            step if step.accepts_scores() => self
                .active_scenario_progress()
                .map_or(1, ScenarioProgress::revealed_count),
            _ => 1,
        };
        QuestionProgress { current, total }
    }

    /// Returns the frozen baseline score for an area.
    ///
    /// Shown read-only next to the Money and Time ratings.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `area_index` is outside the catalog
    /// - `NotReady` until the baseline has been completed
    pub fn baseline_reference(&self, area_index: usize) -> Result<Score, DomainError> {
        self.catalog.require_area(area_index)?;
        let baseline = self
            .score_set(Scenario::Baseline)
            .filter(|set| set.is_frozen())
            .ok_or_else(|| DomainError::not_ready("Baseline has not been completed"))?;
        baseline.get(area_index).ok_or_else(|| {
            DomainError::not_ready("Baseline holds no score for this area")
                .with_detail("area_index", area_index.to_string())
        })
    }

    /// Drains the recorded events.
    ///
    /// Undrained events stay bounded: a rating replaces the pending rating for
    /// the same area, and `start`/`reset` drop whatever the previous run left.
    pub fn take_events(&mut self) -> Vec<WizardEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Operations
    // ───────────────────────────────────────────────────────────────

    /// (Re)initialises the wizard at Welcome. Always succeeds.
    pub fn start(&mut self) {
        self.state = WizardState::initial();
        self.domain_events.clear();
        debug!(session_id = %self.session_id, "Wizard started");
        self.record_event(WizardEvent::Started {
            session_id: self.session_id,
            started_at: Timestamp::now(),
        });
    }

    /// Leaves the Welcome step and begins the baseline scenario.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless on the Welcome step
    pub fn advance_welcome(&mut self) -> Result<(), DomainError> {
        let current = self.state.step();
        if current != WizardStep::Welcome {
            return Err(self.rejected(
                "advance_welcome",
                DomainError::invalid_transition("Welcome has already been left")
                    .with_detail("step", current.to_string()),
            ));
        }
        let next = current
            .transition_to(WizardStep::Baseline)
            .map_err(|e| self.rejected("advance_welcome", e))?;

        self.state.set_step(next);
        self.begin_scenario(Scenario::Baseline);
        Ok(())
    }

    /// Records a rating for an area of the active scenario.
    ///
    /// Any area of the catalog may be rated while its scenario is active,
    /// revealed or not.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `value` is outside 0..=10 or `area_index` outside the catalog
    /// - `InvalidTransition` if `scenario` is not active or already frozen
    pub fn set_score(
        &mut self,
        scenario: Scenario,
        area_index: usize,
        value: i64,
    ) -> Result<(), DomainError> {
        let score = self
            .check_set_score(scenario, area_index, value)
            .map_err(|e| self.rejected("set_score", e))?;

        let progress = self
            .state
            .progress_mut(scenario)
            .ok_or_else(|| Self::not_active(scenario))?;
        progress.scores_mut().set(area_index, score)?;

        self.record_event(WizardEvent::ScoreRecorded {
            scenario,
            area_index,
            value: score.value(),
        });
        Ok(())
    }

    /// Presents the next area of the active scenario.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if `scenario` is not active or every area is shown
    pub fn reveal_next(&mut self, scenario: Scenario) -> Result<(), DomainError> {
        self.check_reveal(scenario)
            .map_err(|e| self.rejected("reveal_next", e))?;

        let progress = self
            .state
            .progress_mut(scenario)
            .ok_or_else(|| Self::not_active(scenario))?;
        progress.reveal_one();
        let area_index = progress.revealed_count() - 1;

        debug!(
            session_id = %self.session_id,
            scenario = %scenario,
            area_index,
            "Area revealed"
        );
        self.record_event(WizardEvent::AreaRevealed {
            scenario,
            area_index,
        });
        Ok(())
    }

    /// Freezes the active scenario and moves to the following step.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if `scenario` is not active or not fully revealed
    pub fn complete_scenario(&mut self, scenario: Scenario) -> Result<(), DomainError> {
        let next = self
            .check_complete(scenario)
            .map_err(|e| self.rejected("complete_scenario", e))?;

        let progress = self
            .state
            .progress_mut(scenario)
            .ok_or_else(|| Self::not_active(scenario))?;
        progress.scores_mut().freeze();
        self.state.set_step(next);

        debug!(
            session_id = %self.session_id,
            scenario = %scenario,
            step = %next,
            "Scenario completed"
        );
        self.record_event(WizardEvent::ScenarioCompleted { scenario });

        if next == WizardStep::Summary {
            self.record_event(WizardEvent::SummaryReached {
                session_id: self.session_id,
                reached_at: Timestamp::now(),
            });
        }
        Ok(())
    }

    /// Dismisses a scenario tutorial and begins that scenario.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the tutorial for `scenario` is showing
    pub fn acknowledge_tutorial(&mut self, scenario: Scenario) -> Result<(), DomainError> {
        let next = self
            .check_acknowledge(scenario)
            .map_err(|e| self.rejected("acknowledge_tutorial", e))?;

        self.state.mark_tutorial_seen(scenario);
        self.state.set_step(next);
        self.record_event(WizardEvent::TutorialAcknowledged { scenario });
        self.begin_scenario(scenario);
        Ok(())
    }

    /// Discards all answers and returns to Welcome. Always succeeds.
    pub fn reset(&mut self) {
        self.state = WizardState::initial();
        self.domain_events.clear();
        debug!(session_id = %self.session_id, "Wizard reset");
        self.record_event(WizardEvent::Reset {
            session_id: self.session_id,
            reset_at: Timestamp::now(),
        });
    }

    /// Closes the summary and returns to Welcome with nothing kept.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless on the Summary step
    pub fn finish(&mut self) -> Result<(), DomainError> {
        let current = self.state.step();
        if current != WizardStep::Summary {
            return Err(self.rejected(
                "finish",
                DomainError::invalid_transition("Only the summary can be finished")
                    .with_detail("step", current.to_string()),
            ));
        }
        current
            .transition_to(WizardStep::Welcome)
            .map_err(|e| self.rejected("finish", e))?;
        self.reset();
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Results
    // ───────────────────────────────────────────────────────────────

    /// Computes the summary of the three frozen scenarios.
    ///
    /// # Errors
    ///
    /// - `NotReady` before the Summary step
    pub fn summary(&self) -> Result<SummaryResult, DomainError> {
        let (baseline, money, time) = self.frozen_sets()?;
        SummaryCalculator::compute_summary(baseline, money, time)
    }

    /// Runs summary, recommendation and snapshot assembly in one go.
    ///
    /// # Errors
    ///
    /// - `NotReady` before the Summary step
    pub fn snapshot(
        &self,
        recommender: &ActionRecommender,
    ) -> Result<PersonalSnapshot, DomainError> {
        let (baseline, money, time) = self.frozen_sets()?;
        let summary = SummaryCalculator::compute_summary(baseline, money, time)?;
        let recommendation = recommender.recommend_all(&self.catalog, &summary)?;
        PersonalSnapshot::build(
            &self.catalog,
            ScenarioScores {
                baseline,
                money,
                time,
            },
            &summary,
            &recommendation,
        )
    }

    // ───────────────────────────────────────────────────────────────
    // Validation (no mutation)
    // ───────────────────────────────────────────────────────────────

    fn check_set_score(
        &self,
        scenario: Scenario,
        area_index: usize,
        value: i64,
    ) -> Result<Score, DomainError> {
        let score = Score::try_new(value)
            .map_err(|e| DomainError::from(e).with_detail("value", value.to_string()))?;
        self.catalog.require_area(area_index)?;

        let progress = self.require_active(scenario)?;
        if progress.is_frozen() {
            return Err(DomainError::invalid_transition(format!(
                "The {} scenario is already complete",
                scenario
            ))
            .with_detail("scenario", scenario.to_string()));
        }
        Ok(score)
    }

    fn check_reveal(&self, scenario: Scenario) -> Result<(), DomainError> {
        let progress = self.require_active(scenario)?;
        if progress.is_fully_revealed() {
            return Err(DomainError::invalid_transition(format!(
                "Every area of the {} scenario is already shown",
                scenario
            ))
            .with_detail("scenario", scenario.to_string()));
        }
        Ok(())
    }

    fn check_complete(&self, scenario: Scenario) -> Result<WizardStep, DomainError> {
        let progress = self.require_active(scenario)?;
        if !progress.is_fully_revealed() {
            return Err(DomainError::invalid_transition(format!(
                "Only {} of {} areas of the {} scenario have been shown",
                progress.revealed_count(),
                self.catalog.len(),
                scenario
            ))
            .with_detail("scenario", scenario.to_string())
            .with_detail("revealed_count", progress.revealed_count().to_string()));
        }

        let current = self.state.step();
        let next = current.next().ok_or_else(|| {
            DomainError::invalid_transition("No step follows the current one")
                .with_detail("step", current.to_string())
        })?;
        current.transition_to(next)
    }

    fn check_acknowledge(&self, scenario: Scenario) -> Result<WizardStep, DomainError> {
        let current = self.state.step();
        let expected = WizardStep::tutorial_step(scenario).ok_or_else(|| {
            DomainError::invalid_transition(format!("The {} scenario has no tutorial", scenario))
                .with_detail("scenario", scenario.to_string())
        })?;
        if current != expected {
            return Err(DomainError::invalid_transition(format!(
                "The {} tutorial is not showing",
                scenario
            ))
            .with_detail("scenario", scenario.to_string())
            .with_detail("step", current.to_string()));
        }
        current.transition_to(WizardStep::rating_step(scenario))
    }

    fn require_active(&self, scenario: Scenario) -> Result<&ScenarioProgress, DomainError> {
        if self.active_scenario() != Some(scenario) {
            return Err(Self::not_active(scenario)
                .with_detail("step", self.state.step().to_string()));
        }
        self.state
            .progress(scenario)
            .ok_or_else(|| Self::not_active(scenario))
    }

    fn frozen_sets(&self) -> Result<(&ScoreSet, &ScoreSet, &ScoreSet), DomainError> {
        if !self.is_complete() {
            return Err(DomainError::not_ready("The wizard has not reached the summary")
                .with_detail("step", self.state.step().to_string()));
        }
        let set = |scenario: Scenario| {
            self.score_set(scenario).ok_or_else(|| {
                DomainError::not_ready(format!("The {} scenario never started", scenario))
                    .with_detail("scenario", scenario.to_string())
            })
        };
        Ok((
            set(Scenario::Baseline)?,
            set(Scenario::Money)?,
            set(Scenario::Time)?,
        ))
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    fn begin_scenario(&mut self, scenario: Scenario) {
        let progress = ScenarioProgress::begin(self.catalog.len(), self.settings.default_score);
        self.state.begin_scenario(scenario, progress);

        debug!(
            session_id = %self.session_id,
            scenario = %scenario,
            step = %self.state.step(),
            "Scenario started"
        );
        self.record_event(WizardEvent::ScenarioStarted { scenario });
        self.record_event(WizardEvent::AreaRevealed {
            scenario,
            area_index: 0,
        });
    }

    fn not_active(scenario: Scenario) -> DomainError {
        DomainError::invalid_transition(format!("The {} scenario is not active", scenario))
            .with_detail("scenario", scenario.to_string())
    }

    fn rejected(&self, operation: &'static str, err: DomainError) -> DomainError {
        warn!(
            session_id = %self.session_id,
            operation,
            code = %err.code,
            step = %self.state.step(),
            "Wizard operation rejected: {}",
            err.message
        );
        err
    }

    fn record_event(&mut self, event: WizardEvent) {
        if let WizardEvent::ScoreRecorded {
            scenario,
            area_index,
            ..
        } = event
        {
            self.domain_events.retain(|pending| {
                !matches!(
                    pending,
                    WizardEvent::ScoreRecorded { scenario: s, area_index: i, .. }
                        if *s == scenario && *i == area_index
                )
            });
        }
        self.domain_events.push(event);
    }
}
