//! WizardView - the serialisable state the rendering layer draws.

use serde::Serialize;

use crate::domain::catalog::{ScenarioGuide, TutorialCopy, REFLECTION_HINT};
use crate::domain::foundation::{Scenario, SessionId};
use crate::domain::wizard::{QuestionProgress, WizardEngine, WizardStep};

/// One revealed area of the active scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaView {
    pub index: usize,
    pub label: String,
    pub prompt: String,
    pub score: u8,
    /// Frozen baseline score, shown beside Money and Time ratings.
    pub baseline_reference: Option<u8>,
}

/// Snapshot of one session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardView {
    pub session_id: SessionId,
    pub step: WizardStep,
    pub progress: QuestionProgress,
    pub active_scenario: Option<Scenario>,
    pub guide: Option<ScenarioGuide>,
    pub tutorial: Option<TutorialCopy>,
    pub areas: Vec<AreaView>,
    pub hint: Option<&'static str>,
    pub is_complete: bool,
}

impl WizardView {
    /// Builds the view from the engine's current state.
    pub fn from_engine(engine: &WizardEngine) -> Self {
        let step = engine.current_step();
        let active_scenario = engine.active_scenario();

        let areas = match (active_scenario, engine.active_scenario_progress()) {
            (Some(scenario), Some(progress)) => engine
                .catalog()
                .areas()
                .iter()
                .enumerate()
                .take(progress.revealed_count())
                .map(|(index, area)| AreaView {
                    index,
                    label: area.label().to_string(),
                    prompt: area.prompt(scenario).to_string(),
                    score: progress
                        .scores()
                        .get(index)
                        .map(|s| s.value())
                        .unwrap_or_default(),
                    baseline_reference: match scenario {
                        Scenario::Baseline => None,
                        _ => engine.baseline_reference(index).ok().map(|s| s.value()),
                    },
                })
                .collect(),
            _ => Vec::new(),
        };

        let tutorial = step
            .tutorial_scenario()
            .and_then(|scenario| ScenarioGuide::for_scenario(scenario).tutorial);

        Self {
            session_id: engine.session_id(),
            step,
            progress: engine.question_progress(),
            active_scenario,
            guide: active_scenario.map(|scenario| *ScenarioGuide::for_scenario(scenario)),
            tutorial,
            areas,
            hint: engine.shows_hint().then_some(REFLECTION_HINT),
            is_complete: engine.is_complete(),
        }
    }
}
