//! Action Recommender - turns a biggest jump into a suggested action.

use std::sync::Arc;

use serde::Serialize;
use tracing::trace;

use super::{ActionTables, FallbackTier, SummaryResult};
use crate::domain::catalog::{AreaCatalog, LifeArea};
use crate::domain::foundation::{DomainError, Scenario};

/// Where a recommended action came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "tier", rename_all = "snake_case")]
pub enum ActionSource {
    /// Exact label match in the curated table.
    Curated,
    /// No curated entry; the heuristic picked this tier.
    Fallback(FallbackTier),
}

/// A recommended action and its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub text: String,
    pub source: ActionSource,
}

/// Action text for both hypothetical scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRecommendation {
    pub money_action_text: String,
    pub money_source: ActionSource,
    pub time_action_text: String,
    pub time_source: ActionSource,
}

impl ActionRecommendation {
    /// Returns the action text for a hypothetical scenario.
    pub fn text(&self, scenario: Scenario) -> Option<&str> {
        match scenario {
            Scenario::Baseline => None,
            Scenario::Money => Some(&self.money_action_text),
            Scenario::Time => Some(&self.time_action_text),
        }
    }
}

/// Looks up curated actions and falls back to tiered copy.
///
/// Holds immutable tables injected at construction.
#[derive(Debug, Clone)]
pub struct ActionRecommender {
    tables: Arc<ActionTables>,
}

impl ActionRecommender {
    /// Creates a recommender over validated tables.
    ///
    /// # Errors
    ///
    /// - `InvalidContent` if the tables contain blank entries
    pub fn new(tables: ActionTables) -> Result<Self, DomainError> {
        tables.validate()?;
        Ok(Self {
            tables: Arc::new(tables),
        })
    }

    /// Creates a recommender over the built-in tables.
    pub fn standard() -> Self {
        Self {
            tables: Arc::new(ActionTables::standard()),
        }
    }

    /// Returns the tables in use.
    pub fn tables(&self) -> &ActionTables {
        &self.tables
    }

    /// Returns the action text for the area that jumped most.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for the Baseline scenario, which has no actions
    pub fn recommend(
        &self,
        scenario: Scenario,
        area: &LifeArea,
        delta: f64,
        baseline_average: f64,
    ) -> Result<&str, DomainError> {
        let actions = self.tables.for_scenario(scenario).ok_or_else(|| {
            DomainError::invalid_input("scenario", "Baseline has no recommended actions")
        })?;

        if let Some(text) = actions.curated_for(area.label()) {
            trace!(scenario = %scenario, area = %area.id(), "Curated action matched");
            return Ok(text);
        }

        let tier = FallbackTier::select(delta, baseline_average);
        trace!(scenario = %scenario, area = %area.id(), ?tier, "Fallback action selected");
        Ok(actions.fallback.text(tier))
    }

    /// Same as [`recommend`](Self::recommend) but also reports the source.
    pub fn recommend_detailed(
        &self,
        scenario: Scenario,
        area: &LifeArea,
        delta: f64,
        baseline_average: f64,
    ) -> Result<Recommendation, DomainError> {
        let text = self.recommend(scenario, area, delta, baseline_average)?;
        let curated = self
            .tables
            .for_scenario(scenario)
            .and_then(|actions| actions.curated_for(area.label()))
            .is_some();
        let source = if curated {
            ActionSource::Curated
        } else {
            ActionSource::Fallback(FallbackTier::select(delta, baseline_average))
        };
        Ok(Recommendation {
            text: text.to_string(),
            source,
        })
    }

    /// Recommends an action for both hypothetical scenarios of a summary.
    ///
    /// Uses each scenario's biggest jump and the rounded baseline average.
    ///
    /// # Errors
    ///
    /// - `NotReady` if the summary has no baseline average
    /// - `InvalidInput` if a jump points outside the catalog
    pub fn recommend_all(
        &self,
        catalog: &AreaCatalog,
        summary: &SummaryResult,
    ) -> Result<ActionRecommendation, DomainError> {
        let baseline_average = summary
            .averages
            .baseline
            .map(f64::from)
            .ok_or_else(|| DomainError::not_ready("Baseline average is undefined"))?;

        let money = self.recommend_for_jump(catalog, summary, Scenario::Money, baseline_average)?;
        let time = self.recommend_for_jump(catalog, summary, Scenario::Time, baseline_average)?;

        Ok(ActionRecommendation {
            money_action_text: money.text,
            money_source: money.source,
            time_action_text: time.text,
            time_source: time.source,
        })
    }

    fn recommend_for_jump(
        &self,
        catalog: &AreaCatalog,
        summary: &SummaryResult,
        scenario: Scenario,
        baseline_average: f64,
    ) -> Result<Recommendation, DomainError> {
        let jump = summary.biggest_jump.for_scenario(scenario).ok_or_else(|| {
            DomainError::invalid_input("scenario", "Baseline has no biggest jump")
        })?;
        let area = catalog.require_area(jump.area_index)?;
        self.recommend_detailed(scenario, area, jump.delta_value(), baseline_average)
    }
}

impl Default for ActionRecommender {
    fn default() -> Self {
        Self::standard()
    }
}
