//! Personal snapshot - the read model handed to the export layer.

use serde::Serialize;

use super::{ActionRecommendation, SummaryResult};
use crate::domain::catalog::{AreaCatalog, KEY_TAKEAWAY};
use crate::domain::foundation::{DomainError, Scenario};
use crate::domain::scoring::{Average, ScoreSet};

/// The three frozen score sets a snapshot is built from.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioScores<'a> {
    pub baseline: &'a ScoreSet,
    pub money: &'a ScoreSet,
    pub time: &'a ScoreSet,
}

impl<'a> ScenarioScores<'a> {
    fn for_scenario(&self, scenario: Scenario) -> &'a ScoreSet {
        match scenario {
            Scenario::Baseline => self.baseline,
            Scenario::Money => self.money,
            Scenario::Time => self.time,
        }
    }
}

/// Averages formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotAverages {
    pub baseline: String,
    pub money: String,
    pub time: String,
}

/// The "biggest jump" card of one hypothetical scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JumpCard {
    pub scenario: Scenario,
    pub area_label: String,
    pub delta: String,
    pub action_text: String,
}

/// One life area across the three scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaRow {
    pub label: String,
    pub baseline: u8,
    pub money: u8,
    pub time: u8,
    pub money_delta: i8,
    pub time_delta: i8,
}

/// Everything the shareable summary shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalSnapshot {
    pub averages: SnapshotAverages,
    pub money_jump: JumpCard,
    pub time_jump: JumpCard,
    pub rows: Vec<AreaRow>,
    pub key_takeaway: String,
}

impl PersonalSnapshot {
    /// Assembles the snapshot.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if a score set or jump does not line up with the catalog
    pub fn build(
        catalog: &AreaCatalog,
        scores: ScenarioScores<'_>,
        summary: &SummaryResult,
        recommendation: &ActionRecommendation,
    ) -> Result<Self, DomainError> {
        for scenario in Scenario::all() {
            let set = scores.for_scenario(*scenario);
            if set.len() != catalog.len() {
                return Err(DomainError::invalid_input(
                    "scores",
                    format!(
                        "{} scores has {} entries, catalog has {}",
                        scenario,
                        set.len(),
                        catalog.len()
                    ),
                )
                .with_detail("scenario", scenario.to_string()));
            }
        }

        let rows = catalog
            .areas()
            .iter()
            .enumerate()
            .map(|(i, area)| {
                let baseline = scores.baseline.get(i).unwrap_or_default();
                let money = scores.money.get(i).unwrap_or_default();
                let time = scores.time.get(i).unwrap_or_default();
                AreaRow {
                    label: area.label().to_string(),
                    baseline: baseline.value(),
                    money: money.value(),
                    time: time.value(),
                    money_delta: money.delta_from(baseline),
                    time_delta: time.delta_from(baseline),
                }
            })
            .collect();

        Ok(Self {
            averages: SnapshotAverages {
                baseline: format_average(summary.averages.baseline),
                money: format_average(summary.averages.money),
                time: format_average(summary.averages.time),
            },
            money_jump: jump_card(catalog, summary, recommendation, Scenario::Money)?,
            time_jump: jump_card(catalog, summary, recommendation, Scenario::Time)?,
            rows,
            key_takeaway: KEY_TAKEAWAY.to_string(),
        })
    }
}

/// Formats an average as `x.y/10`, or `-` when undefined.
pub fn format_average(average: Option<Average>) -> String {
    match average {
        Some(avg) => format!("{}/10", avg),
        None => "-".to_string(),
    }
}

fn jump_card(
    catalog: &AreaCatalog,
    summary: &SummaryResult,
    recommendation: &ActionRecommendation,
    scenario: Scenario,
) -> Result<JumpCard, DomainError> {
    let jump = summary
        .biggest_jump
        .for_scenario(scenario)
        .ok_or_else(|| DomainError::invalid_input("scenario", "Baseline has no jump card"))?;
    let area = catalog.require_area(jump.area_index)?;
    Ok(JumpCard {
        scenario,
        area_label: area.label().to_string(),
        delta: jump.display_delta(),
        action_text: recommendation.text(scenario).unwrap_or_default().to_string(),
    })
}
