//! AreaCatalog - the ordered, immutable list of life areas.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::{LifeArea, ScenarioGuide, ScenarioPrompts};
use crate::domain::foundation::{AreaId, DomainError, Scenario};

/// Number of life areas every catalog holds.
pub const AREA_COUNT: usize = 7;

static STANDARD: Lazy<AreaCatalog> =
    Lazy::new(|| standard_table().expect("Built-in area table must form a valid catalog"));

fn standard_table() -> Result<AreaCatalog, DomainError> {
    let rows: [(&str, &str, [&str; 3]); AREA_COUNT] = [
        (
            "health",
            "Health & Well-being",
            [
                "How am I doing mentally and physically?",
                "Better nutrition, gym/therapy, medical checks, or more harmful activities?",
                "More rest, exercise, meal prep or routine to boost energy?",
            ],
        ),
        (
            "family",
            "Family & Connections",
            [
                "Do I have people I rely on and who rely on me?",
                "Fun visits, shared trips, thoughtful gifts or higher expectations?",
                "Could deeper, unhurried time strengthen key relationships?",
            ],
        ),
        (
            "career",
            "Career & Income",
            [
                "Do I earn enough for the life I want, in a career that feels right?",
                "More likely to move towards the right career for you?",
                "Would extra hours let you pursue training or a passion project?",
            ],
        ),
        (
            "lifestyle",
            "Lifestyle, Spending & Fun",
            [
                "Do I spend intentionally on joy, or just impulse?",
                "Budget for meaningful hobbies & travel, or just more spending?",
                "If you had more free time, would you feel richer experiences?",
            ],
        ),
        (
            "housing",
            "Housing, Safety & Security",
            [
                "Does my living situation support or stress me?",
                "Ability to build emergency fund, clear debt, improve home safety?",
                "With time to organise, maintain or move, would you feel safer?",
            ],
        ),
        (
            "giving",
            "Giving & Contribution",
            [
                "Do I give time or money to causes I care about?",
                "Would your giving increase either in money, time or impact?",
                "How much more impact could extra volunteer hours create?",
            ],
        ),
        (
            "growth",
            "Personal Growth & Purpose",
            [
                "Am I learning and moving toward my purpose?",
                "Coaching, retreats, further study, purpose projects or less motivation?",
                "Could quiet blocks for reading or reflection fuel personal growth?",
            ],
        ),
    ];

    let areas = rows
        .into_iter()
        .map(|(id, label, [baseline, money, time])| -> Result<LifeArea, DomainError> {
            let id = AreaId::new(id)?;
            Ok(LifeArea::new(
                id,
                label,
                ScenarioPrompts::new(baseline, money, time),
            )?)
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    AreaCatalog::new(areas)
}

/// Ordered list of the life areas rated in every scenario.
///
/// # Invariants
///
/// - exactly [`AREA_COUNT`] areas
/// - ids are unique
/// - order never changes after construction; score sets are index-aligned to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaCatalog {
    areas: Vec<LifeArea>,
}

impl AreaCatalog {
    /// Builds a catalog from injected areas.
    ///
    /// # Errors
    ///
    /// - `InvalidContent` if the count is not [`AREA_COUNT`] or an id repeats
    pub fn new(areas: Vec<LifeArea>) -> Result<Self, DomainError> {
        if areas.len() != AREA_COUNT {
            return Err(DomainError::invalid_content(format!(
                "Catalog must hold exactly {} areas, got {}",
                AREA_COUNT,
                areas.len()
            ))
            .with_detail("count", areas.len().to_string()));
        }

        let mut seen = HashSet::new();
        for area in &areas {
            if !seen.insert(area.id().clone()) {
                return Err(DomainError::invalid_content(format!(
                    "Duplicate area id '{}'",
                    area.id()
                ))
                .with_detail("area_id", area.id().as_str()));
            }
        }

        Ok(Self { areas })
    }

    /// Returns the built-in seven-area catalog.
    ///
    /// # Panics
    ///
    /// This function will never panic because the built-in table is validated
    /// by `AreaCatalog::new` in the test suite.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Returns all areas in display order.
    pub fn areas(&self) -> &[LifeArea] {
        &self.areas
    }

    /// Returns the number of areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Returns true if the catalog holds no areas (never true for a valid catalog).
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Returns the area at a catalog index.
    pub fn area(&self, index: usize) -> Option<&LifeArea> {
        self.areas.get(index)
    }

    /// Returns the area at a catalog index, or `InvalidInput`.
    pub fn require_area(&self, index: usize) -> Result<&LifeArea, DomainError> {
        self.area(index).ok_or_else(|| {
            DomainError::invalid_input(
                "area_index",
                format!("Area index {} is outside 0..{}", index, self.len()),
            )
            .with_detail("area_index", index.to_string())
        })
    }

    /// Finds an area by its stable id.
    pub fn find_by_id(&self, id: &str) -> Option<(usize, &LifeArea)> {
        self.areas
            .iter()
            .enumerate()
            .find(|(_, area)| area.id().as_str() == id)
    }

    /// Finds an area by its exact display label.
    pub fn find_by_label(&self, label: &str) -> Option<(usize, &LifeArea)> {
        self.areas
            .iter()
            .enumerate()
            .find(|(_, area)| area.label() == label)
    }

    /// Returns the prompt for an area under a scenario.
    pub fn prompt(&self, index: usize, scenario: Scenario) -> Option<&str> {
        self.area(index).map(|area| area.prompt(scenario))
    }

    /// Returns the guide copy framing a scenario.
    pub fn guide(&self, scenario: Scenario) -> &'static ScenarioGuide {
        ScenarioGuide::for_scenario(scenario)
    }
}

impl Default for AreaCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
