//! Summary Calculator - averages and biggest jumps across the three scenarios.

use serde::Serialize;
use tracing::debug;

use crate::domain::catalog::AREA_COUNT;
use crate::domain::foundation::{DomainError, Scenario};
use crate::domain::scoring::{Average, ScoreSet};

/// The area whose rating rose the most (or fell the least) under a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BiggestJump {
    pub area_index: usize,
    /// Exact `scenario - baseline` difference for the area.
    pub delta: i8,
}

impl BiggestJump {
    /// Returns the delta as a float.
    pub fn delta_value(&self) -> f64 {
        f64::from(self.delta)
    }

    /// Returns the delta rounded to one decimal for display (`+3.0`, `-1.0`).
    pub fn display_delta(&self) -> String {
        format!("{:+.1}", self.delta_value())
    }
}

/// Rounded mean per scenario; `None` when a set has no entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioAverages {
    pub baseline: Option<Average>,
    pub money: Option<Average>,
    pub time: Option<Average>,
}

impl ScenarioAverages {
    /// Returns the average for a scenario.
    pub fn for_scenario(&self, scenario: Scenario) -> Option<Average> {
        match scenario {
            Scenario::Baseline => self.baseline,
            Scenario::Money => self.money,
            Scenario::Time => self.time,
        }
    }
}

/// Biggest jump per hypothetical scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BiggestJumps {
    pub money: BiggestJump,
    pub time: BiggestJump,
}

impl BiggestJumps {
    /// Returns the jump for a hypothetical scenario; None for Baseline.
    pub fn for_scenario(&self, scenario: Scenario) -> Option<BiggestJump> {
        match scenario {
            Scenario::Baseline => None,
            Scenario::Money => Some(self.money),
            Scenario::Time => Some(self.time),
        }
    }
}

/// Result of comparing the three frozen score sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryResult {
    pub averages: ScenarioAverages,
    pub biggest_jump: BiggestJumps,
    /// Per-area `money - baseline`, catalog order.
    pub money_deltas: Vec<i8>,
    /// Per-area `time - baseline`, catalog order.
    pub time_deltas: Vec<i8>,
}

impl SummaryResult {
    /// Returns the per-area deltas for a hypothetical scenario.
    pub fn deltas(&self, scenario: Scenario) -> Option<&[i8]> {
        match scenario {
            Scenario::Baseline => None,
            Scenario::Money => Some(&self.money_deltas),
            Scenario::Time => Some(&self.time_deltas),
        }
    }
}

/// Stateless calculator for the wizard summary.
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// Computes averages, per-area deltas and biggest jumps.
    ///
    /// # Errors
    ///
    /// - `NotReady` if any set is still open or does not hold one score per area
    pub fn compute_summary(
        baseline: &ScoreSet,
        money: &ScoreSet,
        time: &ScoreSet,
    ) -> Result<SummaryResult, DomainError> {
        for (scenario, set) in [
            (Scenario::Baseline, baseline),
            (Scenario::Money, money),
            (Scenario::Time, time),
        ] {
            Self::ensure_ready(scenario, set)?;
        }

        let money_deltas = money.deltas_from(baseline);
        let time_deltas = time.deltas_from(baseline);

        let money_jump = Self::biggest_jump(&money_deltas)
            .ok_or_else(|| DomainError::not_ready("Money deltas are empty"))?;
        let time_jump = Self::biggest_jump(&time_deltas)
            .ok_or_else(|| DomainError::not_ready("Time deltas are empty"))?;

        let result = SummaryResult {
            averages: ScenarioAverages {
                baseline: baseline.average(),
                money: money.average(),
                time: time.average(),
            },
            biggest_jump: BiggestJumps {
                money: money_jump,
                time: time_jump,
            },
            money_deltas,
            time_deltas,
        };

        debug!(
            money_jump_area = result.biggest_jump.money.area_index,
            time_jump_area = result.biggest_jump.time.area_index,
            "Computed wizard summary"
        );

        Ok(result)
    }

    /// Returns the index of the largest delta.
    ///
    /// Ties go to the earliest index. There is no floor at zero: when every
    /// delta is negative the least negative one is reported.
    pub fn biggest_jump(deltas: &[i8]) -> Option<BiggestJump> {
        let mut best: Option<BiggestJump> = None;
        for (area_index, delta) in deltas.iter().copied().enumerate() {
            let improves = best.map_or(true, |b| delta > b.delta);
            if improves {
                best = Some(BiggestJump { area_index, delta });
            }
        }
        best
    }

    fn ensure_ready(scenario: Scenario, set: &ScoreSet) -> Result<(), DomainError> {
        if !set.is_frozen() {
            return Err(DomainError::not_ready(format!(
                "The {} scenario has not been completed",
                scenario
            ))
            .with_detail("scenario", scenario.to_string()));
        }
        if set.len() != AREA_COUNT {
            return Err(DomainError::not_ready(format!(
                "The {} scenario holds {} scores, expected {}",
                scenario,
                set.len(),
                AREA_COUNT
            ))
            .with_detail("scenario", scenario.to_string()));
        }
        Ok(())
    }
}
