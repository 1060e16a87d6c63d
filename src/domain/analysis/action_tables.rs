//! Action tables - curated actions per life area and the fallback copy.
//!
//! Tables are plain data. The built-in set is exposed through
//! [`ActionTables::standard`]; an adapter may load a replacement from disk,
//! after which [`ActionTables::validate`] must pass before use.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Scenario};

/// Which fallback message applies when an area has no curated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackTier {
    DoingWell,
    Balanced,
    OnTrack,
    StartSmall,
}

impl FallbackTier {
    /// Baseline average at or above which the user is considered to be doing well.
    pub const DOING_WELL_AVERAGE: f64 = 8.0;

    /// Jumps smaller than this mean the scenario changes little.
    pub const BALANCED_DELTA: f64 = 2.0;

    /// Baseline average at or above which the user is on track.
    pub const ON_TRACK_AVERAGE: f64 = 6.0;

    /// Picks the tier for a jump and the overall baseline average.
    ///
    /// Rules are evaluated in order and the first match wins.
    pub fn select(delta: f64, baseline_average: f64) -> Self {
        if baseline_average >= Self::DOING_WELL_AVERAGE {
            FallbackTier::DoingWell
        } else if delta < Self::BALANCED_DELTA {
            FallbackTier::Balanced
        } else if baseline_average >= Self::ON_TRACK_AVERAGE {
            FallbackTier::OnTrack
        } else {
            FallbackTier::StartSmall
        }
    }
}

/// The four fallback messages of one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackCopy {
    pub doing_well: String,
    pub balanced: String,
    pub on_track: String,
    pub start_small: String,
}

impl FallbackCopy {
    /// Returns the message for a tier.
    pub fn text(&self, tier: FallbackTier) -> &str {
        match tier {
            FallbackTier::DoingWell => &self.doing_well,
            FallbackTier::Balanced => &self.balanced,
            FallbackTier::OnTrack => &self.on_track,
            FallbackTier::StartSmall => &self.start_small,
        }
    }

    fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("doing_well", &self.doing_well),
            ("balanced", &self.balanced),
            ("on_track", &self.on_track),
            ("start_small", &self.start_small),
        ]
    }
}

/// Curated actions keyed by exact area label, plus the fallback copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioActions {
    #[serde(default)]
    pub curated: BTreeMap<String, String>,
    pub fallback: FallbackCopy,
}

impl ScenarioActions {
    /// Returns the curated action for an area label, if there is one.
    pub fn curated_for(&self, label: &str) -> Option<&str> {
        self.curated.get(label).map(String::as_str)
    }
}

/// Action content for both hypothetical scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTables {
    pub money: ScenarioActions,
    pub time: ScenarioActions,
}

impl ActionTables {
    /// Returns the built-in tables.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Returns the actions of a hypothetical scenario; None for Baseline.
    pub fn for_scenario(&self, scenario: Scenario) -> Option<&ScenarioActions> {
        match scenario {
            Scenario::Baseline => None,
            Scenario::Money => Some(&self.money),
            Scenario::Time => Some(&self.time),
        }
    }

    /// Checks that no label or text is blank.
    ///
    /// # Errors
    ///
    /// - `InvalidContent` naming the offending scenario and entry
    pub fn validate(&self) -> Result<(), DomainError> {
        for scenario in Scenario::hypotheticals() {
            let Some(actions) = self.for_scenario(scenario) else {
                continue;
            };

            for (label, text) in &actions.curated {
                if label.trim().is_empty() {
                    return Err(DomainError::invalid_content(format!(
                        "Curated {} action has an empty area label",
                        scenario
                    ))
                    .with_detail("scenario", scenario.to_string()));
                }
                if text.trim().is_empty() {
                    return Err(DomainError::invalid_content(format!(
                        "Curated {} action for '{}' is empty",
                        scenario, label
                    ))
                    .with_detail("scenario", scenario.to_string())
                    .with_detail("label", label.clone()));
                }
            }

            for (tier, text) in actions.fallback.entries() {
                if text.trim().is_empty() {
                    return Err(DomainError::invalid_content(format!(
                        "Fallback {} text '{}' is empty",
                        scenario, tier
                    ))
                    .with_detail("scenario", scenario.to_string())
                    .with_detail("tier", tier));
                }
            }
        }
        Ok(())
    }
}

impl Default for ActionTables {
    fn default() -> Self {
        Self::standard()
    }
}

fn table(rows: &[(&str, &str)]) -> BTreeMap<String, String> {
    rows.iter()
        .map(|(label, text)| (label.to_string(), text.to_string()))
        .collect()
}

static STANDARD: Lazy<ActionTables> = Lazy::new(|| ActionTables {
    money: ScenarioActions {
        curated: table(&[
            (
                "Family & Connections",
                "Create a \"relationship fund\" for trips, shared meals or meaningful gifts. \
                 Schedule one experience this month and pay for it upfront so it really happens.",
            ),
            (
                "Career & Income",
                "Invest in a skill course, mentor or certification that advances you toward a \
                 role you truly want. Treat it as a high-return asset, not an expense.",
            ),
            (
                "Lifestyle, Spending & Fun",
                "Pre-plan fun experiences (concert, adventure day) instead of impulse buys to \
                 ensure lasting happiness.",
            ),
            (
                "Housing, Safety & Security",
                "Build or top-up an emergency fund (3-6 months expenses) or pay down \
                 high-interest debt. This single move reduces financial anxiety quickly.",
            ),
            (
                "Giving & Contribution",
                "Automate a monthly donation or set up a giving-pot for spontaneous causes. \
                 Align with values so generosity becomes a habit, not an after-thought.",
            ),
        ]),
        fallback: FallbackCopy {
            doing_well: "You're already thriving across most areas. Park any extra money in a \
                         long-term investment or giving fund so it keeps supporting the life \
                         you've built."
                .to_string(),
            balanced: "Extra money wouldn't shift much for you, which means your finances and \
                       life are already fairly balanced. Protect that balance before chasing \
                       more income."
                .to_string(),
            on_track: "You're on the right track. Review your monthly spending and redirect one \
                       recurring cost toward the area you rated highest with extra money."
                .to_string(),
            start_small: "Start small: pick the area that jumped the most and set aside a \
                          modest, automatic amount for it each payday."
                .to_string(),
        },
    },
    time: ScenarioActions {
        curated: table(&[
            (
                "Family & Connections",
                "Schedule a weekly device-free meal or call with loved ones. Consistency \
                 matters more than extravagant plans.",
            ),
            (
                "Career & Income",
                "Dedicate one evening a week to career reflection, networking or portfolio \
                 projects that align with long-term goals.",
            ),
            (
                "Lifestyle, Spending & Fun",
                "Reserve at least half a day each month for a low-cost hobby or local \
                 adventure you keep postponing.",
            ),
            (
                "Housing, Safety & Security",
                "Use a weekend block to review insurance, create a household emergency plan, \
                 or declutter to make your home feel safer.",
            ),
            (
                "Giving & Contribution",
                "Pledge two hours a month to a cause you care about (mentoring, community \
                 clean-up). Put the first date in your calendar now.",
            ),
        ]),
        fallback: FallbackCopy {
            doing_well: "You're already making good use of your time. Guard your current \
                         routines and say no to commitments that would crowd them out."
                .to_string(),
            balanced: "More free time wouldn't change much for you, a sign your schedule \
                       already fits your priorities. Keep protecting that rhythm."
                .to_string(),
            on_track: "You're on the right track. Audit one week of your calendar and swap a \
                       low-value hour for the area that gained most with extra time."
                .to_string(),
            start_small: "Start small: block a single 30-minute session this week for the \
                          area that jumped the most, and build from there."
                .to_string(),
        },
    },
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::AreaCatalog;
    use crate::domain::foundation::ErrorCode;

    // ───────────────────────────────────────────────────────────────
    // FallbackTier
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn high_average_wins_regardless_of_delta() {
        assert_eq!(FallbackTier::select(0.0, 9.0), FallbackTier::DoingWell);
        assert_eq!(FallbackTier::select(10.0, 8.0), FallbackTier::DoingWell);
    }

    #[test]
    fn small_delta_is_balanced() {
        assert_eq!(FallbackTier::select(1.0, 7.9), FallbackTier::Balanced);
        assert_eq!(FallbackTier::select(-4.0, 2.0), FallbackTier::Balanced);
    }

    #[test]
    fn mid_average_with_real_jump_is_on_track() {
        assert_eq!(FallbackTier::select(2.0, 6.0), FallbackTier::OnTrack);
        assert_eq!(FallbackTier::select(5.0, 7.9), FallbackTier::OnTrack);
    }

    #[test]
    fn low_average_with_real_jump_starts_small() {
        assert_eq!(FallbackTier::select(2.0, 5.9), FallbackTier::StartSmall);
        assert_eq!(FallbackTier::select(6.0, 0.0), FallbackTier::StartSmall);
    }

    // ───────────────────────────────────────────────────────────────
    // Standard tables
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn standard_tables_are_valid() {
        assert!(ActionTables::standard().validate().is_ok());
    }

    #[test]
    fn curated_labels_match_catalog_labels() {
        let catalog = AreaCatalog::standard();
        let tables = ActionTables::standard();
        for actions in [&tables.money, &tables.time] {
            assert_eq!(actions.curated.len(), 5);
            for label in actions.curated.keys() {
                assert!(catalog.find_by_label(label).is_some(), "unknown label {}", label);
            }
        }
    }

    #[test]
    fn health_and_growth_have_no_curated_action() {
        let tables = ActionTables::standard();
        for actions in [&tables.money, &tables.time] {
            assert!(actions.curated_for("Health & Well-being").is_none());
            assert!(actions.curated_for("Personal Growth & Purpose").is_none());
        }
    }

    #[test]
    fn baseline_has_no_actions() {
        assert!(ActionTables::standard().for_scenario(Scenario::Baseline).is_none());
    }

    // ───────────────────────────────────────────────────────────────
    // validate
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn blank_fallback_text_is_rejected() {
        let mut tables = ActionTables::standard();
        tables.time.fallback.on_track = "  ".to_string();

        let err = tables.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidContent);
        assert_eq!(err.detail("scenario"), Some("time"));
        assert_eq!(err.detail("tier"), Some("on_track"));
    }

    #[test]
    fn blank_curated_text_is_rejected() {
        let mut tables = ActionTables::standard();
        tables
            .money
            .curated
            .insert("Career & Income".to_string(), String::new());

        let err = tables.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidContent);
        assert_eq!(err.detail("label"), Some("Career & Income"));
    }

    #[test]
    fn tables_deserialize_from_json_without_curated_entries() {
        let json = serde_json::json!({
            "money": { "fallback": {
                "doing_well": "a", "balanced": "b", "on_track": "c", "start_small": "d"
            }},
            "time": { "fallback": {
                "doing_well": "e", "balanced": "f", "on_track": "g", "start_small": "h"
            }}
        });
        let tables: ActionTables = serde_json::from_value(json).unwrap();
        assert!(tables.money.curated.is_empty());
        assert_eq!(tables.time.fallback.text(FallbackTier::StartSmall), "h");
        assert!(tables.validate().is_ok());
    }
}
