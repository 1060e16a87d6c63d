//! Scenario enum - the three rating contexts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The context a set of ratings is collected under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// How life feels right now.
    Baseline,
    /// With a full year's salary landing tomorrow.
    Money,
    /// With an extra 12 hours of free time every week.
    Time,
}

impl Scenario {
    /// The order scenarios are collected in.
    pub const ORDER: [Scenario; 3] = [Scenario::Baseline, Scenario::Money, Scenario::Time];

    /// Returns all scenarios in collection order.
    pub fn all() -> &'static [Scenario; 3] {
        &Self::ORDER
    }

    /// Returns the hypothetical scenarios compared against the baseline.
    pub fn hypotheticals() -> [Scenario; 2] {
        [Scenario::Money, Scenario::Time]
    }

    /// Returns the scenario that must be complete before this one starts.
    pub fn prerequisite(&self) -> Option<Scenario> {
        match self {
            Scenario::Baseline => None,
            Scenario::Money => Some(Scenario::Baseline),
            Scenario::Time => Some(Scenario::Money),
        }
    }

    /// Returns true if this scenario is introduced by a tutorial screen.
    pub fn has_tutorial(&self) -> bool {
        !matches!(self, Scenario::Baseline)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Baseline => "Now",
            Scenario::Money => "with $$$",
            Scenario::Time => "with Time",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scenario::Baseline => "baseline",
            Scenario::Money => "money",
            Scenario::Time => "time",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_baseline_money_time() {
        assert_eq!(
            Scenario::all(),
            &[Scenario::Baseline, Scenario::Money, Scenario::Time]
        );
    }

    #[test]
    fn prerequisites_chain_in_order() {
        assert_eq!(Scenario::Baseline.prerequisite(), None);
        assert_eq!(Scenario::Money.prerequisite(), Some(Scenario::Baseline));
        assert_eq!(Scenario::Time.prerequisite(), Some(Scenario::Money));
    }

    #[test]
    fn only_hypotheticals_have_tutorials() {
        assert!(!Scenario::Baseline.has_tutorial());
        assert!(Scenario::Money.has_tutorial());
        assert!(Scenario::Time.has_tutorial());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(serde_json::to_string(&Scenario::Money).unwrap(), "\"money\"");
        let parsed: Scenario = serde_json::from_str("\"time\"").unwrap();
        assert_eq!(parsed, Scenario::Time);
    }

    #[test]
    fn display_matches_serialized_name() {
        assert_eq!(Scenario::Baseline.to_string(), "baseline");
        assert_eq!(Scenario::Time.to_string(), "time");
    }
}
