//! Wizard domain events.
//!
//! The view layer drains these to decide what to animate; the engine itself
//! keeps no presentation state.

use crate::domain::foundation::{Scenario, SessionId, Timestamp};
use serde::Serialize;

/// Events that can occur during a wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardEvent {
    /// The wizard was (re)initialised at the Welcome step.
    Started {
        session_id: SessionId,
        started_at: Timestamp,
    },

    /// A scenario began collecting ratings.
    ScenarioStarted { scenario: Scenario },

    /// An area was presented to the user.
    AreaRevealed {
        scenario: Scenario,
        area_index: usize,
    },

    /// A rating was recorded.
    ScoreRecorded {
        scenario: Scenario,
        area_index: usize,
        value: u8,
    },

    /// A scenario's score set was frozen.
    ScenarioCompleted { scenario: Scenario },

    /// A scenario tutorial was acknowledged.
    TutorialAcknowledged { scenario: Scenario },

    /// All scenarios are frozen and the summary is available.
    SummaryReached {
        session_id: SessionId,
        reached_at: Timestamp,
    },

    /// All answers were discarded.
    Reset {
        session_id: SessionId,
        reset_at: Timestamp,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let event = WizardEvent::AreaRevealed {
            scenario: Scenario::Money,
            area_index: 2,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "area_revealed");
        assert_eq!(json["scenario"], "money");
        assert_eq!(json["area_index"], 2);
    }
}
