//! Fixed guide copy that frames each scenario.

use serde::Serialize;

use crate::domain::foundation::Scenario;

/// Tutorial screen shown before a hypothetical scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TutorialCopy {
    pub headline: &'static str,
    pub question: &'static str,
}

/// Copy that frames the rating step of one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioGuide {
    pub scenario: Scenario,
    pub question: &'static str,
    pub instructions: &'static str,
    pub tutorial: Option<TutorialCopy>,
}

/// Reminder shown while only the first area of a scenario is revealed.
pub const REFLECTION_HINT: &str =
    "Let the question under each heading guide your reflection. There are no right answers here.";

/// Closing paragraph of the personal snapshot.
pub const KEY_TAKEAWAY: &str = "Money is only a tool \u{2013} its real power is the freedom and security it can buy. \
Yet time is a resource you can never earn back. This exercise shows where extra cash or extra hours would \
truly change your life, so you can aim for independence and contentment instead of simply chasing more \
money at the cost of other things.";

const BASELINE_GUIDE: ScenarioGuide = ScenarioGuide {
    scenario: Scenario::Baseline,
    question: "How are you really doing - right now?",
    instructions: "Slide to rate each part of your life from 0 (needs attention) to 10 (doing great).",
    tutorial: None,
};

const MONEY_GUIDE: ScenarioGuide = ScenarioGuide {
    scenario: Scenario::Money,
    question: "For each area, ask yourself: if you put extra money into it, what score do you think you could reach?",
    instructions: "Now slide to rate what you think your score in each factor will be from 0 (needs work) to 10 (thriving).",
    tutorial: Some(TutorialCopy {
        headline: "Now imagine a full year's salary lands in your bank account tomorrow.",
        question: "What would change?",
    }),
};

const TIME_GUIDE: ScenarioGuide = ScenarioGuide {
    scenario: Scenario::Time,
    question: "Ask yourself, how would more time affect these parts of your life?",
    instructions: "Now slide to rate what you think your score in each factor will be from 0 (needs work) to 10 (thriving).",
    tutorial: Some(TutorialCopy {
        headline: "Now imagine if you had an extra 12 hours of free time every week.",
        question: "What would you do?",
    }),
};

impl ScenarioGuide {
    /// Returns the guide for a scenario.
    pub fn for_scenario(scenario: Scenario) -> &'static ScenarioGuide {
        match scenario {
            Scenario::Baseline => &BASELINE_GUIDE,
            Scenario::Money => &MONEY_GUIDE,
            Scenario::Time => &TIME_GUIDE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_has_no_tutorial() {
        assert!(ScenarioGuide::for_scenario(Scenario::Baseline).tutorial.is_none());
    }

    #[test]
    fn hypotheticals_have_tutorials() {
        for scenario in Scenario::hypotheticals() {
            let guide = ScenarioGuide::for_scenario(scenario);
            assert_eq!(guide.scenario, scenario);
            assert!(guide.tutorial.is_some(), "{} should have a tutorial", scenario);
        }
    }

    #[test]
    fn time_tutorial_mentions_twelve_hours() {
        let tutorial = ScenarioGuide::for_scenario(Scenario::Time).tutorial.unwrap();
        assert!(tutorial.headline.contains("12 hours"));
    }
}
