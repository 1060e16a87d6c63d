//! Full wizard runs through the public engine API.

use std::sync::Arc;

use life_balance::domain::analysis::{ActionRecommender, ActionSource, FallbackTier};
use life_balance::domain::catalog::AreaCatalog;
use life_balance::domain::foundation::{ErrorCode, Scenario};
use life_balance::domain::wizard::{WizardEngine, WizardEvent, WizardState, WizardStep};

fn new_engine() -> WizardEngine {
    WizardEngine::new(Arc::new(AreaCatalog::standard()))
}

/// Rates every area of the active scenario, revealing as it goes.
fn rate_scenario(engine: &mut WizardEngine, scenario: Scenario, values: [i64; 7]) {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            engine.reveal_next(scenario).unwrap();
        }
        engine.set_score(scenario, index, *value).unwrap();
    }
    engine.complete_scenario(scenario).unwrap();
}

fn run(baseline: [i64; 7], money: [i64; 7], time: [i64; 7]) -> WizardEngine {
    let mut engine = new_engine();
    engine.advance_welcome().unwrap();
    rate_scenario(&mut engine, Scenario::Baseline, baseline);
    engine.acknowledge_tutorial(Scenario::Money).unwrap();
    rate_scenario(&mut engine, Scenario::Money, money);
    engine.acknowledge_tutorial(Scenario::Time).unwrap();
    rate_scenario(&mut engine, Scenario::Time, time);
    engine
}

#[test]
fn reference_session_produces_expected_summary() {
    let engine = run([5; 7], [8, 5, 5, 5, 5, 5, 5], [5, 5, 5, 5, 5, 7, 5]);

    assert_eq!(engine.current_step(), WizardStep::Summary);
    let summary = engine.summary().unwrap();

    assert_eq!(summary.averages.baseline.unwrap().value(), 5.0);
    assert_eq!(summary.averages.money.unwrap().value(), 5.7);
    assert_eq!(summary.averages.time.unwrap().value(), 5.3);
    assert_eq!(summary.biggest_jump.money.area_index, 0);
    assert_eq!(summary.biggest_jump.money.display_delta(), "+3.0");
    assert_eq!(summary.biggest_jump.time.area_index, 5);
    assert_eq!(summary.biggest_jump.time.display_delta(), "+2.0");
}

#[test]
fn reference_session_recommends_actions() {
    let engine = run([5; 7], [8, 5, 5, 5, 5, 5, 5], [5, 5, 5, 5, 5, 7, 5]);
    let recommender = ActionRecommender::standard();
    let summary = engine.summary().unwrap();

    let rec = recommender.recommend_all(engine.catalog(), &summary).unwrap();

    // Health has no curated money action; +3 jump at a 5.0 baseline starts small.
    assert_eq!(rec.money_source, ActionSource::Fallback(FallbackTier::StartSmall));
    assert_eq!(rec.money_action_text, recommender.tables().money.fallback.start_small);
    // Giving is curated for time.
    assert_eq!(rec.time_source, ActionSource::Curated);
    assert_eq!(
        Some(rec.time_action_text.as_str()),
        recommender.tables().time.curated_for("Giving & Contribution")
    );
}

#[test]
fn round_half_up_average() {
    let engine = run([5, 6, 5, 6, 5, 6, 5], [5; 7], [5; 7]);
    let summary = engine.summary().unwrap();
    assert_eq!(summary.averages.baseline.unwrap().value(), 5.4);
    assert_eq!(summary.averages.baseline.unwrap().to_string(), "5.4");
}

#[test]
fn tie_goes_to_earliest_area() {
    let engine = run([5; 7], [5, 5, 9, 5, 9, 5, 5], [6, 6, 6, 6, 6, 6, 6]);
    for _ in 0..5 {
        let summary = engine.summary().unwrap();
        assert_eq!(summary.biggest_jump.money.area_index, 2);
        assert_eq!(summary.biggest_jump.time.area_index, 0);
    }
}

#[test]
fn all_negative_deltas_still_report_a_jump() {
    let engine = run([9; 7], [3, 4, 8, 2, 1, 0, 5], [8; 7]);
    let summary = engine.summary().unwrap();
    assert_eq!(summary.biggest_jump.money.area_index, 2);
    assert_eq!(summary.biggest_jump.money.delta, -1);
    assert_eq!(summary.biggest_jump.money.display_delta(), "-1.0");
}

#[test]
fn high_baseline_uncurated_jump_is_doing_well() {
    let engine = run([9; 7], [10, 9, 9, 9, 9, 9, 9], [9, 9, 9, 9, 9, 9, 10]);
    let summary = engine.summary().unwrap();
    let rec = ActionRecommender::standard()
        .recommend_all(engine.catalog(), &summary)
        .unwrap();
    assert_eq!(rec.money_source, ActionSource::Fallback(FallbackTier::DoingWell));
    assert_eq!(rec.time_source, ActionSource::Fallback(FallbackTier::DoingWell));
}

#[test]
fn snapshot_carries_rows_and_formatted_averages() {
    let engine = run([4; 7], [4, 4, 4, 9, 4, 4, 4], [4, 6, 4, 4, 4, 4, 4]);
    let snapshot = engine.snapshot(&ActionRecommender::standard()).unwrap();

    assert_eq!(snapshot.averages.baseline, "4.0/10");
    assert_eq!(snapshot.averages.money, "4.7/10");
    assert_eq!(snapshot.averages.time, "4.3/10");
    assert_eq!(snapshot.money_jump.area_label, "Lifestyle, Spending & Fun");
    assert_eq!(snapshot.time_jump.area_label, "Family & Connections");
    assert_eq!(snapshot.rows[3].money_delta, 5);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["rows"].as_array().unwrap().len(), 7);
}

#[test]
fn frozen_scenario_cannot_be_revisited() {
    let mut engine = new_engine();
    engine.advance_welcome().unwrap();
    rate_scenario(&mut engine, Scenario::Baseline, [5; 7]);

    for err in [
        engine.set_score(Scenario::Baseline, 0, 1).unwrap_err(),
        engine.reveal_next(Scenario::Baseline).unwrap_err(),
        engine.complete_scenario(Scenario::Baseline).unwrap_err(),
    ] {
        assert_eq!(err.code, ErrorCode::InvalidTransition);
    }
}

#[test]
fn operations_out_of_sequence_are_rejected_without_change() {
    let mut engine = new_engine();
    let initial = engine.state().clone();

    assert!(engine.reveal_next(Scenario::Baseline).is_err());
    assert!(engine.complete_scenario(Scenario::Baseline).is_err());
    assert!(engine.acknowledge_tutorial(Scenario::Money).is_err());
    assert!(engine.finish().is_err());
    assert_eq!(engine.summary().unwrap_err().code, ErrorCode::NotReady);

    assert_eq!(engine.state(), &initial);
}

#[test]
fn reset_then_start_reproduces_initial_state() {
    let mut engine = run([1; 7], [2; 7], [3; 7]);
    engine.reset();
    engine.start();

    assert_eq!(engine.state(), &WizardState::initial());
    assert_eq!(engine.current_step(), WizardStep::Welcome);
    for scenario in Scenario::all() {
        assert!(engine.score_set(*scenario).is_none());
    }
}

#[test]
fn event_stream_describes_the_run() {
    let mut engine = run([5; 7], [5; 7], [5; 7]);
    let events = engine.take_events();

    let reveals = events
        .iter()
        .filter(|e| matches!(e, WizardEvent::AreaRevealed { .. }))
        .count();
    let completions = events
        .iter()
        .filter(|e| matches!(e, WizardEvent::ScenarioCompleted { .. }))
        .count();

    assert_eq!(reveals, 21);
    assert_eq!(completions, 3);
    assert!(matches!(events.first(), Some(WizardEvent::Started { .. })));
    assert!(matches!(events.last(), Some(WizardEvent::SummaryReached { .. })));
}
