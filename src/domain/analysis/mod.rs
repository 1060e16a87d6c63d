//! Analysis Module - Pure domain services over the collected scores.
//!
//! # Components
//!
//! - `SummaryCalculator` - averages, per-area deltas, biggest jump per scenario
//! - `ActionTables` - curated actions and fallback copy (plain data)
//! - `ActionRecommender` - picks the action text for a biggest jump
//! - `PersonalSnapshot` - read model combining all of the above for export
//!
//! All functions are stateless. They take domain objects as input and return
//! computed results; no ports are involved.

mod action_recommender;
mod action_tables;
mod snapshot;
mod summary_calculator;

pub use action_recommender::{
    ActionRecommendation, ActionRecommender, ActionSource, Recommendation,
};
pub use action_tables::{ActionTables, FallbackCopy, FallbackTier, ScenarioActions};
pub use snapshot::{
    format_average, AreaRow, JumpCard, PersonalSnapshot, ScenarioScores, SnapshotAverages,
};
pub use summary_calculator::{
    BiggestJump, BiggestJumps, ScenarioAverages, SummaryCalculator, SummaryResult,
};
