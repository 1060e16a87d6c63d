//! Scoring module - per-scenario rating collections.

mod average;
mod score_set;

pub use average::Average;
pub use score_set::ScoreSet;
