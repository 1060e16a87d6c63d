//! ScoreSet - the ratings collected for one scenario.

use serde::Serialize;

use super::Average;
use crate::domain::foundation::{DomainError, Score};

/// Ordered ratings, one per catalog area, for a single scenario.
///
/// A set starts with every entry at the default score and is overwritten
/// entry by entry. Once frozen it is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSet {
    scores: Vec<Score>,
    frozen: bool,
}

impl ScoreSet {
    /// Creates an open set of `len` entries, all at `default`.
    pub fn defaulted(len: usize, default: Score) -> Self {
        Self {
            scores: vec![default; len],
            frozen: false,
        }
    }

    /// Creates an open set from raw values.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if any value is outside 0-10
    pub fn from_values(values: &[i64]) -> Result<Self, DomainError> {
        let scores = values
            .iter()
            .enumerate()
            .map(|(idx, v)| {
                Score::try_new(*v).map_err(|e| {
                    DomainError::from(e).with_detail("area_index", idx.to_string())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            scores,
            frozen: false,
        })
    }

    /// Creates an already frozen set from raw values.
    pub fn frozen_from_values(values: &[i64]) -> Result<Self, DomainError> {
        let mut set = Self::from_values(values)?;
        set.freeze();
        Ok(set)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Returns the score at an index.
    pub fn get(&self, index: usize) -> Option<Score> {
        self.scores.get(index).copied()
    }

    /// Returns all scores in catalog order.
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// Returns the raw values in catalog order.
    pub fn values(&self) -> Vec<u8> {
        self.scores.iter().map(Score::value).collect()
    }

    /// Returns true once the set no longer accepts changes.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Overwrites one entry.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the set is frozen
    /// - `InvalidInput` if `index` is out of range
    pub fn set(&mut self, index: usize, score: Score) -> Result<(), DomainError> {
        if self.frozen {
            return Err(DomainError::invalid_transition("Score set is frozen"));
        }
        let len = self.scores.len();
        let slot = self.scores.get_mut(index).ok_or_else(|| {
            DomainError::invalid_input(
                "area_index",
                format!("Area index {} is outside 0..{}", index, len),
            )
            .with_detail("area_index", index.to_string())
        })?;
        *slot = score;
        Ok(())
    }

    /// Freezes the set. Freezing twice is a no-op.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Returns the sum of all scores.
    pub fn sum(&self) -> u32 {
        self.scores.iter().map(|s| u32::from(s.value())).sum()
    }

    /// Returns the rounded mean, or `None` for an empty set.
    pub fn average(&self) -> Option<Average> {
        Average::from_sum(self.sum(), self.scores.len())
    }

    /// Returns `self[i] - baseline[i]` for every index both sets share.
    pub fn deltas_from(&self, baseline: &ScoreSet) -> Vec<i8> {
        self.scores
            .iter()
            .zip(baseline.scores.iter())
            .map(|(s, b)| s.delta_from(*b))
            .collect()
    }
}
