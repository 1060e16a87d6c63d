//! Score value object (0-10 life-area rating).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A single life-area rating: 0 (needs work) to 10 (thriving).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Lowest rating.
    pub const MIN: Self = Self(0);

    /// Highest rating.
    pub const MAX: Self = Self(10);

    /// Midpoint rating given to areas the user has not touched yet.
    pub const MIDPOINT: Self = Self(5);

    /// Creates a Score, returning error if out of range.
    ///
    /// Out-of-range values are rejected, never clamped.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&value) {
            return Err(ValidationError::out_of_range(
                "score",
                i64::from(Self::MIN.0),
                i64::from(Self::MAX.0),
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the signed difference `self - baseline`.
    pub fn delta_from(&self, baseline: Score) -> i8 {
        self.0 as i8 - baseline.0 as i8
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl TryFrom<i64> for Score {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
