//! Average value object - a mean rounded half-up to one decimal.

use serde::Serialize;
use std::fmt;

/// Arithmetic mean of a set of scores, rounded half-up to one decimal place.
///
/// Stored as whole tenths so equal averages always compare equal and format
/// identically (`5.0`, `5.7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "f64")]
pub struct Average {
    tenths: u32,
}

impl Average {
    /// Computes `sum / count` rounded half-up to one decimal.
    ///
    /// Returns `None` when `count` is zero. Integer arithmetic keeps the
    /// rounding exact: `floor((20 * sum + count) / (2 * count))` tenths.
    pub fn from_sum(sum: u32, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let count = count as u64;
        let tenths = (20 * u64::from(sum) + count) / (2 * count);
        Some(Self {
            tenths: tenths as u32,
        })
    }

    /// Returns the average as a float with one decimal of precision.
    pub fn value(&self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    /// Returns the average in whole tenths (5.7 -> 57).
    pub fn tenths(&self) -> u32 {
        self.tenths
    }
}

impl From<Average> for f64 {
    fn from(avg: Average) -> Self {
        avg.value()
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}
