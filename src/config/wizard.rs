//! Wizard session configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Highest rating a slider can hold.
const MAX_SCORE: u8 = 10;

/// Wizard engine and session registry settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WizardConfig {
    /// Value unrevealed areas start at (0-10)
    #[serde(default = "default_score")]
    pub default_score: u8,

    /// Maximum number of concurrently open sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl WizardConfig {
    /// Validate wizard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_score > MAX_SCORE {
            return Err(ValidationError::InvalidDefaultScore(self.default_score));
        }
        if self.max_sessions == 0 {
            return Err(ValidationError::InvalidMaxSessions);
        }
        Ok(())
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            default_score: default_score(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_score() -> u8 {
    5
}

fn default_max_sessions() -> usize {
    1024
}
