//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LIFE_BALANCE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use life_balance::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Up to {} sessions", config.wizard.max_sessions);
//! ```

mod content;
mod error;
mod telemetry;
mod wizard;

pub use content::ContentConfig;
pub use error::{ConfigError, ValidationError};
pub use telemetry::TelemetryConfig;
pub use wizard::WizardConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Engine defaults and session limits
    #[serde(default)]
    pub wizard: WizardConfig,

    /// Replaceable content (action tables)
    #[serde(default)]
    pub content: ContentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LIFE_BALANCE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LIFE_BALANCE__WIZARD__MAX_SESSIONS=64` -> `wizard.max_sessions = 64`
    /// - `LIFE_BALANCE__CONTENT__ACTION_TABLES_PATH=...` -> `content.action_tables_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LIFE_BALANCE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.telemetry.validate()?;
        self.wizard.validate()?;
        self.content.validate()?;
        Ok(())
    }
}
