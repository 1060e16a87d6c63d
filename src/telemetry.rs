//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("telemetry error: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Builds the filter: `RUST_LOG` when set, otherwise the configured level.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::EnvFilter {
                value: config.log_level.clone(),
                source,
            })
        }
    }
}

/// Installs the global `fmt` subscriber. Fails if one is already installed.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;

    if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
            .map_err(TelemetryError::Subscriber)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .with_ansi(false)
            .try_init()
            .map_err(TelemetryError::Subscriber)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_builds_a_filter() {
        std::env::remove_var("RUST_LOG");
        let config = TelemetryConfig::default();
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn malformed_level_is_reported() {
        std::env::remove_var("RUST_LOG");
        let config = TelemetryConfig {
            log_level: "life_balance=notalevel".to_string(),
            json: false,
        };
        let err = env_filter(&config).unwrap_err();
        assert!(err.to_string().contains("life_balance=notalevel"));
    }

    #[test]
    fn second_init_fails() {
        let config = TelemetryConfig::default();
        let _ = init(&config);
        assert!(matches!(init(&config), Err(TelemetryError::Subscriber(_))));
    }
}
