// ABOUTME: Engine-wide configuration with environment overrides and validation
// ABOUTME: Holds the landmark visibility floor shared by every evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

/// Configuration validation errors
pub mod error;

pub use error::ConfigError;

use crate::constants::landmarks::DEFAULT_MIN_VISIBILITY;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding the landmark visibility floor
pub const MIN_VISIBILITY_ENV: &str = "FORMCOACH_MIN_VISIBILITY";

/// Engine-wide settings applied to every evaluator instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum landmark visibility for a required landmark to count as present
    pub min_visibility: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_visibility: DEFAULT_MIN_VISIBILITY,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the environment, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if `FORMCOACH_MIN_VISIBILITY` is not a number,
    /// or `ConfigError::ValueOutOfRange` if it lies outside [0, 1]
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(MIN_VISIBILITY_ENV) {
            config.min_visibility = raw
                .trim()
                .parse::<f64>()
                .map_err(|e| ConfigError::Parse(format!("{MIN_VISIBILITY_ENV}={raw}: {e}")))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if `min_visibility` is outside [0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_visibility) {
            return Err(ConfigError::ValueOutOfRange(
                "min_visibility must be between 0 and 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_defaults_when_unset() {
        env::remove_var(MIN_VISIBILITY_ENV);
        let config = EngineConfig::from_env().unwrap();
        assert!((config.min_visibility - DEFAULT_MIN_VISIBILITY).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_override() {
        env::set_var(MIN_VISIBILITY_ENV, "0.65");
        let config = EngineConfig::from_env().unwrap();
        env::remove_var(MIN_VISIBILITY_ENV);
        assert!((config.min_visibility - 0.65).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_garbage_and_out_of_range() {
        env::set_var(MIN_VISIBILITY_ENV, "bright");
        assert!(matches!(
            EngineConfig::from_env(),
            Err(ConfigError::Parse(_))
        ));
        env::set_var(MIN_VISIBILITY_ENV, "1.5");
        assert!(matches!(
            EngineConfig::from_env(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
        env::remove_var(MIN_VISIBILITY_ENV);
    }
}
