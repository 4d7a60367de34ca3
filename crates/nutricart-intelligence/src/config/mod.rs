// ABOUTME: Rule engine configuration with validated defaults and environment overrides
// ABOUTME: Loaded once per process through a OnceLock singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

//! Rule Engine Configuration
//!
//! Thresholds are grouped per heuristic. The defaults reproduce the household
//! assistant's stock behavior; each value can be overridden with a
//! `NUTRICART_*` environment variable and the result is validated before use.

pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static RULES_CONFIG: OnceLock<RulesConfig> = OnceLock::new();

/// Upper bound for every day-count setting (about a century)
pub const MAX_DAYS: i64 = 36_500;

/// Expiry estimation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpiryConfig {
    /// Shelf life applied when no keyword matches
    pub default_shelf_life_days: i64,
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        Self {
            default_shelf_life_days: 14,
        }
    }
}

/// Expiring-item detection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpiringConfig {
    /// Items with less than this many days left are flagged
    pub warning_window_days: i64,
}

impl Default for ExpiringConfig {
    fn default() -> Self {
        Self {
            warning_window_days: 3,
        }
    }
}

/// Rebuy detection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RebuyConfig {
    /// Consumed items bought more than this many days ago qualify
    pub rebuy_after_days: i64,
}

impl Default for RebuyConfig {
    fn default() -> Self {
        Self {
            rebuy_after_days: 7,
        }
    }
}

/// Missing-item prediction settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictionConfig {
    /// Upper bound on predictions returned per call
    pub max_predictions: usize,
    /// How many of the latest consumption-history entries feed the fallback
    pub recent_history_limit: usize,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            max_predictions: 3,
            recent_history_limit: 10,
        }
    }
}

/// Main rule engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    /// Expiry estimation
    pub expiry: ExpiryConfig,
    /// Expiring-item detection
    pub expiring: ExpiringConfig,
    /// Rebuy detection
    pub rebuy: RebuyConfig,
    /// Missing-item prediction
    pub prediction: PredictionConfig,
}

impl RulesConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        RULES_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load rules config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment overrides on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first value outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=MAX_DAYS).contains(&self.expiry.default_shelf_life_days) {
            return Err(ConfigError::ValueOutOfRange(
                "default_shelf_life_days must be between 0 and 36500",
            ));
        }
        if !(1..=MAX_DAYS).contains(&self.expiring.warning_window_days) {
            return Err(ConfigError::ValueOutOfRange(
                "warning_window_days must be between 1 and 36500",
            ));
        }
        if !(0..=MAX_DAYS).contains(&self.rebuy.rebuy_after_days) {
            return Err(ConfigError::ValueOutOfRange(
                "rebuy_after_days must be between 0 and 36500",
            ));
        }
        if self.prediction.max_predictions == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_predictions must be at least 1",
            ));
        }
        if self.prediction.recent_history_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recent_history_limit must be at least 1",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "NUTRICART_DEFAULT_SHELF_LIFE_DAYS",
            &mut self.expiry.default_shelf_life_days,
        )?;
        Self::apply_env_var(
            "NUTRICART_EXPIRING_WINDOW_DAYS",
            &mut self.expiring.warning_window_days,
        )?;
        Self::apply_env_var(
            "NUTRICART_REBUY_AFTER_DAYS",
            &mut self.rebuy.rebuy_after_days,
        )?;
        Self::apply_env_var(
            "NUTRICART_MAX_PREDICTIONS",
            &mut self.prediction.max_predictions,
        )?;
        Self::apply_env_var(
            "NUTRICART_RECENT_HISTORY_LIMIT",
            &mut self.prediction.recent_history_limit,
        )?;
        Ok(self)
    }
}
