// ABOUTME: Environment configuration for data location, advisory latency, and deployment mode
// ABOUTME: Parses NUTRICART_* variables with typed defaults and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

//! Environment-based configuration management

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Directory name appended to the platform data directory
const DATA_DIR_NAME: &str = "nutricart";
/// Used when the platform exposes no data directory
const FALLBACK_DATA_DIR: &str = "./data";

/// Default simulated latency for health-swap lookups
pub const DEFAULT_HEALTH_SWAP_LATENCY_MS: u64 = 800;
/// Default simulated latency for missing-item predictions
pub const DEFAULT_PREDICTION_LATENCY_MS: u64 = 1_000;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Installed for day-to-day use
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Simulated latency of the on-demand advisory calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryConfig {
    /// Delay before a health-swap answer is returned
    pub health_swap_latency: Duration,
    /// Delay before missing-item predictions are returned
    pub prediction_latency: Duration,
}

impl AdvisoryConfig {
    /// No delay at all, for scripted use
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            health_swap_latency: Duration::ZERO,
            prediction_latency: Duration::ZERO,
        }
    }
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            health_swap_latency: Duration::from_millis(DEFAULT_HEALTH_SWAP_LATENCY_MS),
            prediction_latency: Duration::from_millis(DEFAULT_PREDICTION_LATENCY_MS),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Directory holding the persisted list and inventory
    pub data_dir: PathBuf,
    /// Advisory latency settings
    pub advisory: AdvisoryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            data_dir: default_data_dir(),
            advisory: AdvisoryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a latency variable is not a whole number of milliseconds
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var("ENVIRONMENT")
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let data_dir = env::var("NUTRICART_DATA_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(default_data_dir, PathBuf::from);

        let advisory = AdvisoryConfig {
            health_swap_latency: Duration::from_millis(parse_env_or(
                "NUTRICART_HEALTH_SWAP_LATENCY_MS",
                DEFAULT_HEALTH_SWAP_LATENCY_MS,
            )?),
            prediction_latency: Duration::from_millis(parse_env_or(
                "NUTRICART_PREDICTION_LATENCY_MS",
                DEFAULT_PREDICTION_LATENCY_MS,
            )?),
        };

        Ok(Self {
            environment,
            data_dir,
            advisory,
        })
    }

    /// Replace the data directory
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}

/// Platform data directory joined with the application name
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || {
            warn!("No platform data directory, using {FALLBACK_DATA_DIR}");
            PathBuf::from(FALLBACK_DATA_DIR)
        },
        |dir| dir.join(DATA_DIR_NAME),
    )
}

fn parse_env_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("Invalid {key}: '{value}'"))),
        Err(_) => Ok(default),
    }
}
