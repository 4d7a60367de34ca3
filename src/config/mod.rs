// ABOUTME: Configuration management module for application settings
// ABOUTME: Environment-driven settings for storage location, advisory latency, and rule thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors
//! Configuration module for `NutriCart`
//!
//! - **Environment**: data directory, advisory latency, and deployment mode
//! - **Rules**: suggestion thresholds, owned by the intelligence crate and
//!   re-exported here

use tracing::{debug, info};

/// Environment and application configuration
pub mod environment;

pub use environment::{AdvisoryConfig, AppConfig, Environment};
pub use nutricart_intelligence::{ConfigError, RulesConfig};

/// Initialize all configurations
///
/// Forces the rule configuration singleton to load so that invalid overrides
/// are reported at startup rather than at the first suggestion refresh.
pub fn init_configs() {
    let rules = RulesConfig::global();
    debug!(
        expiring_window_days = rules.expiring.warning_window_days,
        rebuy_after_days = rules.rebuy.rebuy_after_days,
        "Rules config initialized"
    );
    info!("All configurations initialized successfully");
}
