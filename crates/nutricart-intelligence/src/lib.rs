// ABOUTME: Suggestion rule engine for the NutriCart pantry assistant
// ABOUTME: Expiry estimation, expiring and rebuy detection, health swaps, and missing-item prediction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

#![deny(unsafe_code)]

//! # `NutriCart` Intelligence
//!
//! Small, deterministic heuristics over the shopping list and pantry snapshot.
//! Nothing in this crate keeps state between calls: every detector recomputes
//! from the snapshot and the `now` timestamp it is given, and the lookup tables
//! are immutable statics.
//!
//! ## Components
//!
//! - [`ExpiryEstimator`]: shelf life by keyword and expiry timestamps
//! - [`ExpiringItemDetector`]: current stock that expired or expires soon
//! - [`RebuyDetector`]: consumed items due for repurchase
//! - [`HealthSwapAdvisor`]: healthier substitutes
//! - [`MissingItemPredictor`]: companion items and frequent purchases
//! - [`RulesEngine`]: one facade bundling all of the above with a shared config

/// Rule engine configuration (thresholds, limits, environment overrides)
pub mod config;
/// Expiring-item detection over current stock
pub mod expiring;
/// Shelf-life estimation and freshness classification
pub mod expiry;
/// Healthier substitute lookup
pub mod health_swap;
/// Missing-item prediction from pairings and purchase history
pub mod prediction;
/// Rebuy detection over consumption history
pub mod rebuy;
/// Ordered keyword tables shared by the heuristics
pub mod tables;

mod engine;

pub use config::{ConfigError, RulesConfig};
pub use engine::RulesEngine;
pub use expiring::ExpiringItemDetector;
pub use expiry::{ExpiryEstimator, ExpiryStatus};
pub use health_swap::{HealthSwap, HealthSwapAdvisor};
pub use prediction::{MissingItemPredictor, PredictedItem};
pub use rebuy::RebuyDetector;
