// ABOUTME: Main library entry point for the NutriCart household assistant
// ABOUTME: Shopping list and pantry lifecycle, persistence, advisory calls, and ambient setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

#![deny(unsafe_code)]

//! # `NutriCart`
//!
//! A household shopping list and pantry tracker with rule-based suggestions:
//! items expiring soon, habitual rebuys, healthier substitutes, and predicted
//! missing items.
//!
//! ## Architecture
//!
//! - **`nutricart-core`**: domain models, error types, constants
//! - **`nutricart-intelligence`**: the pure suggestion rules
//! - **household**: the aggregate that applies list and pantry transitions
//! - **storage**: pluggable persistence of the household snapshot
//! - **advisor**: asynchronous on-demand health swaps and predictions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutricart::config::AdvisoryConfig;
//! use nutricart::household::Household;
//! use nutricart::storage::InMemoryStore;
//! use nutricart::utils::clock::SystemClock;
//! use nutricart::utils::ids::UuidIdSupplier;
//! use nutricart_core::Category;
//! use nutricart_intelligence::RulesEngine;
//! use std::sync::Arc;
//!
//! # async fn example() -> nutricart::errors::AppResult<()> {
//! let store = InMemoryStore::new();
//! let mut household = Household::load(
//!     &store,
//!     RulesEngine::default(),
//!     AdvisoryConfig::default(),
//!     Arc::new(SystemClock),
//!     Arc::new(UuidIdSupplier),
//! )
//! .await;
//!
//! household.add_item("Greek Yogurt", Category::Dairy);
//! for suggestion in household.suggestions() {
//!     println!("{}", suggestion.message);
//! }
//! household.save(&store).await?;
//! # Ok(())
//! # }
//! ```

/// Asynchronous advisory facade
pub mod advisor;

/// Configuration management
pub mod config;

/// Unified error handling
pub mod errors;

/// Household aggregate and lifecycle transitions
pub mod household;

/// Structured logging setup
pub mod logging;

/// Persistence of the household snapshot
pub mod storage;

/// Clock and identifier utilities
pub mod utils;
