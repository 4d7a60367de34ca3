// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, a fixed clock, and shopping list and pantry fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutricart`

use nutricart::config::AdvisoryConfig;
use nutricart::household::Household;
use nutricart::storage::HouseholdState;
use nutricart::utils::clock::FixedClock;
use nutricart::utils::ids::SequentialIdSupplier;
use nutricart_core::constants::time::MS_PER_DAY;
use nutricart_core::{Category, GroceryItem, InventoryItem, Timestamp};
use nutricart_intelligence::{RulesConfig, RulesEngine};
use std::env;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Fixed "now" used across tests (2023-11-14T22:13:20Z)
pub const NOW: Timestamp = 1_700_000_000_000;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Rules built from defaults, independent of the process environment
pub fn default_engine() -> RulesEngine {
    RulesEngine::new(&RulesConfig::default())
}

/// Unchecked list item added at `NOW`
pub fn list_item(id: &str, name: &str) -> GroceryItem {
    GroceryItem::new(id, name, Category::Other, NOW)
}

/// Current-stock item bought `bought_days_ago` and expiring `expiry_in_ms` from `NOW`
pub fn stock_item(id: &str, name: &str, bought_days_ago: i64, expiry_in_ms: i64) -> InventoryItem {
    let purchased = NOW - bought_days_ago * MS_PER_DAY;
    InventoryItem::from_purchase(
        GroceryItem::new(id, name, Category::Other, purchased).checked(),
        purchased,
        NOW + expiry_in_ms,
    )
}

/// Consumption-history item bought `bought_days_ago`
pub fn history_item(id: &str, name: &str, bought_days_ago: i64) -> InventoryItem {
    let purchased = NOW - bought_days_ago * MS_PER_DAY;
    InventoryItem::from_purchase(
        GroceryItem::new(id, name, Category::Other, purchased).checked(),
        purchased,
        purchased + MS_PER_DAY,
    )
    .consumed()
}

/// Household over `state` with a fixed clock at `NOW`, sequential ids, and no advisory delay
pub fn household(state: HouseholdState) -> (Household, Arc<FixedClock>) {
    init_test_logging();
    let clock = Arc::new(FixedClock::new(NOW));
    let household = Household::new(
        state,
        default_engine(),
        AdvisoryConfig::immediate(),
        clock.clone(),
        Arc::new(SequentialIdSupplier::new("g")),
    );
    (household, clock)
}

/// Household with nothing in it
pub fn empty_household() -> (Household, Arc<FixedClock>) {
    household(HouseholdState::default())
}
