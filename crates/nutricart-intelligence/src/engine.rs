// ABOUTME: Facade bundling every suggestion heuristic behind one configured value
// ABOUTME: Built once from RulesConfig and shared by the household aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

use crate::config::RulesConfig;
use crate::expiring::ExpiringItemDetector;
use crate::expiry::ExpiryEstimator;
use crate::health_swap::{HealthSwap, HealthSwapAdvisor};
use crate::prediction::{MissingItemPredictor, PredictedItem};
use crate::rebuy::RebuyDetector;
use nutricart_core::{InventoryItem, Suggestion, Timestamp};
use rand::Rng;
use tracing::debug;

/// Configured set of suggestion rules
#[derive(Debug, Clone)]
pub struct RulesEngine {
    estimator: ExpiryEstimator,
    expiring: ExpiringItemDetector,
    rebuy: RebuyDetector,
    health_swaps: HealthSwapAdvisor,
    predictor: MissingItemPredictor,
    recent_history_limit: usize,
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new(RulesConfig::global())
    }
}

impl RulesEngine {
    /// Build every rule from one configuration
    #[must_use]
    pub const fn new(config: &RulesConfig) -> Self {
        Self {
            estimator: ExpiryEstimator::new(&config.expiry),
            expiring: ExpiringItemDetector::new(&config.expiring),
            rebuy: RebuyDetector::new(&config.rebuy),
            health_swaps: HealthSwapAdvisor::new(),
            predictor: MissingItemPredictor::new(&config.prediction),
            recent_history_limit: config.prediction.recent_history_limit,
        }
    }

    /// How many consumption-history entries feed missing-item prediction
    #[must_use]
    pub const fn recent_history_limit(&self) -> usize {
        self.recent_history_limit
    }

    /// Expiry timestamp for an item bought at `purchased_at`
    #[must_use]
    pub fn estimate_expiry(&self, item_name: &str, purchased_at: Timestamp) -> Timestamp {
        self.estimator.estimate_expiry(item_name, purchased_at)
    }

    /// Expired and expiring-soon suggestions for current stock
    #[must_use]
    pub fn detect_expiring(&self, inventory: &[InventoryItem], now: Timestamp) -> Vec<Suggestion> {
        self.expiring.detect(inventory, now)
    }

    /// Rebuy suggestions for consumption history
    #[must_use]
    pub fn detect_rebuy(
        &self,
        inventory: &[InventoryItem],
        active_list_names: &[String],
        now: Timestamp,
    ) -> Vec<Suggestion> {
        self.rebuy.detect(inventory, active_list_names, now)
    }

    /// Full suggestion working set: expiring entries followed by rebuy entries
    #[must_use]
    pub fn detect_all(
        &self,
        inventory: &[InventoryItem],
        active_list_names: &[String],
        now: Timestamp,
    ) -> Vec<Suggestion> {
        let mut suggestions = self.detect_expiring(inventory, now);
        let expiring_count = suggestions.len();
        suggestions.extend(self.detect_rebuy(inventory, active_list_names, now));
        debug!(
            expiring = expiring_count,
            rebuy = suggestions.len() - expiring_count,
            "Suggestion rules evaluated"
        );
        suggestions
    }

    /// Healthier alternative for an item name
    #[must_use]
    pub fn find_healthier_alternative(&self, item_name: &str) -> Option<HealthSwap> {
        self.health_swaps.find_healthier_alternative(item_name)
    }

    /// Missing-item prediction with the thread-local random source
    #[must_use]
    pub fn predict_missing_items(
        &self,
        current_stock: &[String],
        recently_consumed: &[String],
    ) -> Vec<PredictedItem> {
        self.predictor.predict(current_stock, recently_consumed)
    }

    /// Missing-item prediction with a caller-supplied random source
    #[must_use]
    pub fn predict_missing_items_with_rng<R: Rng + ?Sized>(
        &self,
        current_stock: &[String],
        recently_consumed: &[String],
        rng: &mut R,
    ) -> Vec<PredictedItem> {
        self.predictor
            .predict_with_rng(current_stock, recently_consumed, rng)
    }
}
