// ABOUTME: Asynchronous advisory facade for health swaps and missing-item predictions
// ABOUTME: Waits out the configured latency on the tokio timer, then runs the pure lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

use crate::config::AdvisoryConfig;
use nutricart_intelligence::{HealthSwap, PredictedItem, RulesEngine};
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// On-demand advisory queries
///
/// Both calls are read-only. The delay only shapes how long an answer takes,
/// never what it is.
#[derive(Debug, Clone)]
pub struct Advisor {
    engine: RulesEngine,
    config: AdvisoryConfig,
}

impl Advisor {
    /// Create an advisor over `engine`
    #[must_use]
    pub const fn new(engine: RulesEngine, config: AdvisoryConfig) -> Self {
        Self { engine, config }
    }

    /// Healthier alternative for `item_name`, if the swap table has one
    pub async fn find_healthier_alternative(&self, item_name: &str) -> Option<HealthSwap> {
        Self::wait(self.config.health_swap_latency).await;
        let swap = self.engine.find_healthier_alternative(item_name);
        debug!(item = item_name, found = swap.is_some(), "Health swap lookup");
        swap
    }

    /// Items probably missing from the pantry
    pub async fn predict_missing_items(
        &self,
        current_stock: &[String],
        recently_consumed: &[String],
    ) -> Vec<PredictedItem> {
        Self::wait(self.config.prediction_latency).await;
        let predictions = self
            .engine
            .predict_missing_items(current_stock, recently_consumed);
        debug!(count = predictions.len(), "Missing-item prediction");
        predictions
    }

    /// Items probably missing from the pantry, drawing fallbacks from `rng`
    pub async fn predict_missing_items_with_rng<R: Rng + Send + ?Sized>(
        &self,
        current_stock: &[String],
        recently_consumed: &[String],
        rng: &mut R,
    ) -> Vec<PredictedItem> {
        Self::wait(self.config.prediction_latency).await;
        self.engine
            .predict_missing_items_with_rng(current_stock, recently_consumed, rng)
    }

    async fn wait(latency: Duration) {
        if !latency.is_zero() {
            sleep(latency).await;
        }
    }
}
