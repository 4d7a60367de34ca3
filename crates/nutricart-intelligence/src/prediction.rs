// ABOUTME: Missing-item prediction from stock pairings and recent consumption
// ABOUTME: Pairing rules first, then a shuffled fallback drawn from recent purchases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

//! Missing-Item Prediction
//!
//! Two phases feed the result. The pairing phase walks the stock names in
//! order and, for each, the pairing table in order, emitting a companion item
//! when nothing in stock mentions it. When that yields fewer than the maximum
//! and recent consumption history is available, the remainder is filled from a
//! shuffled selection of recently consumed names that are not currently
//! stocked. The random source is a parameter so callers can seed it.

use crate::config::{PredictionConfig, RulesConfig};
use crate::tables::PAIRINGS;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Reason attached to every fallback prediction
pub const FREQUENT_PURCHASE_REASON: &str = "Based on your frequent purchases.";

/// An item the household probably needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedItem {
    /// Item name to buy
    pub item: String,
    /// Human-readable explanation
    pub reason: String,
}

/// Predicts items missing from the pantry
#[derive(Debug, Clone)]
pub struct MissingItemPredictor {
    max_predictions: usize,
}

impl Default for MissingItemPredictor {
    fn default() -> Self {
        Self::new(&RulesConfig::global().prediction)
    }
}

impl MissingItemPredictor {
    /// Create a predictor from explicit settings
    #[must_use]
    pub const fn new(config: &PredictionConfig) -> Self {
        Self {
            max_predictions: config.max_predictions,
        }
    }

    /// Predict using the thread-local random source
    #[must_use]
    pub fn predict(&self, current_stock: &[String], recently_consumed: &[String]) -> Vec<PredictedItem> {
        self.predict_with_rng(current_stock, recently_consumed, &mut rand::thread_rng())
    }

    /// Predict using a caller-supplied random source
    #[must_use]
    pub fn predict_with_rng<R: Rng + ?Sized>(
        &self,
        current_stock: &[String],
        recently_consumed: &[String],
        rng: &mut R,
    ) -> Vec<PredictedItem> {
        let stock_lower: Vec<String> = current_stock.iter().map(|s| s.to_lowercase()).collect();
        let mut predictions = Self::pairings(&stock_lower);

        if predictions.len() < self.max_predictions && !recently_consumed.is_empty() {
            let mut candidates: Vec<&String> = recently_consumed
                .iter()
                .filter(|name| !stock_lower.contains(&name.to_lowercase()))
                .collect();
            candidates.shuffle(rng);

            let room = self.max_predictions - predictions.len();
            predictions.extend(candidates.into_iter().take(room).map(|name| PredictedItem {
                item: name.clone(),
                reason: FREQUENT_PURCHASE_REASON.to_owned(),
            }));
        }

        predictions.truncate(self.max_predictions);
        predictions
    }

    fn pairings(stock_lower: &[String]) -> Vec<PredictedItem> {
        let mut found: Vec<PredictedItem> = Vec::new();
        for stock_name in stock_lower {
            for (keyword, companion) in PAIRINGS {
                if !stock_name.contains(keyword) {
                    continue;
                }
                let companion_lower = companion.to_lowercase();
                let have_companion = stock_lower.iter().any(|s| s.contains(&companion_lower));
                if !have_companion && !found.iter().any(|p| p.item == *companion) {
                    found.push(PredictedItem {
                        item: (*companion).to_owned(),
                        reason: format!("You have {keyword}, but might need {companion}."),
                    });
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    fn predictor() -> MissingItemPredictor {
        MissingItemPredictor::new(&PredictionConfig::default())
    }

    #[test]
    fn test_cereal_predicts_milk() {
        let mut rng = StdRng::seed_from_u64(7);
        let found = predictor().predict_with_rng(&names(&["Cereal"]), &[], &mut rng);
        assert_eq!(
            found,
            vec![PredictedItem {
                item: "Milk".to_owned(),
                reason: "You have cereal, but might need Milk.".to_owned(),
            }]
        );
    }

    #[test]
    fn test_companion_in_stock_suppresses_pairing() {
        let mut rng = StdRng::seed_from_u64(7);
        let found = predictor().predict_with_rng(&names(&["Cereal", "Oat Milk"]), &[], &mut rng);
        assert!(found.is_empty());
    }

    #[test]
    fn test_one_stock_name_can_match_several_keywords() {
        // "rice bread" hits both the bread and the rice pairing, in table order
        let mut rng = StdRng::seed_from_u64(7);
        let found = predictor().predict_with_rng(&names(&["Rice Bread"]), &[], &mut rng);
        let items: Vec<&str> = found.iter().map(|p| p.item.as_str()).collect();
        assert_eq!(items, vec!["Butter", "Soy Sauce"]);
    }

    #[test]
    fn test_fallback_skips_stocked_names_case_insensitively() {
        let mut rng = StdRng::seed_from_u64(42);
        let found = predictor().predict_with_rng(
            &names(&["apples"]),
            &names(&["Apples", "Yogurt"]),
            &mut rng,
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].item, "Yogurt");
        assert_eq!(found[0].reason, FREQUENT_PURCHASE_REASON);
    }

    #[test]
    fn test_fallback_fills_room_left_by_pairings() {
        let recent = names(&["Apples", "Tea", "Honey", "Lemons"]);
        for seed in [3, 17, 256] {
            let mut rng = StdRng::seed_from_u64(seed);
            let found = predictor().predict_with_rng(&names(&["Cereal"]), &recent, &mut rng);

            assert_eq!(found.len(), 3);
            assert_eq!(found[0].item, "Milk");
            assert!(found[1..].iter().all(|p| recent.contains(&p.item)
                && p.reason == FREQUENT_PURCHASE_REASON));
            assert_ne!(found[1].item, found[2].item);
        }
    }

    #[test]
    fn test_two_pairings_leave_one_fallback_slot() {
        let mut rng = StdRng::seed_from_u64(5);
        let found = predictor().predict_with_rng(
            &names(&["Cereal", "Pasta"]),
            &names(&["Apples", "Tea"]),
            &mut rng,
        );
        let items: Vec<&str> = found.iter().map(|p| p.item.as_str()).collect();
        assert_eq!(items[..2], ["Milk", "Tomato Sauce"]);
        assert_eq!(found.len(), 3);
        assert_eq!(found[2].reason, FREQUENT_PURCHASE_REASON);
    }

    #[test]
    fn test_result_never_exceeds_maximum() {
        let mut rng = StdRng::seed_from_u64(1);
        let stock = names(&["Cereal", "Pasta", "Bread", "Salad", "Eggs"]);
        let found = predictor().predict_with_rng(&stock, &names(&["Tea", "Jam"]), &mut rng);
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|p| p.reason.starts_with("You have")));
    }

    #[test]
    fn test_same_seed_same_selection() {
        let recent = names(&["A", "B", "C", "D", "E", "F"]);
        let first = predictor().predict_with_rng(&[], &recent, &mut StdRng::seed_from_u64(99));
        let second = predictor().predict_with_rng(&[], &recent, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
