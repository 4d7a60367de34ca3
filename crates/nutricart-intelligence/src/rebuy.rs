// ABOUTME: Rebuy detection over pantry consumption history
// ABOUTME: Suggests consumed items bought long enough ago that are neither stocked nor listed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

use crate::config::{RebuyConfig, RulesConfig};
use nutricart_core::constants::time::days_to_ms;
use nutricart_core::{InventoryItem, Suggestion, Timestamp};
use std::collections::HashSet;

/// Scans consumption history for habitual purchases
#[derive(Debug, Clone)]
pub struct RebuyDetector {
    rebuy_after_ms: i64,
}

impl Default for RebuyDetector {
    fn default() -> Self {
        Self::new(&RulesConfig::global().rebuy)
    }
}

impl RebuyDetector {
    /// Create a detector from explicit settings
    #[must_use]
    pub const fn new(config: &RebuyConfig) -> Self {
        Self {
            rebuy_after_ms: days_to_ms(config.rebuy_after_days),
        }
    }

    /// Rebuy suggestions, in inventory order
    ///
    /// A consumed item qualifies when it was purchased longer ago than the rebuy
    /// threshold, no unconsumed item carries exactly the same name, and the name
    /// is not exactly on the active list. Name comparisons here are exact and
    /// case-sensitive. Only the first qualifying entry per name is reported.
    #[must_use]
    pub fn detect(
        &self,
        inventory: &[InventoryItem],
        active_list_names: &[String],
        now: Timestamp,
    ) -> Vec<Suggestion> {
        let in_stock: HashSet<&str> = inventory
            .iter()
            .filter(|item| item.is_in_stock())
            .map(InventoryItem::name)
            .collect();
        let on_list: HashSet<&str> = active_list_names.iter().map(String::as_str).collect();

        let mut suggested: HashSet<&str> = HashSet::new();
        let mut suggestions = Vec::new();

        for item in inventory.iter().filter(|item| item.consumed) {
            let name = item.name();
            let time_since_purchase = now.saturating_sub(item.purchased_date);
            if time_since_purchase > self.rebuy_after_ms
                && !in_stock.contains(name)
                && !on_list.contains(name)
                && suggested.insert(name)
            {
                suggestions.push(Suggestion::rebuy(item.id(), name));
            }
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutricart_core::constants::time::MS_PER_DAY;
    use nutricart_core::{Category, GroceryItem};

    const NOW: Timestamp = 1_700_000_000_000;

    fn history(id: &str, name: &str, days_ago: i64) -> InventoryItem {
        let bought = NOW - days_ago * MS_PER_DAY;
        InventoryItem::from_purchase(
            GroceryItem::new(id, name, Category::Other, bought),
            bought,
            bought + MS_PER_DAY,
        )
        .consumed()
    }

    #[test]
    fn test_exactly_seven_days_does_not_qualify() {
        let detector = RebuyDetector::new(&RebuyConfig::default());
        assert!(detector.detect(&[history("a", "Eggs", 7)], &[], NOW).is_empty());
        assert_eq!(detector.detect(&[history("a", "Eggs", 8)], &[], NOW).len(), 1);
    }

    #[test]
    fn test_stock_check_is_case_sensitive() {
        let detector = RebuyDetector::new(&RebuyConfig::default());
        let stocked = InventoryItem::from_purchase(
            GroceryItem::new("b", "eggs", Category::Dairy, NOW),
            NOW,
            NOW + MS_PER_DAY,
        );
        let found = detector.detect(&[history("a", "Eggs", 10), stocked], &[], NOW);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_extreme_purchase_dates_do_not_overflow() {
        let detector = RebuyDetector::new(&RebuyConfig::default());
        let ancient = InventoryItem::from_purchase(
            GroceryItem::new("a", "Tea", Category::Other, i64::MIN),
            i64::MIN,
            i64::MIN,
        )
        .consumed();
        let future = InventoryItem::from_purchase(
            GroceryItem::new("b", "Coffee", Category::Other, i64::MAX),
            i64::MAX,
            i64::MAX,
        )
        .consumed();

        let found = detector.detect(&[ancient, future], &[], NOW);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "rebuy-a");
    }

    #[test]
    fn test_list_check_is_exact() {
        let detector = RebuyDetector::new(&RebuyConfig::default());
        let inventory = [history("a", "Eggs", 10)];
        assert!(detector
            .detect(&inventory, &["Eggs".to_owned()], NOW)
            .is_empty());
        assert_eq!(
            detector
                .detect(&inventory, &["Free Range Eggs".to_owned()], NOW)
                .len(),
            1
        );
    }
}
