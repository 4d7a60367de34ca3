// ABOUTME: Expiring-item detection over current pantry stock
// ABOUTME: Flags items already expired or expiring inside the configured warning window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

use crate::config::{ExpiringConfig, RulesConfig};
use nutricart_core::constants::time::{days_to_ms, MS_PER_DAY};
use nutricart_core::{InventoryItem, Suggestion, Timestamp};

/// Scans current stock for items that need attention
#[derive(Debug, Clone)]
pub struct ExpiringItemDetector {
    warning_window_ms: i64,
}

impl Default for ExpiringItemDetector {
    fn default() -> Self {
        Self::new(&RulesConfig::global().expiring)
    }
}

impl ExpiringItemDetector {
    /// Create a detector from explicit settings
    #[must_use]
    pub const fn new(config: &ExpiringConfig) -> Self {
        Self {
            warning_window_ms: days_to_ms(config.warning_window_days),
        }
    }

    /// Expiring-soon and expired suggestions, in inventory order
    ///
    /// Consumed entries are ignored. An item with time left inside the window gets
    /// an `exp-<id>` suggestion quoting the days left (rounded up); an item at or
    /// past its expiry gets an `exp-expired-<id>` suggestion.
    #[must_use]
    pub fn detect(&self, inventory: &[InventoryItem], now: Timestamp) -> Vec<Suggestion> {
        inventory
            .iter()
            .filter(|item| item.is_in_stock())
            .filter_map(|item| {
                let time_left = item.expiry_date.saturating_sub(now);
                if time_left <= 0 {
                    Some(Suggestion::expired(item.id(), item.name()))
                } else if time_left < self.warning_window_ms {
                    let days_left = time_left.saturating_add(MS_PER_DAY - 1) / MS_PER_DAY;
                    Some(Suggestion::expiring_soon(item.id(), item.name(), days_left))
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutricart_core::{Category, GroceryItem, SuggestionType};

    const NOW: Timestamp = 1_700_000_000_000;

    fn stock(id: &str, expiry_date: Timestamp) -> InventoryItem {
        InventoryItem::from_purchase(
            GroceryItem::new(id, format!("Item {id}"), Category::Other, NOW),
            NOW - MS_PER_DAY,
            expiry_date,
        )
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let detector = ExpiringItemDetector::new(&ExpiringConfig::default());
        let found = detector.detect(&[stock("a", NOW + MS_PER_DAY / 4)], NOW);
        assert_eq!(found.len(), 1);
        assert!(found[0].message.contains("expiring in 1 days"));
        assert_eq!(found[0].kind, SuggestionType::ExpiringSoon);
    }

    #[test]
    fn test_window_is_exclusive() {
        let detector = ExpiringItemDetector::new(&ExpiringConfig::default());
        assert!(detector.detect(&[stock("a", NOW + 3 * MS_PER_DAY)], NOW).is_empty());
    }

    #[test]
    fn test_expiry_exactly_now_counts_as_expired() {
        let detector = ExpiringItemDetector::new(&ExpiringConfig::default());
        let found = detector.detect(&[stock("a", NOW)], NOW);
        assert_eq!(found[0].id, "exp-expired-a");
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let detector = ExpiringItemDetector::new(&ExpiringConfig::default());
        let found = detector.detect(&[stock("a", i64::MIN), stock("b", i64::MAX)], NOW);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "exp-expired-a");

        let found = detector.detect(&[stock("c", NOW)], i64::MIN);
        assert!(found.is_empty());
    }

    #[test]
    fn test_consumed_items_are_ignored() {
        let detector = ExpiringItemDetector::new(&ExpiringConfig::default());
        let found = detector.detect(&[stock("a", NOW - MS_PER_DAY).consumed()], NOW);
        assert!(found.is_empty());
    }
}
