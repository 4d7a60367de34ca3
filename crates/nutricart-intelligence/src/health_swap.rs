// ABOUTME: Healthier-alternative lookup for shopping list items
// ABOUTME: Scans the ordered swap table and skips entries the item already satisfies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

use crate::tables::HEALTH_SWAPS;
use serde::{Deserialize, Serialize};

/// A suggested replacement for a less healthy item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSwap {
    /// Item name as given by the caller
    pub original: String,
    /// Replacement product
    pub alternative: String,
    /// Why the replacement is better
    pub reason: String,
    /// Short nutrient/calorie comparison
    pub calories_diff: String,
}

/// Stateless health-swap lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthSwapAdvisor;

impl HealthSwapAdvisor {
    /// Create a new advisor
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// First healthier alternative for `item_name`, if any
    ///
    /// Entries whose alternative already appears in the name are skipped, so
    /// "Whole Wheat Bread" is not told to become "Whole Wheat Bread".
    #[must_use]
    pub fn find_healthier_alternative(&self, item_name: &str) -> Option<HealthSwap> {
        let lower_name = item_name.to_lowercase();
        HEALTH_SWAPS
            .iter()
            .filter(|entry| lower_name.contains(entry.keyword))
            .find(|entry| !lower_name.contains(&entry.alternative.to_lowercase()))
            .map(|entry| HealthSwap {
                original: item_name.to_owned(),
                alternative: entry.alternative.to_owned(),
                reason: entry.reason.to_owned(),
                calories_diff: entry.calories_diff.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_bread_swaps_to_whole_wheat() {
        let swap = HealthSwapAdvisor::new()
            .find_healthier_alternative("White Bread")
            .unwrap();
        assert_eq!(swap.original, "White Bread");
        assert_eq!(swap.alternative, "Whole Wheat Bread");
        assert_eq!(swap.reason, "More fiber and nutrients.");
        assert_eq!(swap.calories_diff, "Higher fiber, lower GI");
    }

    #[test]
    fn test_alternative_already_in_name_is_suppressed() {
        let advisor = HealthSwapAdvisor::new();
        assert!(advisor
            .find_healthier_alternative("Whole Wheat Pasta")
            .is_none());
        assert!(advisor.find_healthier_alternative("Oatmeal Cereal").is_none());
    }

    #[test]
    fn test_suppressed_entry_falls_through_to_later_match() {
        // "brown rice" is suppressed for white rice, but "sugar" still matches
        let swap = HealthSwapAdvisor::new()
            .find_healthier_alternative("White Rice Brown Rice Sugar")
            .unwrap();
        assert_eq!(swap.alternative, "Honey or Stevia");
    }

    #[test]
    fn test_table_order_decides_between_keywords() {
        // "milk chocolate" and "candy" both match; candy comes first
        let swap = HealthSwapAdvisor::new()
            .find_healthier_alternative("Milk Chocolate Candy Bar")
            .unwrap();
        assert_eq!(swap.alternative, "Fresh Fruit");
    }

    #[test]
    fn test_unknown_item_has_no_swap() {
        assert!(HealthSwapAdvisor::new()
            .find_healthier_alternative("Broccoli")
            .is_none());
    }
}
