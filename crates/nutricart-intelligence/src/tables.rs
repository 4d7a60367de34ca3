// ABOUTME: Ordered keyword tables for shelf life, health swaps, and item pairings
// ABOUTME: Slices rather than maps so the first matching keyword always wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

//! Static lookup tables.
//!
//! Every table is scanned front to back and matched by lowercase substring, so
//! entry order is part of the behavior. Keywords are stored lowercase.

/// Shelf life in days by food keyword
pub const SHELF_LIFE_DAYS: &[(&str, i64)] = &[
    ("milk", 7),
    ("bread", 5),
    ("eggs", 21),
    ("bananas", 4),
    ("chicken", 3),
    ("spinach", 5),
    ("yogurt", 14),
    ("rice", 365),
];

/// One row of the health swap table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthSwapEntry {
    /// Lowercase keyword looked up in the item name
    pub keyword: &'static str,
    /// Suggested replacement product
    pub alternative: &'static str,
    /// Why the replacement is better
    pub reason: &'static str,
    /// Short nutrient/calorie comparison
    pub calories_diff: &'static str,
}

const fn swap(
    keyword: &'static str,
    alternative: &'static str,
    reason: &'static str,
    calories_diff: &'static str,
) -> HealthSwapEntry {
    HealthSwapEntry {
        keyword,
        alternative,
        reason,
        calories_diff,
    }
}

/// Healthier alternatives by keyword
pub const HEALTH_SWAPS: &[HealthSwapEntry] = &[
    swap(
        "white bread",
        "Whole Wheat Bread",
        "More fiber and nutrients.",
        "Higher fiber, lower GI",
    ),
    swap(
        "white rice",
        "Brown Rice",
        "Better for digestion and blood sugar.",
        "More vitamins & fiber",
    ),
    swap(
        "soda",
        "Sparkling Water",
        "Avoids high sugar content.",
        "0 sugar vs 40g sugar",
    ),
    swap(
        "chips",
        "Popcorn or Nuts",
        "Lower saturated fats and sodium.",
        "Less processed fat",
    ),
    swap(
        "candy",
        "Fresh Fruit",
        "Natural sugars with vitamins.",
        "Nutrient dense",
    ),
    swap(
        "milk chocolate",
        "Dark Chocolate",
        "Higher antioxidant content.",
        "Less sugar",
    ),
    swap(
        "ice cream",
        "Frozen Yogurt",
        "Lower fat content.",
        "Less saturated fat",
    ),
    swap(
        "pasta",
        "Whole Wheat Pasta",
        "Complex carbs are better for energy.",
        "Higher fiber",
    ),
    swap(
        "sugar",
        "Honey or Stevia",
        "Natural sweetener alternatives.",
        "Lower glycemic load",
    ),
    swap(
        "mayonnaise",
        "Greek Yogurt or Mustard",
        "Significantly lower fat.",
        "Less calories",
    ),
    swap(
        "vegetable oil",
        "Olive Oil",
        "Healthier heart-friendly fats.",
        "More omega-3s",
    ),
    swap(
        "butter",
        "Avocado Oil",
        "Plant-based healthy fats.",
        "Less saturated fat",
    ),
    swap(
        "cereal",
        "Oatmeal",
        "Less processed sugar.",
        "More fiber, less sugar",
    ),
];

/// Companion item usually bought with a keyword item
pub const PAIRINGS: &[(&str, &str)] = &[
    ("cereal", "Milk"),
    ("pasta", "Tomato Sauce"),
    ("bread", "Butter"),
    ("salad", "Dressing"),
    ("eggs", "Bacon"),
    ("chips", "Salsa"),
    ("coffee", "Creamer"),
    ("peanut butter", "Jelly"),
    ("rice", "Soy Sauce"),
    ("pancakes", "Syrup"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_lowercase() {
        let keywords = SHELF_LIFE_DAYS
            .iter()
            .map(|(k, _)| *k)
            .chain(HEALTH_SWAPS.iter().map(|e| e.keyword))
            .chain(PAIRINGS.iter().map(|(k, _)| *k));
        for keyword in keywords {
            assert_eq!(keyword, keyword.to_lowercase());
        }
    }

    #[test]
    fn test_shelf_lives_are_positive() {
        assert!(SHELF_LIFE_DAYS.iter().all(|(_, days)| *days > 0));
    }
}
