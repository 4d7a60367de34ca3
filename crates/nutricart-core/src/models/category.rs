// ABOUTME: Grocery category enumeration used to group shopping list and pantry items
// ABOUTME: Fixed set of store sections with lossy parsing and display names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store section an item belongs to
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    /// Fresh fruit and vegetables
    Produce,
    /// Milk, cheese, eggs, yogurt
    Dairy,
    /// Bread and baked goods
    Bakery,
    /// Meat and poultry
    Meat,
    /// Dry goods, cans, spices
    Pantry,
    /// Frozen food
    Frozen,
    /// Drinks
    Beverages,
    /// Snack food
    Snacks,
    /// Anything else (also used for items added from suggestions)
    #[default]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Self; 9] = [
        Self::Produce,
        Self::Dairy,
        Self::Bakery,
        Self::Meat,
        Self::Pantry,
        Self::Frozen,
        Self::Beverages,
        Self::Snacks,
        Self::Other,
    ];

    /// Parse category from free text, falling back to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "produce" => Self::Produce,
            "dairy" => Self::Dairy,
            "bakery" => Self::Bakery,
            "meat" => Self::Meat,
            "pantry" => Self::Pantry,
            "frozen" => Self::Frozen,
            "beverages" => Self::Beverages,
            "snacks" => Self::Snacks,
            _ => Self::Other,
        }
    }

    /// Human-readable name, identical to the serialized form
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::Dairy => "Dairy",
            Self::Bakery => "Bakery",
            Self::Meat => "Meat",
            Self::Pantry => "Pantry",
            Self::Frozen => "Frozen",
            Self::Beverages => "Beverages",
            Self::Snacks => "Snacks",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
