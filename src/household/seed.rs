// ABOUTME: Starter shopping list and pantry used when no saved state exists
// ABOUTME: Timestamps are relative to the load time so the demo suggestions always fire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

use nutricart_core::constants::time::days_to_ms;
use nutricart_core::{Category, GroceryItem, InventoryItem, Timestamp};

/// Two unchecked items: a carton of milk and a loaf of white bread
#[must_use]
pub fn starter_list(now: Timestamp) -> Vec<GroceryItem> {
    vec![
        GroceryItem::new("1", "Milk", Category::Dairy, now).with_quantity(1.0, "carton"),
        GroceryItem::new("2", "White Bread", Category::Bakery, now).with_quantity(1.0, "loaf"),
    ]
}

/// Expired eggs, fresh apples, and one consumed chicken breast in the history
#[must_use]
pub fn starter_inventory(now: Timestamp) -> Vec<InventoryItem> {
    vec![
        purchased(
            GroceryItem::new("inv1", "Eggs", Category::Dairy, now - days_to_ms(10))
                .with_quantity(12.0, "pcs"),
            now - days_to_ms(1),
        ),
        purchased(
            GroceryItem::new("inv2", "Apples", Category::Produce, now - days_to_ms(2))
                .with_quantity(5.0, "pcs"),
            now + days_to_ms(5),
        ),
        purchased(
            GroceryItem::new("inv3", "Chicken Breast", Category::Meat, now - days_to_ms(15))
                .with_quantity(2.0, "lbs"),
            now - days_to_ms(12),
        )
        .consumed(),
    ]
}

fn purchased(item: GroceryItem, expiry_date: Timestamp) -> InventoryItem {
    let purchased_date = item.added_date;
    InventoryItem::from_purchase(item.checked(), purchased_date, expiry_date)
}
