// ABOUTME: Shopping list and pantry inventory item models
// ABOUTME: GroceryItem for desired purchases, InventoryItem for owned goods with expiry tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

use super::{Category, Timestamp};
use crate::constants::list_defaults;
use serde::{Deserialize, Serialize};

/// A desired purchase on the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    /// Unique identifier, immutable once assigned
    pub id: String,
    /// Free-text item name
    pub name: String,
    /// Store section
    pub category: Category,
    /// Amount to buy
    pub quantity: f64,
    /// Unit for `quantity` (pcs, carton, lbs, ...)
    pub unit: String,
    /// Picked up but not yet moved to the pantry
    pub is_checked: bool,
    /// When the item was added to the list
    pub added_date: Timestamp,
}

impl GroceryItem {
    /// Create an unchecked item with the default quantity and unit
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        added_date: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            quantity: list_defaults::QUANTITY,
            unit: list_defaults::UNIT.to_owned(),
            is_checked: false,
            added_date,
        }
    }

    /// Set quantity and unit
    #[must_use]
    pub fn with_quantity(mut self, quantity: f64, unit: impl Into<String>) -> Self {
        self.quantity = quantity;
        self.unit = unit.into();
        self
    }

    /// Mark the item as picked up
    #[must_use]
    pub const fn checked(mut self) -> Self {
        self.is_checked = true;
        self
    }
}

/// A purchased good owned by the household
///
/// Carries every [`GroceryItem`] field (serialized inline) plus purchase and
/// expiry timestamps. Items with `consumed == false` form the current stock,
/// the rest form the consumption history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Fields carried over from the shopping list entry
    #[serde(flatten)]
    pub item: GroceryItem,
    /// When the item was moved into the pantry
    pub purchased_date: Timestamp,
    /// Estimated expiry, never earlier than `purchased_date`
    pub expiry_date: Timestamp,
    /// Used up or discarded
    pub consumed: bool,
}

impl InventoryItem {
    /// Take ownership of a shopping list entry that has just been bought
    #[must_use]
    pub const fn from_purchase(
        item: GroceryItem,
        purchased_date: Timestamp,
        expiry_date: Timestamp,
    ) -> Self {
        Self {
            item,
            purchased_date,
            expiry_date,
            consumed: false,
        }
    }

    /// Mark as consumption history
    #[must_use]
    pub const fn consumed(mut self) -> Self {
        self.consumed = true;
        self
    }

    /// Item identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// Item name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.item.name
    }

    /// Whether this entry belongs to current stock
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        !self.consumed
    }
}
