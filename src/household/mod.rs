// ABOUTME: Household aggregate owning the shopping list, pantry inventory, and suggestion working set
// ABOUTME: Applies list and pantry transitions and refreshes rule-based suggestions after each one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

//! # Household Lifecycle
//!
//! Items move list → checked → pantry stock → consumption history, or leave
//! through deletion at either end. [`Household`] owns that state and, after
//! every mutation, replaces the suggestion working set with a fresh run of the
//! expiring-item and rebuy detectors. Dismissed suggestions therefore come back
//! on the next mutation if their cause still holds.

/// Starter data used when nothing has been saved yet
pub mod seed;

use crate::advisor::Advisor;
use crate::config::AdvisoryConfig;
use crate::errors::AppResult;
use crate::storage::{load_state, save_state, HouseholdState, StateStore};
use crate::utils::clock::Clock;
use crate::utils::ids::IdSupplier;
use nutricart_core::{Category, GroceryItem, InventoryItem, Suggestion};
use nutricart_intelligence::{ExpiryStatus, PredictedItem, RulesEngine};
use std::sync::Arc;
use tracing::{debug, info};

/// Shopping list, pantry, and suggestions for one household
pub struct Household {
    state: HouseholdState,
    suggestions: Vec<Suggestion>,
    engine: RulesEngine,
    advisor: Advisor,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdSupplier>,
}

impl Household {
    /// Wrap an existing state and compute its initial suggestions
    #[must_use]
    pub fn new(
        state: HouseholdState,
        engine: RulesEngine,
        advisory: AdvisoryConfig,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdSupplier>,
    ) -> Self {
        let advisor = Advisor::new(engine.clone(), advisory);
        let mut household = Self {
            state,
            suggestions: Vec::new(),
            engine,
            advisor,
            clock,
            ids,
        };
        household.refresh_suggestions();
        household
    }

    /// Load from `store`, seeding any collection that is missing or unreadable
    pub async fn load(
        store: &dyn StateStore,
        engine: RulesEngine,
        advisory: AdvisoryConfig,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdSupplier>,
    ) -> Self {
        let state = load_state(store, clock.now_ms()).await;
        Self::new(state, engine, advisory, clock, ids)
    }

    /// Persist both collections
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects a write
    pub async fn save(&self, store: &dyn StateStore) -> AppResult<()> {
        save_state(store, &self.state).await
    }

    /// Current snapshot
    #[must_use]
    pub const fn state(&self) -> &HouseholdState {
        &self.state
    }

    /// Active shopping list
    #[must_use]
    pub fn shopping_list(&self) -> &[GroceryItem] {
        &self.state.shopping_list
    }

    /// Stock and history, in insertion order
    #[must_use]
    pub fn inventory(&self) -> &[InventoryItem] {
        &self.state.inventory
    }

    /// Suggestion working set
    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    // ── Shopping list ───────────────────────────────────────────────────

    /// Add an unchecked item with the default quantity and unit
    ///
    /// Returns the new item's id, or `None` when the trimmed name is blank.
    pub fn add_item(&mut self, name: &str, category: Category) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = self.ids.next_id();
        let item = GroceryItem::new(id.clone(), name, category, self.clock.now_ms());
        debug!(id = %id, name, %category, "Item added to list");
        self.state.shopping_list.push(item);
        self.refresh_suggestions();
        Some(id)
    }

    /// Remove a list item
    pub fn delete_item(&mut self, id: &str) -> bool {
        let before = self.state.shopping_list.len();
        self.state.shopping_list.retain(|item| item.id != id);
        let removed = self.state.shopping_list.len() != before;
        if removed {
            self.refresh_suggestions();
        }
        removed
    }

    /// Flip a list item's checked flag, returning the new value
    pub fn toggle_item(&mut self, id: &str) -> Option<bool> {
        let item = self
            .state
            .shopping_list
            .iter_mut()
            .find(|item| item.id == id)?;
        item.is_checked = !item.is_checked;
        let checked = item.is_checked;
        self.refresh_suggestions();
        Some(checked)
    }

    /// Rename a list item in place
    pub fn swap_item(&mut self, id: &str, new_name: &str) -> bool {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return false;
        }
        let Some(item) = self
            .state
            .shopping_list
            .iter_mut()
            .find(|item| item.id == id)
        else {
            return false;
        };
        item.name = new_name.to_owned();
        self.refresh_suggestions();
        true
    }

    /// Move every checked list item into the pantry
    ///
    /// Each moved item is stamped with the current time as its purchase date and
    /// an estimated expiry. Returns the moved ids; with nothing checked this is a
    /// no-op returning an empty list.
    pub fn finalize_checked(&mut self) -> Vec<String> {
        if !self.state.shopping_list.iter().any(|item| item.is_checked) {
            return Vec::new();
        }

        let now = self.clock.now_ms();
        let (checked, remaining): (Vec<GroceryItem>, Vec<GroceryItem>) = self
            .state
            .shopping_list
            .drain(..)
            .partition(|item| item.is_checked);
        self.state.shopping_list = remaining;

        let moved: Vec<String> = checked.iter().map(|item| item.id.clone()).collect();
        for item in checked {
            let expiry_date = self.engine.estimate_expiry(&item.name, now);
            self.state
                .inventory
                .push(InventoryItem::from_purchase(item, now, expiry_date));
        }

        info!(count = moved.len(), "Checked items moved to pantry");
        self.refresh_suggestions();
        moved
    }

    // ── Pantry ──────────────────────────────────────────────────────────

    /// Mark a stocked item as consumed
    ///
    /// Returns `false` if the id is unknown or the item was already consumed.
    pub fn consume_item(&mut self, id: &str) -> bool {
        let Some(item) = self
            .state
            .inventory
            .iter_mut()
            .find(|item| item.id() == id && item.is_in_stock())
        else {
            return false;
        };
        item.consumed = true;
        self.refresh_suggestions();
        true
    }

    /// Delete a pantry entry outright (stock or history)
    pub fn remove_inventory_item(&mut self, id: &str) -> bool {
        let before = self.state.inventory.len();
        self.state.inventory.retain(|item| item.id() != id);
        let removed = self.state.inventory.len() != before;
        if removed {
            self.refresh_suggestions();
        }
        removed
    }

    /// Current stock, soonest expiry first, with its freshness label
    #[must_use]
    pub fn current_stock_by_expiry(&self) -> Vec<(&InventoryItem, ExpiryStatus)> {
        let now = self.clock.now_ms();
        let mut stock: Vec<(&InventoryItem, ExpiryStatus)> = self
            .state
            .inventory
            .iter()
            .filter(|item| item.is_in_stock())
            .map(|item| (item, ExpiryStatus::classify(item.expiry_date, now)))
            .collect();
        stock.sort_by_key(|(item, _)| item.expiry_date);
        stock
    }

    /// Names of current stock, in inventory order
    #[must_use]
    pub fn current_stock_names(&self) -> Vec<String> {
        self.state
            .inventory
            .iter()
            .filter(|item| item.is_in_stock())
            .map(|item| item.name().to_owned())
            .collect()
    }

    /// Names of the most recent consumption-history entries, oldest first
    #[must_use]
    pub fn recent_history_names(&self) -> Vec<String> {
        let history: Vec<&InventoryItem> = self
            .state
            .inventory
            .iter()
            .filter(|item| !item.is_in_stock())
            .collect();
        let skip = history
            .len()
            .saturating_sub(self.engine.recent_history_limit());
        history
            .into_iter()
            .skip(skip)
            .map(|item| item.name().to_owned())
            .collect()
    }

    // ── Suggestions ─────────────────────────────────────────────────────

    /// Replace the working set with a fresh detector run
    pub fn refresh_suggestions(&mut self) {
        let list_names: Vec<String> = self
            .state
            .shopping_list
            .iter()
            .map(|item| item.name.clone())
            .collect();
        self.suggestions =
            self.engine
                .detect_all(&self.state.inventory, &list_names, self.clock.now_ms());
        debug!(count = self.suggestions.len(), "Suggestions refreshed");
    }

    /// Add a suggestion's item to the list and drop it from the working set
    ///
    /// Returns the new list item id. Unknown ids and suggestions without an
    /// item name leave everything untouched.
    pub fn accept_suggestion(&mut self, suggestion_id: &str) -> Option<String> {
        let name = self
            .suggestions
            .iter()
            .find(|s| s.id == suggestion_id)?
            .suggested_item_name
            .clone()?;
        let new_id = self.add_item(&name, Category::Other)?;
        self.suggestions.retain(|s| s.id != suggestion_id);
        info!(suggestion = suggestion_id, item = %name, "Suggestion accepted");
        Some(new_id)
    }

    /// Drop a suggestion from the working set
    pub fn dismiss_suggestion(&mut self, suggestion_id: &str) -> bool {
        let before = self.suggestions.len();
        self.suggestions.retain(|s| s.id != suggestion_id);
        self.suggestions.len() != before
    }

    // ── Advisory ────────────────────────────────────────────────────────

    /// Look up a healthier alternative for a list item
    ///
    /// On a match, a health-swap suggestion is placed in the working set
    /// (replacing an earlier one for the same item) and returned.
    pub async fn health_swap_for(&mut self, item_id: &str) -> Option<Suggestion> {
        let name = self
            .state
            .shopping_list
            .iter()
            .find(|item| item.id == item_id)?
            .name
            .clone();
        let swap = self.advisor.find_healthier_alternative(&name).await?;
        let suggestion =
            Suggestion::health_swap(item_id, &swap.original, &swap.alternative, &swap.reason);
        self.suggestions.retain(|s| s.id != suggestion.id);
        self.suggestions.push(suggestion.clone());
        Some(suggestion)
    }

    /// Predict missing items from current stock and recent history
    pub async fn predict_missing_items(&self) -> Vec<PredictedItem> {
        let stock = self.current_stock_names();
        let recent = self.recent_history_names();
        self.advisor.predict_missing_items(&stock, &recent).await
    }

    /// Put predicted items on the shopping list
    ///
    /// Names already on the list are skipped. Returns the ids of the new items.
    pub fn add_predictions(&mut self, predictions: &[PredictedItem]) -> Vec<String> {
        let mut added = Vec::new();
        for prediction in predictions {
            let listed = self
                .state
                .shopping_list
                .iter()
                .any(|item| item.name == prediction.item);
            if listed {
                continue;
            }
            if let Some(id) = self.add_item(&prediction.item, Category::Other) {
                added.push(id);
            }
        }
        if !added.is_empty() {
            info!(count = added.len(), "Predicted items added to list");
        }
        added
    }
}
