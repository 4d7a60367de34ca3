// ABOUTME: Persistence abstraction for the shopping list and pantry snapshot
// ABOUTME: Pluggable key-value backends (in-memory, JSON files) behind an async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

//! # State Storage
//!
//! The household is persisted as two JSON documents, one per collection, under
//! fixed keys. Backends only move opaque strings; encoding and the fallback to
//! starter data on missing or unreadable documents happen in [`load_state`].

/// JSON file backend
pub mod file;
/// In-memory backend
pub mod memory;

pub use file::FileStore;
pub use memory::InMemoryStore;

use crate::errors::AppResult;
use crate::household::seed;
use async_trait::async_trait;
use nutricart_core::constants::storage_keys;
use nutricart_core::{GroceryItem, InventoryItem, Timestamp};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Key-value store for serialized state
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn load(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn save(&self, key: &str, value: &str) -> AppResult<()>;
}

/// The persisted unit: active list plus full inventory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdState {
    /// Active shopping list
    pub shopping_list: Vec<GroceryItem>,
    /// Current stock and consumption history
    pub inventory: Vec<InventoryItem>,
}

impl HouseholdState {
    /// Starter data relative to `now`
    #[must_use]
    pub fn starter(now: Timestamp) -> Self {
        Self {
            shopping_list: seed::starter_list(now),
            inventory: seed::starter_inventory(now),
        }
    }
}

/// Load both collections, falling back to starter data per key
///
/// Never fails: a missing key, a backend read error, and an undecodable
/// document all yield the starter collection for that key.
pub async fn load_state(store: &dyn StateStore, now: Timestamp) -> HouseholdState {
    let shopping_list = load_or_seed(store, storage_keys::CURRENT_LIST, || {
        seed::starter_list(now)
    })
    .await;
    let inventory = load_or_seed(store, storage_keys::CURRENT_INVENTORY, || {
        seed::starter_inventory(now)
    })
    .await;
    HouseholdState {
        shopping_list,
        inventory,
    }
}

/// Write both collections
///
/// # Errors
///
/// Returns an error if encoding fails or the backend rejects a write
pub async fn save_state(store: &dyn StateStore, state: &HouseholdState) -> AppResult<()> {
    let list_json = serde_json::to_string(&state.shopping_list)?;
    let inventory_json = serde_json::to_string(&state.inventory)?;
    store.save(storage_keys::CURRENT_LIST, &list_json).await?;
    store
        .save(storage_keys::CURRENT_INVENTORY, &inventory_json)
        .await?;
    debug!(
        list = state.shopping_list.len(),
        inventory = state.inventory.len(),
        "Household state saved"
    );
    Ok(())
}

async fn load_or_seed<T, F>(store: &dyn StateStore, key: &str, seed: F) -> Vec<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    match store.load(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key, error = %e, "Stored state is malformed, using starter data");
                seed()
            }
        },
        Ok(None) => {
            warn!(key, "No stored state, using starter data");
            seed()
        }
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored state, using starter data");
            seed()
        }
    }
}
