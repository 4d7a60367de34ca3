// ABOUTME: Core data models for the NutriCart shopping list, pantry inventory, and suggestions
// ABOUTME: Re-exports GroceryItem, InventoryItem, Category, and Suggestion definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

//! # Data Models
//!
//! Entities follow the item lifecycle: a [`GroceryItem`] is created on the
//! shopping list, checked off, then finalized into an [`InventoryItem`] which is
//! eventually consumed or removed. [`Suggestion`]s are derived from that state and
//! never persisted as domain truth.
//!
//! All models serialize with camelCase field names so that stored state keeps the
//! same layout regardless of which front-end wrote it.

mod category;
mod item;
mod suggestion;

pub use category::Category;
pub use item::{GroceryItem, InventoryItem};
pub use suggestion::{Suggestion, SuggestionType};

/// Milliseconds since the Unix epoch
pub type Timestamp = i64;
