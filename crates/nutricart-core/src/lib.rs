// ABOUTME: Core types and constants for the NutriCart shopping list and pantry assistant
// ABOUTME: Foundation crate with error handling, domain models, and time constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

#![deny(unsafe_code)]

//! # `NutriCart` Core
//!
//! Foundation crate providing the shared domain model for the `NutriCart`
//! household assistant. The rule engine (`nutricart-intelligence`) and the
//! household lifecycle (`nutricart`) both build on these types, so this crate is
//! designed to change infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Time units and fixed storage keys
//! - **models**: `GroceryItem`, `InventoryItem`, `Suggestion`, `Category`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (shopping list, inventory, suggestions)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{Category, GroceryItem, InventoryItem, Suggestion, SuggestionType, Timestamp};
