// ABOUTME: Error types used across the household assistant
// ABOUTME: Re-exports the unified AppError and ErrorCode from nutricart-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

//! # Unified Error Handling System
//!
//! The error types live in `nutricart-core` so the rule engine and the
//! household layer report failures the same way.

pub use nutricart_core::errors::{AppError, AppResult, ErrorCode};
