// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Injectable clock and identifier suppliers used by the household aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

/// Wall clock abstraction
pub mod clock;
/// Identifier generation
pub mod ids;
