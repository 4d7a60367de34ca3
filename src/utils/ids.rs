// ABOUTME: Opaque identifier suppliers for new shopping list entries
// ABOUTME: UUID v4 strings in production, a predictable counter for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Produces unique identifier strings
pub trait IdSupplier: Send + Sync {
    /// A fresh identifier, never returned before by this supplier
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSupplier;

impl IdSupplier for UuidIdSupplier {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `<prefix>1`, `<prefix>2`, ... in call order
#[derive(Debug)]
pub struct SequentialIdSupplier {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdSupplier {
    /// Start counting from 1 with the given prefix
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIdSupplier {
    fn default() -> Self {
        Self::new("item-")
    }
}

impl IdSupplier for SequentialIdSupplier {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}{n}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_count_up() {
        let ids = SequentialIdSupplier::new("g");
        assert_eq!(ids.next_id(), "g1");
        assert_eq!(ids.next_id(), "g2");
    }

    #[test]
    fn test_uuid_ids_parse_and_differ() {
        let first = UuidIdSupplier.next_id();
        let second = UuidIdSupplier.next_id();
        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
    }
}
