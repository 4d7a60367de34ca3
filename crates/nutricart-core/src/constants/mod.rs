// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Time units, storage keys, and list defaults shared across NutriCart crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Time unit conversions (all timestamps are milliseconds since the Unix epoch)
pub mod time {
    /// Milliseconds in one second
    pub const MS_PER_SECOND: i64 = 1_000;
    /// Milliseconds in one hour
    pub const MS_PER_HOUR: i64 = 60 * 60 * MS_PER_SECOND;
    /// Milliseconds in one day
    pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

    /// Convert a whole number of days to milliseconds, clamping at the `i64` range
    #[must_use]
    pub const fn days_to_ms(days: i64) -> i64 {
        days.saturating_mul(MS_PER_DAY)
    }
}

/// Persistence keys for the two stored collections
pub mod storage_keys {
    /// Key under which the active shopping list is stored
    pub const CURRENT_LIST: &str = "nutricart_list";
    /// Key under which the full inventory (stock and history) is stored
    pub const CURRENT_INVENTORY: &str = "nutricart_inventory";
}

/// Defaults applied to newly created shopping list entries
pub mod list_defaults {
    /// Quantity assigned to an item added by name only
    pub const QUANTITY: f64 = 1.0;
    /// Unit assigned to an item added by name only
    pub const UNIT: &str = "pkg";
}

/// Suggestion identifier prefixes, combined with the source item id
pub mod suggestion_ids {
    /// Item expiring within the warning window
    pub const EXPIRING_PREFIX: &str = "exp-";
    /// Item already past its expiry date
    pub const EXPIRED_PREFIX: &str = "exp-expired-";
    /// Consumed item due for repurchase
    pub const REBUY_PREFIX: &str = "rebuy-";
    /// Healthier substitute for a shopping list item
    pub const HEALTH_SWAP_PREFIX: &str = "swap-";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Default service name for the household assistant
    pub const NUTRICART: &str = "nutricart";
}

#[cfg(test)]
mod tests {
    use super::time::{days_to_ms, MS_PER_DAY};

    #[test]
    fn test_days_to_ms_saturates() {
        assert_eq!(days_to_ms(3), 3 * MS_PER_DAY);
        assert_eq!(days_to_ms(200_000_000_000), i64::MAX);
        assert_eq!(days_to_ms(-200_000_000_000), i64::MIN);
    }
}
