// ABOUTME: Shelf-life estimation from item names and pantry freshness classification
// ABOUTME: Keyword lookup with first-match-wins order and a configurable default shelf life
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

use crate::config::{ExpiryConfig, RulesConfig};
use crate::tables::SHELF_LIFE_DAYS;
use nutricart_core::constants::time::{days_to_ms, MS_PER_DAY};
use nutricart_core::Timestamp;
use serde::{Deserialize, Serialize};

/// Maps item names to shelf life and expiry timestamps
#[derive(Debug, Clone)]
pub struct ExpiryEstimator {
    default_shelf_life_days: i64,
}

impl Default for ExpiryEstimator {
    fn default() -> Self {
        Self::new(&RulesConfig::global().expiry)
    }
}

impl ExpiryEstimator {
    /// Create an estimator from explicit settings
    #[must_use]
    pub const fn new(config: &ExpiryConfig) -> Self {
        Self {
            default_shelf_life_days: config.default_shelf_life_days,
        }
    }

    /// Shelf life for a name
    ///
    /// The first keyword (in table order) contained in the lowercased name wins;
    /// unknown names get the configured default.
    #[must_use]
    pub fn shelf_life_days(&self, item_name: &str) -> i64 {
        let lower_name = item_name.to_lowercase();
        SHELF_LIFE_DAYS
            .iter()
            .find(|(keyword, _)| lower_name.contains(keyword))
            .map_or(self.default_shelf_life_days, |(_, days)| *days)
    }

    /// Expiry timestamp for an item bought at `purchased_at`
    #[must_use]
    pub fn estimate_expiry(&self, item_name: &str, purchased_at: Timestamp) -> Timestamp {
        purchased_at.saturating_add(days_to_ms(self.shelf_life_days(item_name)))
    }
}

/// Freshness label for an item in current stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ExpiryStatus {
    /// Past its expiry day
    Expired,
    /// Three days or fewer left
    ExpiringSoon {
        /// Whole days remaining, rounded up
        days_left: i64,
    },
    /// More than three days left
    Fresh {
        /// Whole days remaining, rounded up
        days_left: i64,
    },
}

impl ExpiryStatus {
    /// Days at or below which an item is labelled as expiring soon
    pub const SOON_THRESHOLD_DAYS: i64 = 3;

    /// Classify an expiry timestamp relative to `now`
    ///
    /// Days left are rounded up, so an item expiring later today still counts as
    /// one day left and an item that expired earlier today counts as zero.
    #[must_use]
    pub fn classify(expiry_date: Timestamp, now: Timestamp) -> Self {
        let days_left = (expiry_date.saturating_sub(now) as f64 / MS_PER_DAY as f64).ceil() as i64;
        if days_left < 0 {
            Self::Expired
        } else if days_left <= Self::SOON_THRESHOLD_DAYS {
            Self::ExpiringSoon { days_left }
        } else {
            Self::Fresh { days_left }
        }
    }

    /// Short label for listings
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Expired => "Expired".to_owned(),
            Self::ExpiringSoon { days_left } => format!("{days_left} days left"),
            Self::Fresh { days_left } => format!("{days_left} days"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> ExpiryEstimator {
        ExpiryEstimator::new(&ExpiryConfig::default())
    }

    #[test]
    fn test_first_keyword_in_table_order_wins() {
        // "milk" precedes "bread" in the table
        assert_eq!(estimator().shelf_life_days("Milk Bread"), 7);
        // "bread" precedes "rice"
        assert_eq!(estimator().shelf_life_days("Rice Bread"), 5);
    }

    #[test]
    fn test_configured_default_applies_to_unknown_names() {
        let custom = ExpiryEstimator::new(&ExpiryConfig {
            default_shelf_life_days: 30,
        });
        assert_eq!(custom.shelf_life_days("Tofu"), 30);
        assert_eq!(custom.shelf_life_days("Brown rice"), 365);
    }

    #[test]
    fn test_classify_boundaries() {
        let now = 1_000 * MS_PER_DAY;
        assert_eq!(ExpiryStatus::classify(now - 2 * MS_PER_DAY, now), ExpiryStatus::Expired);
        assert_eq!(
            ExpiryStatus::classify(now - MS_PER_DAY / 2, now),
            ExpiryStatus::ExpiringSoon { days_left: 0 }
        );
        assert_eq!(
            ExpiryStatus::classify(now + 3 * MS_PER_DAY, now),
            ExpiryStatus::ExpiringSoon { days_left: 3 }
        );
        assert_eq!(
            ExpiryStatus::classify(now + 3 * MS_PER_DAY + 1, now),
            ExpiryStatus::Fresh { days_left: 4 }
        );
    }

    #[test]
    fn test_estimate_clamps_at_timestamp_range() {
        assert_eq!(estimator().estimate_expiry("Rice", i64::MAX - 1), i64::MAX);
        let unbounded = ExpiryEstimator::new(&ExpiryConfig {
            default_shelf_life_days: i64::MAX,
        });
        assert_eq!(unbounded.estimate_expiry("Tofu", 0), i64::MAX);
        assert_eq!(ExpiryStatus::classify(i64::MIN, i64::MAX), ExpiryStatus::Expired);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ExpiryStatus::Expired.label(), "Expired");
        assert_eq!(ExpiryStatus::ExpiringSoon { days_left: 2 }.label(), "2 days left");
        assert_eq!(ExpiryStatus::Fresh { days_left: 9 }.label(), "9 days");
    }
}
