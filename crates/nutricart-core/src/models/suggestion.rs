// ABOUTME: Transient suggestion model produced by the rule engine
// ABOUTME: Expiring-soon, rebuy, and health-swap suggestions with deterministic identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors

use crate::constants::suggestion_ids::{
    EXPIRED_PREFIX, EXPIRING_PREFIX, HEALTH_SWAP_PREFIX, REBUY_PREFIX,
};
use serde::{Deserialize, Serialize};

/// Kind of suggestion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionType {
    /// Pantry item expired or about to
    ExpiringSoon,
    /// Previously consumed item probably needed again
    Rebuy,
    /// Healthier substitute for a list item
    HealthSwap,
}

/// A derived recommendation held in the caller's working set
///
/// The `id` is derived from the source item id and the kind, so re-running the
/// detectors yields the same ids for the same state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Stable identifier (`<kind prefix><item id>`)
    pub id: String,
    /// Suggestion kind
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    /// Human-readable text
    pub message: String,
    /// Lookup key of the item that triggered this suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_item_id: Option<String>,
    /// Name to add to the shopping list if accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_item_name: Option<String>,
}

impl Suggestion {
    /// Item expiring within the warning window
    #[must_use]
    pub fn expiring_soon(item_id: &str, item_name: &str, days_left: i64) -> Self {
        Self {
            id: format!("{EXPIRING_PREFIX}{item_id}"),
            kind: SuggestionType::ExpiringSoon,
            message: format!(
                "{item_name} is expiring in {days_left} days! Plan a meal around it."
            ),
            related_item_id: Some(item_id.to_owned()),
            suggested_item_name: None,
        }
    }

    /// Item already past its expiry date
    #[must_use]
    pub fn expired(item_id: &str, item_name: &str) -> Self {
        Self {
            id: format!("{EXPIRED_PREFIX}{item_id}"),
            kind: SuggestionType::ExpiringSoon,
            message: format!("{item_name} has likely expired."),
            related_item_id: Some(item_id.to_owned()),
            suggested_item_name: None,
        }
    }

    /// Consumed item worth buying again
    #[must_use]
    pub fn rebuy(item_id: &str, item_name: &str) -> Self {
        Self {
            id: format!("{REBUY_PREFIX}{item_id}"),
            kind: SuggestionType::Rebuy,
            message: format!("You bought {item_name} a while ago. Need more?"),
            related_item_id: None,
            suggested_item_name: Some(item_name.to_owned()),
        }
    }

    /// Healthier alternative for a shopping list item
    #[must_use]
    pub fn health_swap(item_id: &str, item_name: &str, alternative: &str, reason: &str) -> Self {
        Self {
            id: format!("{HEALTH_SWAP_PREFIX}{item_id}"),
            kind: SuggestionType::HealthSwap,
            message: format!("Try {alternative} instead of {item_name}. {reason}"),
            related_item_id: Some(item_id.to_owned()),
            suggested_item_name: Some(alternative.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_and_expiring_ids_never_collide() {
        let soon = Suggestion::expiring_soon("42", "Milk", 2);
        let expired = Suggestion::expired("42", "Milk");
        assert_eq!(soon.id, "exp-42");
        assert_eq!(expired.id, "exp-expired-42");
        assert_ne!(soon.id, expired.id);
    }

    #[test]
    fn test_type_field_uses_wire_names() {
        let json = serde_json::to_value(Suggestion::rebuy("7", "Eggs")).unwrap();
        assert_eq!(json["type"], "REBUY");
        assert_eq!(json["suggestedItemName"], "Eggs");
        assert!(json.get("relatedItemId").is_none());
    }
}
