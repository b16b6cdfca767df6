//! # Receipt Data Model
//!
//! The wire shape of a receipt and its line items.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt Shape                                   │
//! │                                                                         │
//! │  ┌─────────────────────────┐      ┌─────────────────────────┐          │
//! │  │        Receipt          │      │          Item           │          │
//! │  │  ─────────────────────  │      │  ─────────────────────  │          │
//! │  │  retailer      (text)   │  1:N │  shortDescription (text)│          │
//! │  │  purchaseDate  (text)   │─────►│  price            (text)│          │
//! │  │  purchaseTime  (text)   │      └─────────────────────────┘          │
//! │  │  items         (Item[]) │                                           │
//! │  │  total         (text)   │                                           │
//! │  └─────────────────────────┘                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why All-Text Fields?
//! The receipt arrives exactly as the client sent it. Numeric and date
//! interpretation belongs to the scoring rules, which own the format-error
//! taxonomy; deserialization only checks the JSON shape. A receipt that
//! decodes can still fail scoring ("abc" is valid JSON text for `total`).
//!
//! ## Invariants
//! - Receipt and Item are never mutated after deserialization
//! - Both live only for the duration of one scoring computation

use serde::{Deserialize, Serialize};

// =============================================================================
// Receipt
// =============================================================================

/// One retail purchase, as submitted by the client.
///
/// All fields are required at the JSON level; a body missing any of them is
/// rejected as undecodable before scoring runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Store name, e.g. "Target". Scored one point per alphanumeric char.
    pub retailer: String,

    /// Purchase date text, expected `YYYY-MM-DD` (exactly 10 characters).
    pub purchase_date: String,

    /// Purchase time text, expected `HH:MM` (24-hour clock, 5 characters).
    pub purchase_time: String,

    /// Purchased line items, in receipt order. At least one is expected,
    /// though an empty list is not rejected (it simply scores no item rules).
    pub items: Vec<Item>,

    /// Grand total as decimal currency text, e.g. "6.49".
    pub total: String,
}

// =============================================================================
// Item
// =============================================================================

/// One purchased line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-text product description. Whitespace-trimmed before scoring.
    pub short_description: String,

    /// Line price as decimal currency text, e.g. "2.25".
    pub price: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_camel_case_wire_names() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                { "shortDescription": "Mountain Dew 12PK", "price": "6.49" }
            ],
            "total": "6.49"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");
        assert_eq!(receipt.items[0].price, "6.49");
        assert_eq!(receipt.total, "6.49");
    }

    #[test]
    fn test_missing_field_is_a_decode_error() {
        // no "total"
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": []
        }"#;
        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }

    #[test]
    fn test_non_text_field_is_a_decode_error() {
        // total as a JSON number, not text
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [],
            "total": 6.49
        }"#;
        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }
}
