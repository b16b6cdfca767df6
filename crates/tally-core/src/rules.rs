//! # Scoring Rules
//!
//! The scoring engine: six independent rules plus the aggregator.
//!
//! ## Rule Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Scoring Rules                              │
//! │                                                                         │
//! │  Rule                      Input             Award                      │
//! │  ────────────────────────  ───────────────   ────────────────────────   │
//! │  retailer_points           retailer          +1 per alphanumeric char   │
//! │  round_dollar_points       total             +50 if no cents part       │
//! │  quarter_multiple_points   total             +25 if multiple of $0.25   │
//! │  item_pair_points          items             +5 per pair of items       │
//! │  description_points        items             +ceil(price × 0.2) per     │
//! │                                              item whose trimmed desc    │
//! │                                              length ≡ 0 (mod 3)         │
//! │  odd_day_points            purchaseDate      +6 if day-of-month is odd  │
//! │  afternoon_points          purchaseTime      +10 if 14:00 < t < 16:00   │
//! │                                                                         │
//! │  total = Σ rule outputs, or the FIRST format error (no partial score)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Every rule is a pure function: same receipt, same points, forever
//! 2. Rules never look at fields they don't score
//! 3. Numeric text is parsed through [`Amount`], never through floats
//! 4. Rule order cannot affect the total (addition commutes); it only
//!    decides which format error wins when several fields are malformed

use crate::amount::Amount;
use crate::error::{ScoreError, ScoreResult};
use crate::receipt::{Item, Receipt};

// =============================================================================
// Field-Format Constants
// =============================================================================

/// Maximum length of a `YYYY-MM-DD` purchase date.
pub const MAX_DATE_LEN: usize = 10;

/// Maximum length of an `HH:MM` purchase time.
pub const MAX_TIME_LEN: usize = 5;

// =============================================================================
// Aggregator
// =============================================================================

/// Scores a receipt: the sum of all rule awards, or the first format error.
///
/// A format error in any field aborts the whole computation; no partial
/// score is ever produced.
///
/// ## Example
/// ```rust
/// use tally_core::receipt::{Item, Receipt};
/// use tally_core::rules::score_receipt;
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),          // 6 alphanumerics → 6
///     purchase_date: "2022-01-01".to_string(), // day 01 is odd   → 6
///     purchase_time: "13:01".to_string(),      // outside window  → 0
///     items: vec![
///         Item { short_description: "Mountain Dew 12PK".to_string(), price: "6.49".to_string() },
///         Item { short_description: "Knorr Creamy Chicken".to_string(), price: "1.26".to_string() },
///     ],                                       // 1 pair → 5, descriptions not ×3 → 0
///     total: "35.35".to_string(),              // not round, not a quarter → 0
/// };
///
/// assert_eq!(score_receipt(&receipt).unwrap(), 17);
/// ```
pub fn score_receipt(receipt: &Receipt) -> ScoreResult<u64> {
    let total = Amount::parse(&receipt.total).map_err(|_| ScoreError::InvalidTotal {
        value: receipt.total.clone(),
    })?;

    let mut points = retailer_points(&receipt.retailer);
    points += round_dollar_points(total);
    points += quarter_multiple_points(total);
    points += item_pair_points(&receipt.items);
    points += description_points(&receipt.items)?;
    points += odd_day_points(&receipt.purchase_date)?;
    points += afternoon_points(&receipt.purchase_time)?;

    Ok(points)
}

// =============================================================================
// Retailer Rule
// =============================================================================

/// One point for every alphanumeric character in the retailer name.
///
/// Classification is Unicode-aware: letters and digits in any script count,
/// spaces and punctuation do not.
///
/// ## Example
/// ```rust
/// use tally_core::rules::retailer_points;
///
/// assert_eq!(retailer_points("Target"), 6);
/// assert_eq!(retailer_points("ABC 123!"), 6); // space and '!' excluded
/// assert_eq!(retailer_points("M&M Corner Market"), 14);
/// ```
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

// =============================================================================
// Total Rules
// =============================================================================

/// 50 points if the total is a round dollar amount with no cents.
pub fn round_dollar_points(total: Amount) -> u64 {
    if total.is_round_dollar() {
        50
    } else {
        0
    }
}

/// 25 points if the total is a multiple of $0.25.
///
/// Independent of [`round_dollar_points`]: a round-dollar total earns both
/// awards. That double-award is deliberate, not a bug to fix.
pub fn quarter_multiple_points(total: Amount) -> u64 {
    if total.is_quarter_multiple() {
        25
    } else {
        0
    }
}

// =============================================================================
// Item Rules
// =============================================================================

/// 5 points for every two items on the receipt.
///
/// ## Example
/// ```rust
/// use tally_core::receipt::Item;
/// use tally_core::rules::item_pair_points;
///
/// let item = Item { short_description: "x".to_string(), price: "1.00".to_string() };
/// assert_eq!(item_pair_points(&vec![item.clone(); 5]), 10); // floor(5/2) × 5
/// assert_eq!(item_pair_points(&[]), 0);
/// ```
pub fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * 5
}

/// For each item whose trimmed description length is a multiple of 3,
/// `ceil(price × 0.2)` points.
///
/// Length is counted in characters after trimming leading/trailing
/// whitespace, consistent with the Unicode-aware retailer rule. A trimmed
/// length of 0 counts as a multiple of 3 and contributes
/// `ceil(0 × 0.2) = 0` points; the case is pinned by test rather than
/// filtered out.
///
/// An unparseable price on a *qualifying* item aborts scoring. Items whose
/// description length is not a multiple of 3 never have their price parsed,
/// so a bad price there goes unnoticed.
pub fn description_points(items: &[Item]) -> ScoreResult<u64> {
    let mut points = 0;
    for item in items {
        let trimmed = item.short_description.trim();
        if trimmed.chars().count() % 3 == 0 {
            let price = Amount::parse(&item.price).map_err(|_| ScoreError::InvalidItemPrice {
                value: item.price.clone(),
            })?;
            points += price.fifth_rounded_up();
        }
    }
    Ok(points)
}

// =============================================================================
// Date Rule
// =============================================================================

/// 6 points if the day of the purchase date is odd.
///
/// The day is read as the last two characters of the date text; the rest of
/// the date is not validated beyond the length bounds.
///
/// ## Example
/// ```rust
/// use tally_core::rules::odd_day_points;
///
/// assert_eq!(odd_day_points("2022-01-01").unwrap(), 6);
/// assert_eq!(odd_day_points("2022-01-02").unwrap(), 0);
/// assert!(odd_day_points("").is_err());
/// ```
pub fn odd_day_points(purchase_date: &str) -> ScoreResult<u64> {
    let invalid = || ScoreError::InvalidPurchaseDate {
        value: purchase_date.to_string(),
    };

    if purchase_date.is_empty() || purchase_date.len() > MAX_DATE_LEN {
        return Err(invalid());
    }

    // Last two characters; a 1-char date has none and fails here.
    let day = purchase_date
        .len()
        .checked_sub(2)
        .and_then(|start| purchase_date.get(start..))
        .ok_or_else(invalid)?;
    let day: u32 = day.parse().map_err(|_| invalid())?;

    Ok(if day % 2 == 1 { 6 } else { 0 })
}

// =============================================================================
// Time Rule
// =============================================================================

/// 10 points if the purchase time is strictly after 14:00 and strictly
/// before 16:00.
///
/// Exactly 14:00 does not qualify, 14:01 does, 15:59 does, 16:00 does not.
/// The hour is characters 0..2 and the minute characters 3..5; the
/// separator byte between them is not inspected, and minutes beyond 59 are
/// not rejected (they still compare as "after the hour").
///
/// ## Example
/// ```rust
/// use tally_core::rules::afternoon_points;
///
/// assert_eq!(afternoon_points("14:01").unwrap(), 10);
/// assert_eq!(afternoon_points("15:59").unwrap(), 10);
/// assert_eq!(afternoon_points("14:00").unwrap(), 0);
/// assert_eq!(afternoon_points("16:00").unwrap(), 0);
/// ```
pub fn afternoon_points(purchase_time: &str) -> ScoreResult<u64> {
    let invalid = || ScoreError::InvalidPurchaseTime {
        value: purchase_time.to_string(),
    };

    if purchase_time.is_empty() || purchase_time.len() > MAX_TIME_LEN {
        return Err(invalid());
    }

    let hour: u32 = purchase_time
        .get(0..2)
        .ok_or_else(invalid)?
        .parse()
        .map_err(|_| invalid())?;
    let minute: u32 = purchase_time
        .get(3..5)
        .ok_or_else(invalid)?
        .parse()
        .map_err(|_| invalid())?;

    let in_window = (hour == 14 && minute > 0) || hour == 15;
    Ok(if in_window { 10 } else { 0 })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    fn receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![item("Mountain Dew 12PK", "6.49")],
            total: "6.49".to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Retailer rule
    // -------------------------------------------------------------------------

    #[test]
    fn retailer_counts_only_alphanumerics() {
        assert_eq!(retailer_points("ABC 123!"), 6);
        assert_eq!(retailer_points("Target"), 6);
        assert_eq!(retailer_points("M&M Corner Market"), 14);
        assert_eq!(retailer_points(""), 0);
        assert_eq!(retailer_points("  --  "), 0);
    }

    #[test]
    fn retailer_is_unicode_aware() {
        // Letters outside ASCII still count; the dash does not.
        assert_eq!(retailer_points("Münster-Markt"), 12);
    }

    // -------------------------------------------------------------------------
    // Total rules
    // -------------------------------------------------------------------------

    #[test]
    fn round_dollar_and_quarter_both_fire_on_round_totals() {
        let total = Amount::parse("10.00").unwrap();
        assert_eq!(round_dollar_points(total), 50);
        assert_eq!(quarter_multiple_points(total), 25);
    }

    #[test]
    fn quarter_fires_alone_on_quarter_totals() {
        let total = Amount::parse("10.25").unwrap();
        assert_eq!(round_dollar_points(total), 0);
        assert_eq!(quarter_multiple_points(total), 25);
    }

    #[test]
    fn neither_total_rule_fires_otherwise() {
        let total = Amount::parse("35.35").unwrap();
        assert_eq!(round_dollar_points(total), 0);
        assert_eq!(quarter_multiple_points(total), 0);
    }

    // -------------------------------------------------------------------------
    // Item pair rule
    // -------------------------------------------------------------------------

    #[test]
    fn pairs_award_five_points_each() {
        let one = vec![item("a", "1.00")];
        let five = vec![item("a", "1.00"); 5];
        assert_eq!(item_pair_points(&[]), 0);
        assert_eq!(item_pair_points(&one), 0);
        assert_eq!(item_pair_points(&five), 10);
    }

    // -------------------------------------------------------------------------
    // Description rule
    // -------------------------------------------------------------------------

    #[test]
    fn description_points_trim_before_measuring() {
        // "Emils Cheese Pizza" is 18 chars after trimming → ceil(12.25 × 0.2) = 3
        let items = vec![item("   Emils Cheese Pizza   ", "12.25")];
        assert_eq!(description_points(&items).unwrap(), 3);
    }

    #[test]
    fn description_points_skip_non_multiples_of_three() {
        // 4 chars → no award, price never parsed
        let items = vec![item("Coke", "2.25")];
        assert_eq!(description_points(&items).unwrap(), 0);
    }

    #[test]
    fn description_points_empty_description_counts_as_multiple_of_three() {
        // trimmed length 0: 0 mod 3 == 0, award is ceil(0.2 × price)
        let items = vec![item("   ", "1.00")];
        assert_eq!(description_points(&items).unwrap(), 1);
        // and with a zero price the award itself is zero
        let items = vec![item("", "0.00")];
        assert_eq!(description_points(&items).unwrap(), 0);
    }

    #[test]
    fn description_points_accumulate_across_items() {
        let items = vec![
            item("Emils Cheese Pizza", "12.25"), // 18 chars → 3
            item("Klarbrunn 12-PK 12 FL OZ", "12.00"), // 24 chars → 3
            item("Coke", "2.25"),                // 4 chars  → 0
        ];
        assert_eq!(description_points(&items).unwrap(), 6);
    }

    #[test]
    fn description_points_fail_on_bad_price_of_qualifying_item() {
        let items = vec![item("abc", "free")];
        assert_eq!(
            description_points(&items),
            Err(ScoreError::InvalidItemPrice {
                value: "free".to_string()
            })
        );
    }

    #[test]
    fn description_points_ignore_bad_price_of_non_qualifying_item() {
        // 4 chars → rule never parses the price, so "free" is never seen
        let items = vec![item("Coke", "free")];
        assert_eq!(description_points(&items).unwrap(), 0);
    }

    // -------------------------------------------------------------------------
    // Date rule
    // -------------------------------------------------------------------------

    #[test]
    fn odd_days_score_six() {
        assert_eq!(odd_day_points("2022-01-01").unwrap(), 6);
        assert_eq!(odd_day_points("2022-03-31").unwrap(), 6);
        assert_eq!(odd_day_points("2022-01-02").unwrap(), 0);
        assert_eq!(odd_day_points("2022-01-28").unwrap(), 0);
    }

    #[test]
    fn date_format_errors() {
        assert!(odd_day_points("").is_err());
        assert!(odd_day_points("2022-01-01T00").is_err()); // longer than 10
        assert!(odd_day_points("2022-01-xx").is_err()); // day not an integer
        assert!(odd_day_points("5").is_err()); // no last-two-characters
    }

    // -------------------------------------------------------------------------
    // Time rule
    // -------------------------------------------------------------------------

    #[test]
    fn afternoon_window_is_exclusive_at_both_ends() {
        assert_eq!(afternoon_points("14:00").unwrap(), 0);
        assert_eq!(afternoon_points("14:01").unwrap(), 10);
        assert_eq!(afternoon_points("15:00").unwrap(), 10);
        assert_eq!(afternoon_points("15:59").unwrap(), 10);
        assert_eq!(afternoon_points("16:00").unwrap(), 0);
        assert_eq!(afternoon_points("13:01").unwrap(), 0);
    }

    #[test]
    fn time_format_errors() {
        assert!(afternoon_points("").is_err());
        assert!(afternoon_points("14:00:00").is_err()); // longer than 5
        assert!(afternoon_points("2pm").is_err());
        assert!(afternoon_points("1:30").is_err()); // hour substring "1:" is not an integer
    }

    // -------------------------------------------------------------------------
    // Aggregator
    // -------------------------------------------------------------------------

    #[test]
    fn target_receipt_scores_seventeen() {
        // retailer 6 + odd day 6 + one pair 5, everything else 0
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Knorr Creamy Chicken", "1.26"),
            ],
            total: "35.35".to_string(),
        };
        assert_eq!(score_receipt(&receipt).unwrap(), 17);
    }

    #[test]
    fn score_is_deterministic() {
        let receipt = receipt();
        let first = score_receipt(&receipt).unwrap();
        let second = score_receipt(&receipt).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn bad_total_aborts_with_no_partial_score() {
        let mut receipt = receipt();
        receipt.total = "abc".to_string();
        assert_eq!(
            score_receipt(&receipt),
            Err(ScoreError::InvalidTotal {
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn bad_date_aborts_scoring() {
        let mut receipt = receipt();
        receipt.purchase_date = "January 1st".to_string();
        assert!(matches!(
            score_receipt(&receipt),
            Err(ScoreError::InvalidPurchaseDate { .. })
        ));
    }

    #[test]
    fn bad_time_aborts_scoring() {
        let mut receipt = receipt();
        receipt.purchase_time = "noonish".to_string();
        assert!(matches!(
            score_receipt(&receipt),
            Err(ScoreError::InvalidPurchaseTime { .. })
        ));
    }
}
