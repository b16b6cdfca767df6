//! # Amount Module
//!
//! Provides the `Amount` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Worse for us: the quarter rule asks "total % 0.25 == 0", and          │
//! │  float modulo makes that comparison unreliable for amounts like        │
//! │  35.75 depending on representation error.                              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                           │
//! │    "35.75" → 3575 cents → 3575 % 25 == 0 is EXACT                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::amount::Amount;
//!
//! // Parse from receipt text (the only way in)
//! let total = Amount::parse("6.49").unwrap();
//! assert_eq!(total.cents(), 649);
//!
//! // The numeric questions the scoring rules ask
//! assert!(!total.is_round_dollar());
//! assert!(!total.is_quarter_multiple());
//! assert_eq!(total.fifth_rounded_up(), 2); // ceil(6.49 * 0.2)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// Amount Type
// =============================================================================

/// A monetary value in cents, parsed from receipt decimal text.
///
/// ## Design Decisions
/// - **i64 cents**: exact arithmetic, no floating point anywhere
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Parse-once**: every rule that needs the number gets the same parse,
///   so a malformed "total" fails identically no matter which rule runs
///
/// ## Where Amount is Used
/// ```text
/// Receipt.total ──► Amount ──► round-dollar rule (+50)
///                          └─► quarter rule      (+25)
/// Item.price    ──► Amount ──► description rule  (+ceil(price × 0.2))
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(i64);

/// Parse failure for currency text.
///
/// Deliberately carries no payload; callers attach the offending field value
/// when they raise the user-facing [`ScoreError`](crate::error::ScoreError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a valid decimal dollar amount")]
pub struct ParseAmountError;

impl Amount {
    /// Parses decimal currency text like `"6.49"`, `"10"`, or `"0.5"`.
    ///
    /// ## Accepted Grammar
    /// One or more ASCII digits, optionally followed by `.` and one or two
    /// fraction digits. Leading/trailing whitespace is tolerated.
    ///
    /// Signs, currency symbols, thousands separators, scientific notation,
    /// and sub-cent precision are all rejected: receipt fields are plain
    /// currency text, and integer cents cannot represent fractions of a cent.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::amount::Amount;
    ///
    /// assert_eq!(Amount::parse("35.35").unwrap().cents(), 3535);
    /// assert_eq!(Amount::parse("10").unwrap().cents(), 1000);
    /// assert_eq!(Amount::parse("0.5").unwrap().cents(), 50);
    ///
    /// assert!(Amount::parse("abc").is_err());
    /// assert!(Amount::parse("$10.00").is_err());
    /// assert!(Amount::parse("1.005").is_err());
    /// assert!(Amount::parse("-5.00").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseAmountError> {
        let text = text.trim();

        let (dollars, fraction) = match text.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (text, None),
        };

        if dollars.is_empty() || !dollars.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseAmountError);
        }
        let dollars: i64 = dollars.parse().map_err(|_| ParseAmountError)?;
        let mut cents = dollars.checked_mul(100).ok_or(ParseAmountError)?;

        if let Some(frac) = fraction {
            if frac.is_empty() || frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseAmountError);
            }
            let mut minor: i64 = frac.parse().map_err(|_| ParseAmountError)?;
            if frac.len() == 1 {
                // "0.5" means fifty cents, not five
                minor *= 10;
            }
            cents = cents.checked_add(minor).ok_or(ParseAmountError)?;
        }

        Ok(Amount(cents))
    }

    /// Creates an Amount from cents directly (test fixtures, mostly).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Amount(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whether the amount is a round dollar value with no cents part.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::amount::Amount;
    ///
    /// assert!(Amount::parse("10.00").unwrap().is_round_dollar());
    /// assert!(!Amount::parse("10.25").unwrap().is_round_dollar());
    /// ```
    #[inline]
    pub const fn is_round_dollar(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Whether the amount is an exact multiple of a quarter dollar ($0.25).
    ///
    /// Every round dollar is also a quarter multiple; the two checks are
    /// intentionally independent because the scoring rules award both.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::amount::Amount;
    ///
    /// assert!(Amount::parse("10.25").unwrap().is_quarter_multiple());
    /// assert!(Amount::parse("10.00").unwrap().is_quarter_multiple());
    /// assert!(!Amount::parse("35.35").unwrap().is_quarter_multiple());
    /// ```
    #[inline]
    pub const fn is_quarter_multiple(&self) -> bool {
        self.0 % 25 == 0
    }

    /// One fifth of the amount, in whole dollars, rounded up.
    ///
    /// This is `ceil(amount × 0.2)` computed exactly in integer math:
    /// a fifth of the amount is `cents / 500` dollars, with any remainder
    /// rounding up. `div_ceil` cannot overflow, so this holds for every
    /// parseable amount up to `i64::MAX` cents.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::amount::Amount;
    ///
    /// // ceil(6.49 × 0.2) = ceil(1.298) = 2
    /// assert_eq!(Amount::parse("6.49").unwrap().fifth_rounded_up(), 2);
    /// // ceil(10.00 × 0.2) = 2 exactly
    /// assert_eq!(Amount::parse("10.00").unwrap().fifth_rounded_up(), 2);
    /// ```
    #[inline]
    pub const fn fifth_rounded_up(&self) -> u64 {
        // `i64::div_ceil` is still unstable (`int_roundings`); this is the
        // same ceiling division spelled out for a positive divisor.
        let q = self.0 / 500;
        let r = self.0 % 500;
        (if r > 0 { q + 1 } else { q }) as u64
    }

    /// Zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the amount in a human-readable format.
///
/// For debugging and log output only; the API never serializes an Amount.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
