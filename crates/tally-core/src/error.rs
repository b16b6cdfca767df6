//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  └── ScoreError       - Receipt field format failures                  │
//! │                                                                         │
//! │  API errors (apps/api)                                                 │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ScoreError → ApiError → HTTP 400 body                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending field value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Score Error
// =============================================================================

/// Receipt scoring errors.
///
/// Any one of these aborts the entire scoring computation: a receipt either
/// scores completely or not at all, never partially. The `Display` text of
/// each variant is surfaced verbatim to the client in the HTTP 400 body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The receipt `total` is not valid decimal currency text.
    #[error("total {value:?} is not a valid dollar amount")]
    InvalidTotal { value: String },

    /// An item `price` is not valid decimal currency text.
    #[error("item price {value:?} is not a valid dollar amount")]
    InvalidItemPrice { value: String },

    /// The `purchaseDate` is empty, too long, or its day-of-month does not
    /// parse as an integer.
    #[error("purchase date {value:?} must be of format YYYY-MM-DD")]
    InvalidPurchaseDate { value: String },

    /// The `purchaseTime` is empty, too long, or its hour/minute substrings
    /// do not parse as integers.
    #[error("purchase time {value:?} must be of format HH:MM")]
    InvalidPurchaseTime { value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ScoreError.
pub type ScoreResult<T> = Result<T, ScoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
