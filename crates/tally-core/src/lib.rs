//! # tally-core: Pure Scoring Logic for Tally
//!
//! This crate is the **heart** of Tally. It contains the whole receipt
//! scoring engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Clients                                 │   │
//! │  │    POST /receipts/process ──► GET /receipts/{id}/points         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/api (axum)                              │   │
//! │  │    routes, score store, id generation, config                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  receipt  │  │  amount   │  │   rules   │  │   error   │  │   │
//! │  │   │  Receipt  │  │  Amount   │  │  scoring  │  │ScoreError │  │   │
//! │  │   │   Item    │  │  (cents)  │  │  engine   │  │  (typed)  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO RANDOMNESS • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`receipt`] - The receipt wire shape (Receipt, Item)
//! - [`amount`] - Integer-cents currency value parsed from decimal text
//! - [`rules`] - The six scoring rules and the aggregator
//! - [`error`] - Typed format errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic - same input = same output
//! 2. **No I/O**: network, file system, randomness are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64) to avoid float errors
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{score_receipt, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![
//!         Item { short_description: "Gatorade".to_string(), price: "2.25".to_string() },
//!         Item { short_description: "Gatorade".to_string(), price: "2.25".to_string() },
//!         Item { short_description: "Gatorade".to_string(), price: "2.25".to_string() },
//!         Item { short_description: "Gatorade".to_string(), price: "2.25".to_string() },
//!     ],
//!     total: "9.00".to_string(),
//! };
//!
//! // 14 retailer + 50 round dollar + 25 quarter + 10 pairs + 10 afternoon
//! assert_eq!(score_receipt(&receipt).unwrap(), 109);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod error;
pub mod receipt;
pub mod rules;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Receipt` instead of
// `use tally_core::receipt::Receipt`

pub use amount::Amount;
pub use error::{ScoreError, ScoreResult};
pub use receipt::{Item, Receipt};
pub use rules::score_receipt;
