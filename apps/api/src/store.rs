//! # Score Store
//!
//! Holds the id → points mapping for the process lifetime.
//!
//! ## Thread Safety
//! The store is shared by every in-flight request, so access goes through
//! `tokio::sync::RwLock`:
//! 1. Lookups vastly outnumber writes and may proceed concurrently
//! 2. A write takes the lock exclusively for the single map insert
//! 3. Handlers hold the guard only across the one map operation
//!
//! ## Lifecycle
//! Entries are created by the process handler and never updated, expired,
//! or deleted; they live until the process exits. There is no persistence:
//! a restart forgets every score, by design.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Storage abstraction for receipt scores.
///
/// Injected into the handlers instead of a global map so tests can
/// substitute their own implementation and so the locking discipline lives
/// in exactly one place.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Inserts a score under `id`. Overwriting an existing id is permitted
    /// but never exercised: ids are freshly generated per receipt.
    async fn put(&self, id: String, points: u64);

    /// Looks up the score for `id`; `None` when the id was never issued.
    async fn get(&self, id: &str) -> Option<u64>;
}

/// In-memory score store backed by a read-write-locked HashMap.
#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    scores: RwLock<HashMap<String, u64>>,
}

impl InMemoryScoreStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScoreStore for InMemoryScoreStore {
    async fn put(&self, id: String, points: u64) {
        self.scores.write().await.insert(id, points);
    }

    async fn get(&self, id: &str) -> Option<u64> {
        self.scores.read().await.get(id).copied()
    }
}
