//! Shared application state.
//!
//! One `AppState` is built at startup and cloned into every handler by
//! axum. Both capabilities are trait objects so tests can inject their own
//! store or a deterministic id generator.

use std::sync::Arc;

use crate::id::{IdGenerator, UuidIdGenerator};
use crate::store::{InMemoryScoreStore, ScoreStore};

/// Shared application state: the score store and the id capability.
#[derive(Clone)]
pub struct AppState {
    /// id → points, process lifetime
    pub store: Arc<dyn ScoreStore>,
    /// Fresh-id capability for processed receipts
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    /// Production wiring: in-memory store, UUID v4 ids.
    pub fn new() -> Self {
        AppState {
            store: Arc::new(InMemoryScoreStore::new()),
            ids: Arc::new(UuidIdGenerator),
        }
    }

    /// Custom wiring, used by tests to substitute either capability.
    pub fn with_parts(store: Arc<dyn ScoreStore>, ids: Arc<dyn IdGenerator>) -> Self {
        AppState { store, ids }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}
