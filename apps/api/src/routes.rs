//! # Request Handlers
//!
//! The three HTTP endpoints, kept deliberately thin:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Request Flow                                    │
//! │                                                                         │
//! │  POST /receipts/process                                                 │
//! │    body ──decode──► Receipt ──score_receipt──► points                   │
//! │                                   │                                     │
//! │                           fresh id │ store.put(id, points)              │
//! │                                   ▼                                     │
//! │                            200 {"id": ...}                              │
//! │                                                                         │
//! │  GET /receipts/{id}/points                                              │
//! │    id ──store.get──► points ──► 200 {"points": ...}                     │
//! │                  └─► absent ──► 404                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All policy lives elsewhere: scoring in tally-core, status/body mapping
//! in [`ApiError`], storage discipline in the store. Handlers only
//! translate between HTTP and those pieces.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tally_core::{score_receipt, Receipt};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Response Bodies
// =============================================================================

/// `GET /` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// `POST /receipts/process` success response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// `GET /receipts/{id}/points` success response.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

// =============================================================================
// Router
// =============================================================================

/// Builds the service router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/receipts/process", post(process))
        .route("/receipts/{id}/points", get(points))
        .with_state(state)
}

// =============================================================================
// Handlers
// =============================================================================

/// Liveness greeting.
pub async fn home() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: "Hello World!".to_string(),
    })
}

/// Scores a submitted receipt and stores the result under a fresh id.
///
/// Decode failure and scoring failure are distinct 400s (see [`ApiError`]);
/// in both cases nothing is stored and no id is issued to the client.
pub async fn process(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) = payload.map_err(|_| ApiError::InvalidReceipt)?;

    let points = score_receipt(&receipt)?;
    let id = state.ids.generate();
    state.store.put(id.clone(), points).await;
    debug!(%id, points, retailer = %receipt.retailer, "receipt scored");

    Ok(Json(ProcessResponse { id }))
}

/// Returns the stored points for a previously processed receipt.
pub async fn points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state
        .store
        .get(&id)
        .await
        .ok_or(ApiError::ReceiptNotFound)?;

    Ok(Json(PointsResponse { points }))
}

// =============================================================================
// Unit Tests
// =============================================================================
