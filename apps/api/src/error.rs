//! Error types for the Tally API.
//!
//! Maps domain errors onto the three HTTP outcomes the service defines:
//!
//! | Variant          | Status | Body                                          |
//! |------------------|--------|-----------------------------------------------|
//! | `InvalidReceipt` | 400    | `{"description": "The receipt is invalid"}`   |
//! | `Score(_)`       | 400    | `{"message": "<scoring error text>"}`         |
//! | `ReceiptNotFound`| 404    | `{"description": "No receipt found for that id"}` |
//!
//! Every error is terminal for its request; nothing is retried or escalated
//! beyond the single HTTP response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tally_core::ScoreError;

/// Tally API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body could not be decoded into the receipt shape.
    #[error("The receipt is invalid")]
    InvalidReceipt,

    /// Receipt decoded, but a field failed format validation while scoring.
    /// The scoring error text is surfaced verbatim to the client.
    #[error(transparent)]
    Score(#[from] ScoreError),

    /// Lookup against an identifier the service never issued (or has
    /// forgotten across a restart).
    #[error("No receipt found for that id")]
    ReceiptNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidReceipt => (
                StatusCode::BAD_REQUEST,
                json!({ "description": self.to_string() }),
            ),
            // Scoring failures use a "message" key, decode/lookup failures
            // use "description"; clients depend on the distinction.
            ApiError::Score(err) => (StatusCode::BAD_REQUEST, json!({ "message": err.to_string() })),
            ApiError::ReceiptNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "description": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn invalid_receipt_is_a_generic_400() {
        let response = ApiError::InvalidReceipt.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "description": "The receipt is invalid" })
        );
    }

    #[tokio::test]
    async fn score_errors_surface_their_text_under_message() {
        let err = ApiError::from(ScoreError::InvalidTotal {
            value: "abc".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "total \"abc\" is not a valid dollar amount" })
        );
    }

    #[tokio::test]
    async fn unknown_id_is_a_404() {
        let response = ApiError::ReceiptNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "description": "No receipt found for that id" })
        );
    }
}
