//! # Tally API
//!
//! HTTP server over the tally-core scoring engine.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally API Surface                              │
//! │                                                                         │
//! │  GET  /                      200 {"message": "Hello World!"}            │
//! │                                                                         │
//! │  POST /receipts/process      200 {"id": "<uuid>"}                       │
//! │                              400 {"description": "The receipt is        │
//! │                                   invalid"}        (body won't decode)  │
//! │                              400 {"message": "<scoring error>"}         │
//! │                                                    (field format)       │
//! │                                                                         │
//! │  GET  /receipts/{id}/points  200 {"points": <integer>}                  │
//! │                              404 {"description": "No receipt found      │
//! │                                   for that id"}                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PORT` - HTTP server port (default: 5000)

pub mod config;
pub mod error;
pub mod id;
pub mod routes;
pub mod state;
pub mod store;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
