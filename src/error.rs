//! Error taxonomy for the advisory pipeline.
//!
//! Three failure classes, each detected at the boundary closest to its
//! cause: validation failures before any external call, unknown
//! neighborhood keys at catalog lookup, and generation-service faults at
//! the gateway. Downstream code only ever sees success-with-text or one of
//! these variants; nothing raises past the gateway untyped.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

// ---

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed sensor record or missing request field; rejected before
    /// any external call.
    #[error("{0}")]
    Validation(String),

    /// Unknown neighborhood key. A user-visible condition, not a fault.
    #[error("neighborhood not found: {0}")]
    NeighborhoodNotFound(String),

    /// The external generation capability was unreachable, rate-limited,
    /// or returned something unusable.
    #[error("could not connect to AI service: {0}")]
    Generation(String),
}

impl Error {
    // ---
    fn status(&self) -> StatusCode {
        // ---
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NeighborhoodNotFound(_) => StatusCode::NOT_FOUND,
            Error::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // ---
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
