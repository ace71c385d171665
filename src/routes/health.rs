// src/routes/health.rs
//! API health check endpoint for the advisory backend.
//!
//! Defines the `/health` route used by container orchestrators and CI
//! pipelines to verify that the service is running and able to respond to
//! HTTP requests. It is a sibling module in the `routes` directory:
//! endpoint handler(s) stay internal to this file, and a subrouter is
//! exported to the gateway (`mod.rs`), which merges it into the top-level
//! API router so that `main.rs` does not need to know about individual
//! endpoints.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Handle `GET /health`.
///
/// Returns a static JSON object indicating the API is reachable and
/// functioning. Deliberately lightweight: it touches neither the sensor
/// stores nor the generation service.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Create a subrouter containing the `/health` route.
///
/// This router is generic over the application state so it can merge
/// cleanly with the gateway router, regardless of the state type.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
