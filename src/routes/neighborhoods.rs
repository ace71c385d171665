//! Neighborhood catalog endpoint.
//!
//! `GET /api/neighborhoods` lists the static area records, keyed, for
//! selection UI population.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::models::Neighborhood;
use crate::AppState;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/neighborhoods", get(handler))
}

#[derive(Serialize)]
struct NeighborhoodEntry {
    key: String,
    #[serde(flatten)]
    record: Neighborhood,
}

#[derive(Serialize)]
struct NeighborhoodsResponse {
    neighborhoods: Vec<NeighborhoodEntry>,
}

async fn handler(State(state): State<AppState>) -> Json<NeighborhoodsResponse> {
    // ---
    let neighborhoods = state
        .catalog
        .iter()
        .map(|(key, record)| NeighborhoodEntry {
            key: key.to_string(),
            record: record.clone(),
        })
        .collect();

    Json(NeighborhoodsResponse { neighborhoods })
}
