//! Neighborhood review endpoint.
//!
//! `POST /api/review` runs the full advisory pipeline for a named
//! neighborhood: proximity match, prompt composition, generation under the
//! long budget, history recording. Client-supplied `sensorData` is
//! considered alongside the registry for this request only.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{RawSensor, Sensor};
use crate::{AppState, Error};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/review", post(handler))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewRequest {
    #[serde(default)]
    neighborhood: Option<String>,
    #[serde(default)]
    sensor_data: Vec<RawSensor>,
}

#[derive(Serialize)]
struct ReviewResponse {
    review: String,
}

async fn handler(
    State(state): State<AppState>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>, Error> {
    // ---
    let key = match req.neighborhood.as_deref().map(str::trim) {
        Some(k) if !k.is_empty() => k.to_string(),
        _ => return Err(Error::Validation("neighborhood required".to_string())),
    };

    let extra: Vec<Sensor> = req.sensor_data.into_iter().map(RawSensor::into_sensor).collect();
    info!(
        "POST /api/review for '{}' ({} client sensors)",
        key,
        extra.len()
    );

    let result = state.advisor.review(&key, &extra).await?;
    Ok(Json(ReviewResponse { review: result.review }))
}
