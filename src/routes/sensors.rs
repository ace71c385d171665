//! Sensor catalog endpoints.
//!
//! `GET /api/sensors` serves the registry with the dashboard's filters:
//! category, fine-grained type, status, and free-text search. An unknown
//! category or status filter yields an empty set, never an error.
//! `POST /api/sensors` appends submitted records (map-click placement),
//! generating ids where the client omitted them.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{RawSensor, Sensor, SensorCategory, SensorStatus};
use crate::registry::SensorRegistry;
use crate::{AppState, Error};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/sensors", get(list_sensors).post(add_sensors))
}

#[derive(Debug, Deserialize)]
struct SensorQuery {
    category: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    status: Option<String>,
    q: Option<String>,
}

#[derive(Serialize)]
struct SensorsResponse {
    sensors: Vec<Sensor>,
}

async fn list_sensors(
    Query(params): Query<SensorQuery>,
    State(state): State<AppState>,
) -> Json<SensorsResponse> {
    // ---
    let registry = &state.registry;

    // Start from the narrowest registry view the parameters allow
    let mut sensors = if let Some(c) = params.category.as_deref().filter(|c| *c != "all") {
        match SensorCategory::parse(c) {
            Some(category) => registry.by_category(category),
            None => Vec::new(),
        }
    } else if let Some(kind) = params.kind.as_deref() {
        registry.by_type(kind)
    } else if let Some(status) = params.status.as_deref() {
        registry.by_status(SensorStatus::parse(status))
    } else if let Some(q) = params.q.as_deref() {
        registry.search(q)
    } else {
        registry.list_all()
    };

    // Remaining parameters narrow the selected view; re-applying the one
    // that picked the view is a no-op
    if let Some(kind) = params.kind.as_deref() {
        sensors.retain(|s| s.kind == kind);
    }
    if let Some(status) = params.status.as_deref() {
        let status = SensorStatus::parse(status);
        sensors.retain(|s| s.status == status);
    }
    if let Some(q) = params.q.as_deref() {
        sensors = SensorRegistry::filter_term(sensors, q);
    }

    Json(SensorsResponse { sensors })
}

#[derive(Debug, Deserialize)]
struct AddSensorsRequest {
    #[serde(default)]
    sensors: Option<Vec<RawSensor>>,
}

#[derive(Serialize)]
struct AddSensorsResponse {
    added: usize,
}

async fn add_sensors(
    State(state): State<AppState>,
    Json(req): Json<AddSensorsRequest>,
) -> Result<impl IntoResponse, Error> {
    // ---
    let raw = req
        .sensors
        .ok_or_else(|| Error::Validation("sensors required".to_string()))?;

    let mut added = 0;
    for sensor in raw.into_iter().map(RawSensor::into_sensor) {
        state.registry.add(sensor)?;
        added += 1;
    }

    info!("POST /api/sensors added {} sensors ({} total)", added, state.registry.len());
    Ok((StatusCode::OK, Json(AddSensorsResponse { added })))
}
