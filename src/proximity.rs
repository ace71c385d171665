//! Neighborhood-scale proximity filtering.

use crate::models::Sensor;

// ---

/// Kilometers per degree, the rough conversion used throughout.
const KM_PER_DEGREE: f64 = 111.0;

/// Planar distance approximation between two points, in kilometers:
/// `sqrt(Δlat² + Δlng²) × 111`.
///
/// Only valid at the scale of a single city; the error grows with latitude
/// and with distance. Prompt text downstream quotes radii measured this
/// way, so this must stay the flat approximation rather than a
/// great-circle distance.
pub fn flat_distance_km(lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64) -> f64 {
    // ---
    let d_lat = lat_a - lat_b;
    let d_lng = lng_a - lng_b;
    (d_lat * d_lat + d_lng * d_lng).sqrt() * KM_PER_DEGREE
}

/// Filter `sensors` to those within `radius_km` of the target point.
///
/// Pure over its inputs: a zero or negative radius matches nothing, an
/// empty input yields an empty result, and input order is preserved.
pub fn nearby(sensors: &[Sensor], target_lat: f64, target_lng: f64, radius_km: f64) -> Vec<Sensor> {
    // ---
    if radius_km <= 0.0 {
        return Vec::new();
    }
    sensors
        .iter()
        .filter(|s| {
            flat_distance_km(s.location.lat, s.location.lng, target_lat, target_lng) <= radius_km
        })
        .cloned()
        .collect()
}
