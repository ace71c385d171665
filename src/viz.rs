//! Commands to the map visualization.
//!
//! The map itself (3D rendering, camera control) is an external
//! collaborator. The advisor issues its two commands through this trait
//! rather than reaching for ambient globals, so any renderer (or none)
//! can be attached.

use crate::models::Sensor;

// ---

pub trait VisualizationSink: Send + Sync {
    /// Move the camera toward a point. Advisory: a sink with no active
    /// view may ignore it.
    fn fly_to(&self, lat: f64, lng: f64);

    /// Replace all currently displayed sensor markers with `sensors`.
    /// Each marker carries position, category color, and label.
    fn place_sensors(&self, sensors: &[Sensor]);
}

/// Sink used when no interactive map is attached: commands are logged so
/// the pipeline remains observable.
pub struct TracingSink;

impl VisualizationSink for TracingSink {
    fn fly_to(&self, lat: f64, lng: f64) {
        // ---
        tracing::info!("flyTo: {}, {}", lat, lng);
    }

    fn place_sensors(&self, sensors: &[Sensor]) {
        // ---
        tracing::info!("Placing {} sensor markers", sensors.len());
        for sensor in sensors {
            tracing::debug!(
                "  {} at {}, {} (marker {}, status {})",
                sensor.name,
                sensor.location.lat,
                sensor.location.lng,
                sensor.color,
                sensor.status.indicator_color()
            );
        }
    }
}
