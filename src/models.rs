//! Data models for the smart city advisory pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

// ---

/// The fixed eight-way sensor classification.
///
/// Closed by construction: a record carrying any other category fails
/// deserialization at the boundary instead of entering the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorCategory {
    Transportation,
    Environmental,
    Energy,
    Water,
    WasteManagement,
    PublicSafety,
    Infrastructure,
    PublicHealth,
}

impl SensorCategory {
    // ---
    /// Every category, in taxonomy order.
    pub const ALL: [SensorCategory; 8] = [
        SensorCategory::Transportation,
        SensorCategory::Environmental,
        SensorCategory::Energy,
        SensorCategory::Water,
        SensorCategory::WasteManagement,
        SensorCategory::PublicSafety,
        SensorCategory::Infrastructure,
        SensorCategory::PublicHealth,
    ];

    /// Canonical wire identifier (`waste_management` style).
    pub fn id(&self) -> &'static str {
        // ---
        match self {
            SensorCategory::Transportation => "transportation",
            SensorCategory::Environmental => "environmental",
            SensorCategory::Energy => "energy",
            SensorCategory::Water => "water",
            SensorCategory::WasteManagement => "waste_management",
            SensorCategory::PublicSafety => "public_safety",
            SensorCategory::Infrastructure => "infrastructure",
            SensorCategory::PublicHealth => "public_health",
        }
    }

    /// Human-readable label for dashboards and prompt text.
    pub fn display_name(&self) -> &'static str {
        // ---
        match self {
            SensorCategory::Transportation => "Transportation",
            SensorCategory::Environmental => "Environmental",
            SensorCategory::Energy => "Energy",
            SensorCategory::Water => "Water",
            SensorCategory::WasteManagement => "Waste Management",
            SensorCategory::PublicSafety => "Public Safety",
            SensorCategory::Infrastructure => "Infrastructure",
            SensorCategory::PublicHealth => "Public Health",
        }
    }

    /// Display color for markers of this category.
    pub fn color(&self) -> &'static str {
        // ---
        match self {
            SensorCategory::Transportation => "#FFD700",
            SensorCategory::Environmental => "#00FF00",
            SensorCategory::Energy => "#FF4500",
            SensorCategory::Water => "#4169E1",
            SensorCategory::WasteManagement => "#8B4513",
            SensorCategory::PublicSafety => "#FF0000",
            SensorCategory::Infrastructure => "#9370DB",
            SensorCategory::PublicHealth => "#32CD32",
        }
    }

    /// One explanatory line per category, used by the prompt composer.
    pub fn description(&self) -> &'static str {
        // ---
        match self {
            SensorCategory::Transportation => "traffic lights, cameras, parking, buses, subways",
            SensorCategory::Environmental => "air quality, weather, noise monitoring",
            SensorCategory::Energy => "smart grid, solar panels, wind turbines",
            SensorCategory::Water => "quality monitoring, flood sensors",
            SensorCategory::WasteManagement => "smart bins, recycling centers",
            SensorCategory::PublicSafety => "emergency boxes, CCTV cameras",
            SensorCategory::Infrastructure => "smart buildings, streetlights",
            SensorCategory::PublicHealth => "UV monitoring, pollen counts",
        }
    }

    /// Lenient lookup from a wire identifier. Unknown strings are `None`,
    /// letting query filters yield empty sets instead of errors.
    pub fn parse(s: &str) -> Option<SensorCategory> {
        // ---
        SensorCategory::ALL.iter().copied().find(|c| c.id() == s)
    }
}

/// Operational state of a sensor. Anything outside the known set
/// deserializes to `Unknown` and renders with its own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Active,
    Inactive,
    Maintenance,
    #[serde(other)]
    Unknown,
}

impl SensorStatus {
    // ---
    pub fn parse(s: &str) -> SensorStatus {
        // ---
        match s {
            "active" => SensorStatus::Active,
            "inactive" => SensorStatus::Inactive,
            "maintenance" => SensorStatus::Maintenance,
            _ => SensorStatus::Unknown,
        }
    }

    /// Status indicator color for dashboards.
    pub fn indicator_color(&self) -> &'static str {
        // ---
        match self {
            SensorStatus::Active => "#00FF00",
            SensorStatus::Inactive => "#FF0000",
            SensorStatus::Maintenance => "#FFA500",
            SensorStatus::Unknown => "#808080",
        }
    }
}

/// Geographic position of a sensor. `height` is meters above (or below,
/// for subway platforms) the reference surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub height: f64,
}

impl Location {
    // ---
    pub fn in_range(&self) -> bool {
        // ---
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A city-infrastructure monitoring point. Immutable after creation; the
/// `data` map is type-specific telemetry whose shape follows `kind` but is
/// never enforced, so consumers must tolerate missing or extra fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    // ---
    pub id: String,
    pub name: String,
    /// Fine-grained kind (`traffic`, `air_quality`, ...); open-ended.
    #[serde(rename = "type")]
    pub kind: String,
    pub category: SensorCategory,
    pub location: Location,
    pub status: SensorStatus,
    /// Telemetry fields plus a `lastUpdate` timestamp.
    pub data: Map<String, Value>,
    /// Display hint derived from `category`.
    pub color: String,
}

/// Sensor record as submitted over the API. `id`, `status`, and `data`
/// are optional; missing pieces are filled in by [`RawSensor::into_sensor`].
#[derive(Debug, Deserialize)]
pub struct RawSensor {
    // ---
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: SensorCategory,
    pub location: Location,
    #[serde(default)]
    pub status: Option<SensorStatus>,
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl RawSensor {
    // ---
    /// Promote a submitted record to a full sensor: generate an id when the
    /// client omitted one, derive the category color, default the status to
    /// active, and stamp `lastUpdate` if the telemetry lacks it.
    pub fn into_sensor(self) -> Sensor {
        // ---
        let id = match self.id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => Uuid::new_v4().to_string(),
        };

        let mut data = self.data;
        data.entry("lastUpdate".to_string())
            .or_insert_with(|| Value::String(Utc::now().to_rfc3339()));

        Sensor {
            id,
            name: self.name,
            kind: self.kind,
            color: self.category.color().to_string(),
            category: self.category,
            location: self.location,
            status: self.status.unwrap_or(SensorStatus::Active),
            data,
        }
    }
}

// ---

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A named, static city area used to scope a proximity query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    pub name: String,
    pub coordinates: Coordinates,
    pub characteristics: String,
    pub known_for: String,
}

/// Transient per-request bundle handed to the prompt composer.
/// Never persisted; the recorded artifact is [`AdvisoryResult`].
#[derive(Debug)]
pub struct AdvisoryRequest<'a> {
    pub neighborhood: &'a Neighborhood,
    pub matched: &'a [Sensor],
    pub taxonomy: &'a [SensorCategory],
}

/// Outcome of one advisory request. The review text is either the
/// generated analysis or the failure message substituted for it. Owned by
/// the history store once recorded; never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryResult {
    // ---
    pub id: String,
    pub neighborhood: String,
    pub review: String,
    pub timestamp: DateTime<Utc>,
}

impl AdvisoryResult {
    // ---
    pub fn new(neighborhood: String, review: String) -> AdvisoryResult {
        // ---
        let now = Utc::now();
        AdvisoryResult {
            // Timestamp-derived id, unique enough for a per-process log
            id: now.timestamp_millis().to_string(),
            neighborhood,
            review,
            timestamp: now,
        }
    }
}
