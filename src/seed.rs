//! Startup sensor dataset.
//!
//! The simulated city network the registry is seeded with: twenty sensors
//! across all eight categories, clustered around lower and midtown
//! Manhattan. Telemetry values are static; `lastUpdate` is stamped at seed
//! time.

use chrono::Utc;
use serde_json::{json, Value};

use crate::models::{Location, Sensor, SensorCategory, SensorStatus};

// ---

fn sensor(
    id: &str,
    name: &str,
    kind: &str,
    category: SensorCategory,
    lat: f64,
    lng: f64,
    height: f64,
    data: Value,
) -> Sensor {
    // ---
    let mut data = match data {
        Value::Object(map) => map,
        _ => Default::default(),
    };
    data.insert(
        "lastUpdate".to_string(),
        Value::String(Utc::now().to_rfc3339()),
    );

    // The seed dataset is uniformly active
    Sensor {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        category,
        location: Location { lat, lng, height },
        status: SensorStatus::Active,
        data,
        color: category.color().to_string(),
    }
}

/// The full startup dataset, in a stable order.
pub fn city_sensors() -> Vec<Sensor> {
    // ---
    use SensorCategory::*;

    vec![
        // Traffic
        sensor(
            "traffic_001",
            "Traffic Light Controller - 5th & Main",
            "traffic",
            Transportation,
            40.7128,
            -74.006,
            5.0,
            json!({ "currentFlow": 45, "averageSpeed": 28, "congestionLevel": "moderate" }),
        ),
        sensor(
            "traffic_002",
            "Traffic Camera - Broadway & 42nd",
            "camera",
            Transportation,
            40.7589,
            -73.9851,
            8.0,
            json!({ "vehicleCount": 120, "pedestrianCount": 85, "incidentDetected": false }),
        ),
        sensor(
            "traffic_003",
            "Smart Parking Sensor - Central Park West",
            "parking",
            Transportation,
            40.7829,
            -73.9654,
            1.0,
            json!({ "availableSpots": 12, "totalSpots": 50, "occupancyRate": 76 }),
        ),
        // Environmental
        sensor(
            "env_001",
            "Air Quality Monitor - Times Square",
            "air_quality",
            Environmental,
            40.7580,
            -73.9855,
            15.0,
            json!({ "pm25": 12, "pm10": 25, "co2": 420, "airQualityIndex": "good" }),
        ),
        sensor(
            "env_002",
            "Weather Station - Battery Park",
            "weather",
            Environmental,
            40.7033,
            -74.0170,
            10.0,
            json!({ "temperature": 72, "humidity": 65, "windSpeed": 8, "precipitation": 0 }),
        ),
        sensor(
            "env_003",
            "Noise Level Monitor - Wall Street",
            "noise",
            Environmental,
            40.7064,
            -74.0090,
            6.0,
            json!({ "decibelLevel": 78, "noiseCategory": "moderate", "peakLevel": 85 }),
        ),
        // Energy
        sensor(
            "energy_001",
            "Smart Grid Substation - Midtown",
            "power",
            Energy,
            40.7505,
            -73.9934,
            20.0,
            json!({ "powerOutput": 15000, "voltage": 138000, "loadPercentage": 78, "efficiency": 94.2 }),
        ),
        sensor(
            "energy_002",
            "Solar Panel Array - Brooklyn Bridge",
            "solar",
            Energy,
            40.7061,
            -73.9969,
            25.0,
            json!({ "powerGenerated": 2500, "efficiency": 18.5, "panelCount": 5000 }),
        ),
        sensor(
            "energy_003",
            "Wind Turbine - Governors Island",
            "wind",
            Energy,
            40.6894,
            -74.0168,
            100.0,
            json!({ "powerGenerated": 8000, "windSpeed": 15, "rotorSpeed": 12 }),
        ),
        // Water
        sensor(
            "water_001",
            "Water Quality Monitor - Hudson River",
            "water_quality",
            Water,
            40.7142,
            -74.0064,
            2.0,
            json!({ "ph": 7.2, "turbidity": 5, "dissolvedOxygen": 8.5, "temperature": 68 }),
        ),
        sensor(
            "water_002",
            "Flood Sensor - Lower Manhattan",
            "flood",
            Water,
            40.7033,
            -74.0170,
            1.0,
            json!({ "waterLevel": 2.5, "floodRisk": "low", "tideLevel": 3.2 }),
        ),
        // Waste management
        sensor(
            "waste_001",
            "Smart Trash Bin - Central Park",
            "waste",
            WasteManagement,
            40.7829,
            -73.9654,
            1.0,
            json!({ "fillLevel": 65, "temperature": 75, "lastEmptied": "2024-01-15T10:30:00Z" }),
        ),
        sensor(
            "waste_002",
            "Recycling Center Monitor - Queens",
            "recycling",
            WasteManagement,
            40.7282,
            -73.7949,
            5.0,
            json!({ "dailyVolume": 15000, "recyclingRate": 78, "energyRecovered": 2500 }),
        ),
        // Public safety
        sensor(
            "safety_001",
            "Emergency Call Box - Times Square",
            "emergency",
            PublicSafety,
            40.7580,
            -73.9855,
            2.0,
            json!({ "lastTested": "2024-01-10T14:00:00Z", "batteryLevel": 95, "signalStrength": "excellent" }),
        ),
        sensor(
            "safety_002",
            "CCTV Camera - Grand Central",
            "cctv",
            PublicSafety,
            40.7527,
            -73.9772,
            12.0,
            json!({ "recording": true, "storageUsed": 45, "motionDetected": false }),
        ),
        // Public transportation
        sensor(
            "transit_001",
            "Subway Platform Monitor - Penn Station",
            "subway",
            Transportation,
            40.7505,
            -73.9934,
            -20.0,
            json!({ "passengerCount": 1250, "trainFrequency": 3, "platformCrowding": "moderate" }),
        ),
        sensor(
            "transit_002",
            "Bus GPS Tracker - MTA Route 1",
            "bus",
            Transportation,
            40.7128,
            -74.006,
            2.0,
            json!({ "speed": 25, "passengerCount": 45, "nextStop": "City Hall", "estimatedArrival": "5 min" }),
        ),
        // Smart buildings
        sensor(
            "building_001",
            "Smart Building - Empire State",
            "building",
            Infrastructure,
            40.7484,
            -73.9857,
            100.0,
            json!({ "energyUsage": 8500, "occupancy": 85, "temperature": 72, "elevatorStatus": "operational" }),
        ),
        sensor(
            "building_002",
            "Smart Streetlight - 5th Avenue",
            "lighting",
            Infrastructure,
            40.7589,
            -73.9851,
            8.0,
            json!({ "brightness": 80, "motionDetected": true, "energyConsumption": 0.5 }),
        ),
        // Health & wellness
        sensor(
            "health_001",
            "Public Health Monitor - Central Park",
            "health",
            PublicHealth,
            40.7829,
            -73.9654,
            3.0,
            json!({ "uvIndex": 6, "pollenCount": "low", "airQuality": "good" }),
        ),
    ]
}
