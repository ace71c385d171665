//! Prompt composition for the advisory pipeline.
//!
//! Builds the structured analysis request sent to the generation service.
//! Composition is deterministic: identical inputs produce byte-identical
//! text, and no timestamps appear in the prompt body (those belong to the
//! recorded result).

use std::fmt::Write;

use crate::models::AdvisoryRequest;

// ---

/// System directive for free-form operator prompts.
pub const SIMULATION_SYSTEM_DIRECTIVE: &str = "You are a smart city simulation assistant. \
Given operator instructions, suggest updates to the city simulation state (traffic, weather, events).";

/// System directive for structured neighborhood analyses.
pub const PLANNING_SYSTEM_DIRECTIVE: &str = "You are a smart city planning expert. \
Analyze the given neighborhood and existing sensor data to provide specific recommendations \
for sensor placement and city improvements. Focus on practical, actionable advice that \
considers the neighborhood's characteristics, existing infrastructure, and potential for \
smart city enhancements.";

/// Build the analysis request text for one neighborhood.
///
/// Fixed section order: neighborhood metadata, the matched sensor list (in
/// input order; an explicit no-sensors line when empty), the category
/// taxonomy with one explanatory line each, the five instruction
/// directives, and the formatting directive.
pub fn compose(request: &AdvisoryRequest) -> String {
    // ---
    let AdvisoryRequest {
        neighborhood,
        matched,
        taxonomy,
    } = request;

    let mut out = String::new();

    out.push_str(
        "You are a smart city planning AI expert. Analyze this neighborhood and provide \
         specific sensor placement recommendations.\n\n",
    );

    let _ = writeln!(out, "NEIGHBORHOOD: {}", neighborhood.name);
    let _ = writeln!(out, "CHARACTERISTICS: {}", neighborhood.characteristics);
    let _ = writeln!(out, "KNOWN FOR: {}", neighborhood.known_for);
    let _ = writeln!(
        out,
        "COORDINATES: {}, {}",
        neighborhood.coordinates.lat, neighborhood.coordinates.lng
    );
    out.push('\n');

    let _ = writeln!(out, "EXISTING SENSORS IN AREA ({} found):", matched.len());
    if matched.is_empty() {
        // The absence of coverage is itself an input to the analysis
        out.push_str("- none: no sensors currently deployed in this area\n");
    } else {
        for sensor in matched.iter() {
            let _ = writeln!(
                out,
                "- {} ({}, {})",
                sensor.name,
                sensor.kind,
                sensor.category.id()
            );
        }
    }
    out.push('\n');

    out.push_str("SENSOR CATEGORIES AVAILABLE:\n");
    for category in taxonomy.iter() {
        let _ = writeln!(out, "- {}: {}", category.display_name(), category.description());
    }
    out.push('\n');

    out.push_str(
        "Please provide:\n\
         1. Analysis of current sensor coverage gaps\n\
         2. Specific sensor placement recommendations with reasoning\n\
         3. Priority order for implementation\n\
         4. Expected benefits and impact\n\
         5. Cost considerations and ROI estimates\n\n\
         Format your response in markdown with clear sections. Be specific about sensor \
         types, quantities, and placement reasoning.",
    );

    out
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::models::{
        Coordinates, Location, Neighborhood, Sensor, SensorCategory, SensorStatus,
    };
    use serde_json::Map;

    fn soho() -> Neighborhood {
        // ---
        Neighborhood {
            name: "SoHo".to_string(),
            coordinates: Coordinates { lat: 40.7235, lng: -73.999 },
            characteristics:
                "Historic district with art galleries, boutiques, and cast-iron architecture"
                    .to_string(),
            known_for: "Art galleries, shopping, historic architecture".to_string(),
        }
    }

    fn sensor(id: &str, name: &str, kind: &str, category: SensorCategory) -> Sensor {
        // ---
        Sensor {
            id: id.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
            category,
            location: Location { lat: 40.7235, lng: -73.999, height: 5.0 },
            status: SensorStatus::Active,
            data: Map::new(),
            color: category.color().to_string(),
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        // ---
        let neighborhood = soho();
        let matched = vec![sensor(
            "env_009",
            "Air Quality Monitor - Spring St",
            "air_quality",
            SensorCategory::Environmental,
        )];
        let request = AdvisoryRequest {
            neighborhood: &neighborhood,
            matched: &matched,
            taxonomy: &SensorCategory::ALL,
        };

        assert_eq!(compose(&request), compose(&request));
    }

    #[test]
    fn test_sections_in_fixed_order() {
        // ---
        let neighborhood = soho();
        let request = AdvisoryRequest {
            neighborhood: &neighborhood,
            matched: &[],
            taxonomy: &SensorCategory::ALL,
        };
        let text = compose(&request);

        let positions: Vec<usize> = [
            "NEIGHBORHOOD: SoHo",
            "CHARACTERISTICS: ",
            "KNOWN FOR: ",
            "COORDINATES: 40.7235, -73.999",
            "EXISTING SENSORS IN AREA",
            "SENSOR CATEGORIES AVAILABLE:",
            "Please provide:",
            "Format your response in markdown",
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {needle:?}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_zero_sensors_is_explicit() {
        // ---
        let neighborhood = soho();
        let request = AdvisoryRequest {
            neighborhood: &neighborhood,
            matched: &[],
            taxonomy: &SensorCategory::ALL,
        };
        let text = compose(&request);

        assert!(text.contains("EXISTING SENSORS IN AREA (0 found):"));
        assert!(text.contains("no sensors currently deployed"));
    }

    #[test]
    fn test_sensor_lines_preserve_input_order() {
        // ---
        let neighborhood = soho();
        let matched = vec![
            sensor("b", "Noise Level Monitor - Broome St", "noise", SensorCategory::Environmental),
            sensor("a", "CCTV Camera - Prince St", "cctv", SensorCategory::PublicSafety),
        ];
        let request = AdvisoryRequest {
            neighborhood: &neighborhood,
            matched: &matched,
            taxonomy: &SensorCategory::ALL,
        };
        let text = compose(&request);

        assert!(text.contains("EXISTING SENSORS IN AREA (2 found):"));
        let noise = text.find("Noise Level Monitor - Broome St (noise, environmental)").unwrap();
        let cctv = text.find("CCTV Camera - Prince St (cctv, public_safety)").unwrap();
        assert!(noise < cctv);
    }

    #[test]
    fn test_taxonomy_lines_complete() {
        // ---
        let neighborhood = soho();
        let request = AdvisoryRequest {
            neighborhood: &neighborhood,
            matched: &[],
            taxonomy: &SensorCategory::ALL,
        };
        let text = compose(&request);

        for category in SensorCategory::ALL {
            let line = format!("- {}: {}", category.display_name(), category.description());
            assert!(text.contains(&line), "missing taxonomy line for {}", category.id());
        }
    }
}
