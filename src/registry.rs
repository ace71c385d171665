//! In-memory sensor catalog.
//!
//! One `SensorRegistry` is constructed at startup, seeded from the static
//! dataset, and shared by handle with every component that reads sensors.
//! Mutation is append-only and in-memory; nothing survives a restart.

use std::sync::RwLock;

use crate::error::Error;
use crate::models::{Sensor, SensorCategory, SensorStatus};

// ---

/// Process-wide sensor store.
///
/// Reads return insertion-ordered snapshots of the current sequence; writes
/// only ever append, so readers never observe partial mutation and no
/// cross-request ordering is needed beyond the lock itself.
pub struct SensorRegistry {
    sensors: RwLock<Vec<Sensor>>,
}

impl SensorRegistry {
    // ---
    pub fn new() -> SensorRegistry {
        // ---
        SensorRegistry::seeded(Vec::new())
    }

    pub fn seeded(sensors: Vec<Sensor>) -> SensorRegistry {
        // ---
        SensorRegistry {
            sensors: RwLock::new(sensors),
        }
    }

    /// Full snapshot, in insertion order.
    pub fn list_all(&self) -> Vec<Sensor> {
        // ---
        self.sensors.read().expect("sensor registry lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        // ---
        self.sensors.read().expect("sensor registry lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        // ---
        self.len() == 0
    }

    /// Sensors whose category matches exactly.
    pub fn by_category(&self, category: SensorCategory) -> Vec<Sensor> {
        // ---
        self.filtered(|s| s.category == category)
    }

    /// Sensors whose fine-grained kind matches exactly.
    pub fn by_type(&self, kind: &str) -> Vec<Sensor> {
        // ---
        self.filtered(|s| s.kind == kind)
    }

    /// Sensors whose status matches exactly.
    pub fn by_status(&self, status: SensorStatus) -> Vec<Sensor> {
        // ---
        self.filtered(|s| s.status == status)
    }

    /// Case-insensitive substring search over name and kind.
    pub fn search(&self, term: &str) -> Vec<Sensor> {
        // ---
        SensorRegistry::filter_term(self.list_all(), term)
    }

    /// Apply the search predicate to an already-filtered set. An empty term
    /// returns the input unchanged.
    pub fn filter_term(sensors: Vec<Sensor>, term: &str) -> Vec<Sensor> {
        // ---
        if term.is_empty() {
            return sensors;
        }
        let needle = term.to_lowercase();
        sensors
            .into_iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&needle) || s.kind.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Append a new sensor.
    ///
    /// Rejects a duplicate id or an out-of-range location. Category validity
    /// is guaranteed by the type. There is no removal; submitted sensors
    /// stay for the life of the process.
    pub fn add(&self, sensor: Sensor) -> Result<(), Error> {
        // ---
        if !sensor.location.in_range() {
            return Err(Error::Validation(format!(
                "sensor '{}' location out of range: lat {}, lng {}",
                sensor.id, sensor.location.lat, sensor.location.lng
            )));
        }

        let mut sensors = self.sensors.write().expect("sensor registry lock poisoned");
        if sensors.iter().any(|s| s.id == sensor.id) {
            return Err(Error::Validation(format!(
                "sensor id '{}' already exists",
                sensor.id
            )));
        }

        tracing::debug!("Registered sensor {} ({})", sensor.id, sensor.name);
        sensors.push(sensor);
        Ok(())
    }

    fn filtered(&self, predicate: impl Fn(&Sensor) -> bool) -> Vec<Sensor> {
        // ---
        self.sensors
            .read()
            .expect("sensor registry lock poisoned")
            .iter()
            .filter(|s| predicate(s))
            .cloned()
            .collect()
    }
}

impl Default for SensorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::models::Location;
    use serde_json::Map;

    fn test_sensor(id: &str, category: SensorCategory, lat: f64, lng: f64) -> Sensor {
        // ---
        Sensor {
            id: id.to_string(),
            name: format!("{} Sensor - Test", category.display_name()),
            kind: "test".to_string(),
            category,
            location: Location { lat, lng, height: 2.0 },
            status: SensorStatus::Active,
            data: Map::new(),
            color: category.color().to_string(),
        }
    }

    fn full_taxonomy_registry() -> SensorRegistry {
        // ---
        let sensors = SensorCategory::ALL
            .iter()
            .enumerate()
            .map(|(i, &c)| test_sensor(&format!("s{i}"), c, 40.7, -74.0))
            .collect();
        SensorRegistry::seeded(sensors)
    }

    #[test]
    fn test_by_category_is_exact() {
        // ---
        let registry = full_taxonomy_registry();

        let transport = registry.by_category(SensorCategory::Transportation);
        assert_eq!(transport.len(), 1);
        assert!(transport
            .iter()
            .all(|s| s.category == SensorCategory::Transportation));

        // Every category is represented exactly once
        for category in SensorCategory::ALL {
            assert_eq!(registry.by_category(category).len(), 1);
        }
    }

    #[test]
    fn test_list_all_keeps_insertion_order() {
        // ---
        let registry = full_taxonomy_registry();
        let ids: Vec<String> = registry.list_all().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7"]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        // ---
        let registry = SensorRegistry::new();
        registry
            .add(test_sensor("dup", SensorCategory::Energy, 40.7, -74.0))
            .unwrap();

        let err = registry
            .add(test_sensor("dup", SensorCategory::Water, 40.8, -74.1))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_rejects_out_of_range_location() {
        // ---
        let registry = SensorRegistry::new();

        let err = registry
            .add(test_sensor("bad_lat", SensorCategory::Energy, 91.0, -74.0))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = registry
            .add(test_sensor("bad_lng", SensorCategory::Energy, 40.7, -181.0))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_is_visible_to_subsequent_reads() {
        // ---
        let registry = SensorRegistry::new();
        registry
            .add(test_sensor("new", SensorCategory::PublicHealth, 40.78, -73.96))
            .unwrap();

        assert_eq!(registry.by_category(SensorCategory::PublicHealth).len(), 1);
        assert_eq!(registry.by_type("test").len(), 1);
        assert_eq!(registry.by_status(SensorStatus::Active).len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        // ---
        let registry = full_taxonomy_registry();

        let hits = registry.search("WASTE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, SensorCategory::WasteManagement);

        // Matches kind as well as name
        assert_eq!(registry.search("TeSt").len(), 8);
        assert!(registry.search("no such sensor").is_empty());
    }

    #[test]
    fn test_empty_term_returns_input_unchanged() {
        // ---
        let registry = full_taxonomy_registry();
        assert_eq!(registry.search("").len(), registry.len());

        let subset = registry.by_category(SensorCategory::Energy);
        let filtered = SensorRegistry::filter_term(subset.clone(), "");
        assert_eq!(filtered.len(), subset.len());
    }
}
