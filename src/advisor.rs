//! Orchestration of the advisory request chain.
//!
//! One advisory request is a single await chain (match sensors, issue map
//! commands, compose the prompt, call the generation service, record the
//! outcome) that suspends only at the generation call. Concurrent requests
//! are independent; results land in completion order.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Error;
use crate::gateway::AdvisoryGateway;
use crate::history::ReviewHistory;
use crate::models::{AdvisoryRequest, AdvisoryResult, Sensor, SensorCategory};
use crate::neighborhoods::NeighborhoodCatalog;
use crate::prompt;
use crate::proximity;
use crate::registry::SensorRegistry;
use crate::viz::VisualizationSink;

// ---

#[derive(Clone)]
pub struct Advisor {
    registry: Arc<SensorRegistry>,
    catalog: Arc<NeighborhoodCatalog>,
    gateway: AdvisoryGateway,
    history: Arc<ReviewHistory>,
    sink: Arc<dyn VisualizationSink>,
    radius_km: f64,
    review_max_tokens: u32,
}

impl Advisor {
    // ---
    pub fn new(
        registry: Arc<SensorRegistry>,
        catalog: Arc<NeighborhoodCatalog>,
        gateway: AdvisoryGateway,
        history: Arc<ReviewHistory>,
        sink: Arc<dyn VisualizationSink>,
        radius_km: f64,
        review_max_tokens: u32,
    ) -> Advisor {
        // ---
        Advisor {
            registry,
            catalog,
            gateway,
            history,
            sink,
            radius_km,
            review_max_tokens,
        }
    }

    /// Run the full neighborhood review pipeline.
    ///
    /// `extra_sensors` augments the registry snapshot for this request
    /// only; nothing is written back to the registry. A generation failure
    /// is still recorded, with the failure message substituted for the
    /// review text, before it propagates to the caller.
    pub async fn review(&self, key: &str, extra_sensors: &[Sensor]) -> Result<AdvisoryResult, Error> {
        // ---
        let neighborhood = self.catalog.lookup(key)?.clone();
        info!("Reviewing neighborhood {}", neighborhood.name);

        // Step 1: select sensors within the configured radius
        let mut candidates = self.registry.list_all();
        candidates.extend_from_slice(extra_sensors);
        let matched = proximity::nearby(
            &candidates,
            neighborhood.coordinates.lat,
            neighborhood.coordinates.lng,
            self.radius_km,
        );
        debug!(
            "{} of {} sensors within {} km of {}",
            matched.len(),
            candidates.len(),
            self.radius_km,
            neighborhood.name
        );

        // Step 2: visualization commands for the matched set
        self.sink
            .fly_to(neighborhood.coordinates.lat, neighborhood.coordinates.lng);
        self.sink.place_sensors(&matched);

        // Step 3: compose and generate
        let request = AdvisoryRequest {
            neighborhood: &neighborhood,
            matched: &matched,
            taxonomy: &SensorCategory::ALL,
        };
        let prompt_text = prompt::compose(&request);
        let outcome = self
            .gateway
            .generate(prompt::PLANNING_SYSTEM_DIRECTIVE, &prompt_text, self.review_max_tokens)
            .await;

        // Step 4: record the outcome either way
        match outcome {
            Ok(text) => {
                let result = AdvisoryResult::new(neighborhood.name.clone(), text);
                self.history.record(result.clone());
                info!("Review complete for {} ({})", neighborhood.name, result.id);
                Ok(result)
            }
            Err(err) => {
                self.history
                    .record(AdvisoryResult::new(neighborhood.name.clone(), err.to_string()));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::config::Config;
    use crate::seed;
    use std::sync::Mutex;

    /// Records every command for later inspection.
    struct RecordingSink {
        flights: Mutex<Vec<(f64, f64)>>,
        placements: Mutex<Vec<usize>>,
    }

    impl RecordingSink {
        fn new() -> RecordingSink {
            // ---
            RecordingSink {
                flights: Mutex::new(Vec::new()),
                placements: Mutex::new(Vec::new()),
            }
        }
    }

    impl VisualizationSink for RecordingSink {
        fn fly_to(&self, lat: f64, lng: f64) {
            self.flights.lock().unwrap().push((lat, lng));
        }

        fn place_sensors(&self, sensors: &[Sensor]) {
            self.placements.lock().unwrap().push(sensors.len());
        }
    }

    fn test_advisor(sink: Arc<RecordingSink>) -> Advisor {
        // ---
        let cfg = Config {
            ai_api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            ai_api_key: "test-key".to_string(),
            ai_model: "gpt-3.5-turbo".to_string(),
            prompt_max_tokens: 100,
            review_max_tokens: 300,
            nearby_radius_km: 2.0,
            port: 0,
        };
        Advisor::new(
            Arc::new(SensorRegistry::seeded(seed::city_sensors())),
            Arc::new(NeighborhoodCatalog::nyc()),
            AdvisoryGateway::new(&cfg),
            Arc::new(ReviewHistory::new()),
            sink,
            cfg.nearby_radius_km,
            cfg.review_max_tokens,
        )
    }

    #[tokio::test]
    async fn test_unknown_neighborhood_short_circuits() {
        // ---
        let sink = Arc::new(RecordingSink::new());
        let advisor = test_advisor(sink.clone());

        let err = advisor.review("atlantis", &[]).await.unwrap_err();
        assert!(matches!(err, Error::NeighborhoodNotFound(_)));

        // Nothing downstream ran: no map commands, no history entry
        assert!(sink.flights.lock().unwrap().is_empty());
        assert_eq!(advisor.history.len(), 0);
    }

    #[tokio::test]
    async fn test_failed_generation_is_recorded_and_propagated() {
        // ---
        let sink = Arc::new(RecordingSink::new());
        let advisor = test_advisor(sink.clone());

        // Gateway points at an unreachable endpoint, so generation fails
        let err = advisor.review("times square", &[]).await.unwrap_err();
        assert!(matches!(err, Error::Generation(_)));

        // The failure was still recorded, message substituted for the text
        let recent = advisor.history.recent(1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].neighborhood, "Times Square");
        assert!(recent[0].review.contains("could not connect to AI service"));

        // Map commands were issued before the generation call
        let flights = sink.flights.lock().unwrap();
        assert_eq!(flights.len(), 1);
        assert!((flights[0].0 - 40.7580).abs() < 1e-9);

        // Times Square has seeded sensors within 2 km
        let placements = sink.placements.lock().unwrap();
        assert_eq!(placements.len(), 1);
        assert!(placements[0] > 0);
    }

    #[tokio::test]
    async fn test_extra_sensors_join_the_candidate_set() {
        // ---
        let sink = Arc::new(RecordingSink::new());
        let advisor = test_advisor(sink.clone());

        // Harlem has no seeded sensors within 2 km; supply one
        let extra = vec![Sensor {
            id: "client_001".to_string(),
            name: "Noise Level Monitor - 125th St".to_string(),
            kind: "noise".to_string(),
            category: SensorCategory::Environmental,
            location: crate::models::Location { lat: 40.8116, lng: -73.9465, height: 4.0 },
            status: crate::models::SensorStatus::Active,
            data: serde_json::Map::new(),
            color: SensorCategory::Environmental.color().to_string(),
        }];

        let _ = advisor.review("harlem", &extra).await;

        let placements = sink.placements.lock().unwrap();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0], 1);

        // The per-request sensor never entered the registry
        assert!(advisor.registry.by_type("noise").iter().all(|s| s.id != "client_001"));
    }
}
