//! Static catalog of named city areas.
//!
//! Loaded once at startup; read-only afterwards. Keys are canonical
//! lowercase names, looked up case-insensitively.

use crate::error::Error;
use crate::models::{Coordinates, Neighborhood};

// ---

pub struct NeighborhoodCatalog {
    entries: Vec<(String, Neighborhood)>,
}

impl NeighborhoodCatalog {
    // ---
    /// Look up a neighborhood by key, ignoring case and surrounding
    /// whitespace.
    pub fn lookup(&self, key: &str) -> Result<&Neighborhood, Error> {
        // ---
        let needle = key.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == needle)
            .map(|(_, n)| n)
            .ok_or_else(|| Error::NeighborhoodNotFound(key.trim().to_string()))
    }

    /// All registered keys, in catalog order. Used to populate selection UI.
    pub fn keys(&self) -> Vec<&str> {
        // ---
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Neighborhood)> {
        // ---
        self.entries.iter().map(|(k, n)| (k.as_str(), n))
    }

    pub fn len(&self) -> usize {
        // ---
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        // ---
        self.entries.is_empty()
    }

    /// The Manhattan-and-nearby area set the service ships with.
    pub fn nyc() -> NeighborhoodCatalog {
        // ---
        fn entry(
            key: &str,
            name: &str,
            lat: f64,
            lng: f64,
            characteristics: &str,
            known_for: &str,
        ) -> (String, Neighborhood) {
            // ---
            (
                key.to_string(),
                Neighborhood {
                    name: name.to_string(),
                    coordinates: Coordinates { lat, lng },
                    characteristics: characteristics.to_string(),
                    known_for: known_for.to_string(),
                },
            )
        }

        NeighborhoodCatalog {
            entries: vec![
                entry(
                    "times square",
                    "Times Square",
                    40.7580,
                    -73.9855,
                    "Tourist destination with high pedestrian traffic and entertainment venues",
                    "Tourism, entertainment, high pedestrian traffic",
                ),
                entry(
                    "hells kitchen",
                    "Hell's Kitchen",
                    40.7639,
                    -73.9924,
                    "Residential area with restaurants, theaters, and mixed-use development",
                    "Restaurants, Broadway theaters, residential diversity",
                ),
                entry(
                    "chelsea",
                    "Chelsea",
                    40.7465,
                    -73.9934,
                    "Art galleries, gay culture, and the High Line elevated park",
                    "Art galleries, High Line, gay culture, residential",
                ),
                entry(
                    "soho",
                    "SoHo",
                    40.7235,
                    -73.9990,
                    "Historic district with art galleries, boutiques, and cast-iron architecture",
                    "Art galleries, shopping, historic architecture",
                ),
                entry(
                    "greenwich village",
                    "Greenwich Village",
                    40.7338,
                    -73.9967,
                    "Bohemian neighborhood with historic charm and cultural institutions",
                    "Bohemian culture, NYU, Washington Square Park",
                ),
                entry(
                    "east village",
                    "East Village",
                    40.7265,
                    -73.9818,
                    "Alternative culture, music venues, and diverse dining scene",
                    "Punk rock history, Ukrainian food, alternative culture",
                ),
                entry(
                    "lower east side",
                    "Lower East Side",
                    40.7158,
                    -73.9870,
                    "Historic immigrant neighborhood with trendy bars and restaurants",
                    "Immigrant history, nightlife, trendy restaurants",
                ),
                entry(
                    "financial district",
                    "Financial District",
                    40.7075,
                    -74.0107,
                    "Financial center with Wall Street and historic landmarks",
                    "Wall Street, financial institutions, historic sites",
                ),
                entry(
                    "battery park city",
                    "Battery Park City",
                    40.7128,
                    -74.0160,
                    "Planned residential community with waterfront views",
                    "Waterfront living, planned community, residential",
                ),
                entry(
                    "tribeca",
                    "TriBeCa",
                    40.7163,
                    -74.0086,
                    "Trendy neighborhood with converted warehouses and upscale dining",
                    "Converted lofts, upscale dining, film festival",
                ),
                entry(
                    "chinatown",
                    "Chinatown",
                    40.7158,
                    -73.9970,
                    "Dense Asian community with authentic restaurants and markets",
                    "Chinese culture, authentic food, markets",
                ),
                entry(
                    "little italy",
                    "Little Italy",
                    40.7191,
                    -73.9973,
                    "Historic Italian neighborhood with traditional restaurants",
                    "Italian culture, traditional restaurants, festivals",
                ),
                entry(
                    "upper west side",
                    "Upper West Side",
                    40.7870,
                    -73.9754,
                    "Residential area with cultural institutions and Central Park access",
                    "Lincoln Center, American Museum of Natural History, residential",
                ),
                entry(
                    "upper east side",
                    "Upper East Side",
                    40.7736,
                    -73.9595,
                    "Affluent residential area with museums and luxury shopping",
                    "Museum Mile, luxury shopping, residential",
                ),
                entry(
                    "harlem",
                    "Harlem",
                    40.8116,
                    -73.9465,
                    "Historic African American neighborhood with rich cultural heritage",
                    "African American culture, jazz history, cultural institutions",
                ),
                entry(
                    "brooklyn heights",
                    "Brooklyn Heights",
                    40.6997,
                    -73.9939,
                    "Historic residential neighborhood with Manhattan skyline views",
                    "Historic brownstones, Brooklyn Bridge views, residential",
                ),
            ],
        }
    }
}
