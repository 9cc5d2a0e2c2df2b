//! Nominatim HTTP adapter for address geocoding.

use serde::Deserialize;

use crate::geometry::Coordinates;
use crate::traits::Geocoder;

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, query: &str) -> Option<Coordinates> {
        let url = format!("{}/search", self.config.base_url);
        tracing::debug!(%query, "geocoding address");

        let response = self
            .client
            .get(url)
            .query(&[("q", query), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<NominatimPlace>>());

        let places = match response {
            Ok(places) => places,
            Err(err) => {
                tracing::warn!(%query, error = %err, "geocoding request failed");
                return None;
            }
        };

        let place = places.into_iter().next()?;
        match (place.lon.parse::<f64>(), place.lat.parse::<f64>()) {
            (Ok(lng), Ok(lat)) => Some(Coordinates::new(lng, lat)),
            _ => {
                tracing::warn!(%query, "geocoding response had unparseable coordinates");
                None
            }
        }
    }
}

// Nominatim returns lat/lon as JSON strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}
