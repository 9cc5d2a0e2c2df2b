//! OSRM HTTP adapter for multi-stop driving itineraries.

use serde::Deserialize;

use crate::geometry::{Coordinates, RoutePath};
use crate::traits::{Itinerary, Router};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Router for OsrmClient {
    fn route(
        &self,
        origin: Coordinates,
        via: &[Coordinates],
        destination: Coordinates,
    ) -> Option<Itinerary> {
        let mut stops = Vec::with_capacity(via.len() + 2);
        stops.push(origin);
        stops.extend_from_slice(via);
        stops.push(destination);

        let coords = stops
            .iter()
            .map(|stop| format!("{:.6},{:.6}", stop.lng, stop.lat))
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.config.base_url, self.config.profile, coords
        );
        tracing::debug!(stops = stops.len(), "requesting itinerary");

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>());

        let body = match response {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(error = %err, "routing request failed");
                return None;
            }
        };

        let candidate = body.routes.into_iter().next()?;
        let points = candidate
            .geometry
            .coordinates
            .into_iter()
            .map(|[lng, lat]| Coordinates::new(lng, lat))
            .collect();

        Some(Itinerary {
            path: RoutePath::new(points),
            distance_meters: candidate.distance,
            duration_seconds: candidate.duration,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
    distance: f64,
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}
