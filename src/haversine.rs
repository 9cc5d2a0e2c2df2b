//! Haversine fallback router (when no OSRM instance is reachable).
//!
//! Produces straight-line geometry through the stops and estimates travel
//! time from great-circle distance. Less accurate than OSRM (ignores
//! roads) but always available.

use crate::geometry::{Coordinates, RoutePath};
use crate::traits::{Itinerary, Router};

/// Average driving speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Straight-line router estimating itineraries from great-circle distance.
#[derive(Debug, Clone)]
pub struct HaversineRouter {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineRouter {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineRouter {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Great-circle distance between two points in kilometers.
    fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
        let lat1_rad = from.lat.to_radians();
        let lat2_rad = to.lat.to_radians();
        let delta_lat = (to.lat - from.lat).to_radians();
        let delta_lng = (to.lng - from.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }
}

impl Router for HaversineRouter {
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

        let mut distance_km = 0.0;
        for pair in stops.windows(2) {
            distance_km += Self::haversine_km(pair[0], pair[1]);
        }

        let duration_seconds = distance_km / self.speed_kmh * 3600.0;

        Some(Itinerary {
            path: RoutePath::new(stops),
            distance_meters: distance_km * 1000.0,
            duration_seconds,
        })
    }
}
