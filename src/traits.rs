//! Capability seams for the route-composition core.
//!
//! These are intentionally minimal. Concrete adapters (HTTP geocoders,
//! routing services, map frontends) implement them; tests inject stubs.

use crate::geometry::{Bounds, Coordinates, RoutePath};

/// Resolves a free-form address query to a single best-match coordinate.
///
/// `None` covers both "no match" and a failed call; callers treat the two
/// identically and surface one resolution failure.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> Option<Coordinates>;
}

/// One computed driving itinerary over an ordered stop sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub path: RoutePath,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

/// Requests a multi-stop itinerary from a routing service.
///
/// The stop order is authoritative: origin first, the `via` stops in the
/// given order, destination last. Implementations must not reorder.
/// `None` covers both "no itinerary" and a failed call.
pub trait Router {
    fn route(
        &self,
        origin: Coordinates,
        via: &[Coordinates],
        destination: Coordinates,
    ) -> Option<Itinerary>;
}

/// Sink for map draw/undraw commands, keyed by stable string identifiers.
///
/// The core never holds rendering handles; an implementation keeps its own
/// identifier-to-handle table and replaces a drawing when the same
/// identifier is drawn again. Removing an identifier that is not currently
/// drawn is a no-op.
pub trait MapCanvas {
    fn draw_marker(&mut self, id: &str, at: Coordinates, color: &str, label: &str);

    fn remove_marker(&mut self, id: &str);

    fn draw_path(&mut self, layer: &str, path: &RoutePath, color: &str, width: f64);

    fn remove_path(&mut self, layer: &str);

    fn fit_bounds(&mut self, bounds: Bounds);

    fn center_on(&mut self, at: Coordinates, zoom: f64);
}
