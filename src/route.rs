//! Route composition over an ordered stop sequence.

use crate::geometry::RoutePath;
use crate::traits::Router;
use crate::waypoint::{Waypoint, WaypointKey};

/// One computed multi-stop itinerary: geometry, totals, and the stops it
/// was built from. A session holds at most one current route.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: RoutePath,
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub stops: Vec<WaypointKey>,
}

/// Requests an itinerary for the stops in store order.
///
/// The first stop is the origin, the last the destination, interior stops
/// are via points in the given order; no reordering or optimization is
/// performed. Returns `None` when the router produces no itinerary or
/// when fewer than two stops are given (callers reject that earlier with
/// their own notice).
pub fn compose<R: Router>(router: &R, waypoints: &[Waypoint]) -> Option<Route> {
    let (origin, rest) = waypoints.split_first()?;
    let (destination, via) = rest.split_last()?;

    let via_coords: Vec<_> = via.iter().map(|w| w.coordinates).collect();
    let itinerary = router.route(origin.coordinates, &via_coords, destination.coordinates)?;

    Some(Route {
        path: itinerary.path,
        distance_km: itinerary.distance_meters / 1000.0,
        duration_minutes: itinerary.duration_seconds / 60.0,
        stops: waypoints.iter().map(|w| w.key).collect(),
    })
}
