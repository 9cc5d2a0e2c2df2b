//! Summary counters derived from the current session state.

use crate::route::Route;

/// Pure derivation over the current route and store size; recomputed on
/// demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteStats {
    /// 1 while a current route exists, else 0.
    pub route_count: usize,
    pub total_distance_km: f64,
    pub total_duration_minutes: f64,
    /// Live store size, regardless of route validity.
    pub waypoint_count: usize,
}

impl RouteStats {
    pub fn summarize(route: Option<&Route>, waypoint_count: usize) -> Self {
        match route {
            Some(route) => Self {
                route_count: 1,
                total_distance_km: route.distance_km,
                total_duration_minutes: route.duration_minutes,
                waypoint_count,
            },
            None => Self {
                waypoint_count,
                ..Self::default()
            },
        }
    }
}
