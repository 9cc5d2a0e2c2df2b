//! Geographic primitives for route geometries.
//!
//! Route geometries are kept as decoded coordinate sequences. Encoding
//! to/from compact wire formats happens at the adapter boundary, not here.

use serde::{Deserialize, Serialize};

/// A longitude/latitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinates {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// Bounding box of a geometry, southwest and northeast corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub sw: Coordinates,
    pub ne: Coordinates,
}

/// A route geometry as a decoded coordinate sequence.
///
/// Stores points directly for internal processing; adapters translate
/// to/from the routing service's encoding when talking to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    points: Vec<Coordinates>,
}

impl RoutePath {
    pub fn new(points: Vec<Coordinates>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Coordinates] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coordinates> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box over all points, or `None` for an empty path.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.points.first()?;
        let mut sw = first;
        let mut ne = first;
        for point in &self.points[1..] {
            sw.lng = sw.lng.min(point.lng);
            sw.lat = sw.lat.min(point.lat);
            ne.lng = ne.lng.max(point.lng);
            ne.lat = ne.lat.max(point.lat);
        }
        Some(Bounds { sw, ne })
    }
}
