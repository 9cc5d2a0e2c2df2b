//! Waypoints and the ordered store the operator assembles a route from.

use serde::{Deserialize, Serialize};

use crate::geometry::Coordinates;
use crate::records::{Address, Lodging, WorkSite};

/// Record kinds eligible as route stops.
///
/// `WorkOrder` is reserved for order-annotated stops; the add flow only
/// constructs lodging and work-site waypoints, but the kind keeps its
/// marker color for the auxiliary marker drawn after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaypointKind {
    Lodging,
    WorkSite,
    WorkOrder,
}

impl WaypointKind {
    /// Marker color on the map, fixed per kind.
    pub fn marker_color(self) -> &'static str {
        match self {
            WaypointKind::Lodging => "#3b82f6",
            WaypointKind::WorkSite => "#ef4444",
            WaypointKind::WorkOrder => "#6a0dad",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            WaypointKind::Lodging => "lodging",
            WaypointKind::WorkSite => "work-site",
            WaypointKind::WorkOrder => "work-order",
        }
    }
}

/// Identity of a stop within the store: source-record id plus kind.
///
/// Ids are only unique within their kind, so the pair is the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WaypointKey {
    pub kind: WaypointKind,
    pub id: i64,
}

impl WaypointKey {
    pub fn new(kind: WaypointKind, id: i64) -> Self {
        Self { kind, id }
    }

    /// Stable identifier for this stop's map marker.
    pub fn marker_id(&self) -> String {
        format!("{}-{}", self.kind.slug(), self.id)
    }
}

/// The source record a waypoint was built from.
#[derive(Debug, Clone)]
pub enum SourceRecord {
    Lodging(Lodging),
    WorkSite(WorkSite),
}

impl SourceRecord {
    pub fn key(&self) -> WaypointKey {
        match self {
            SourceRecord::Lodging(lodging) => WaypointKey::new(WaypointKind::Lodging, lodging.id),
            SourceRecord::WorkSite(site) => WaypointKey::new(WaypointKind::WorkSite, site.id),
        }
    }

    pub fn address(&self) -> Address {
        match self {
            SourceRecord::Lodging(lodging) => lodging.address(),
            SourceRecord::WorkSite(site) => site.address(),
        }
    }

    /// Human-readable label: address-based for lodgings, supervisor and
    /// code for work sites.
    pub fn label(&self) -> String {
        match self {
            SourceRecord::Lodging(lodging) => format!(
                "Lodging: {}, {} ({})",
                lodging.street, lodging.number, lodging.city
            ),
            SourceRecord::WorkSite(site) => {
                format!("Work site: {} ({})", site.supervisor, site.code)
            }
        }
    }
}

/// A resolved, orderable stop in a route under construction.
#[derive(Debug, Clone)]
pub struct Waypoint {
    pub key: WaypointKey,
    pub label: String,
    pub coordinates: Coordinates,
    pub source: SourceRecord,
}

impl Waypoint {
    pub fn new(source: SourceRecord, coordinates: Coordinates) -> Self {
        Self {
            key: source.key(),
            label: source.label(),
            coordinates,
            source,
        }
    }
}

/// Direction for a neighbor-swap reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Ordered collection of stops; order is visit order.
///
/// First entry is the origin, last the destination, interior entries are
/// via stops. Keys are unique: inserting an existing key replaces the old
/// entry and appends the replacement at the end.
#[derive(Debug, Clone, Default)]
pub struct WaypointStore {
    points: Vec<Waypoint>,
}

impl WaypointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a waypoint at the end of the visit order.
    ///
    /// Returns the displaced entry when one with the same key already
    /// existed; every successful insert places its waypoint last either way.
    pub fn insert(&mut self, waypoint: Waypoint) -> Option<Waypoint> {
        let displaced = self.remove(&waypoint.key);
        self.points.push(waypoint);
        displaced
    }

    /// Removes the entry with the given key, if present.
    pub fn remove(&mut self, key: &WaypointKey) -> Option<Waypoint> {
        let index = self.points.iter().position(|p| p.key == *key)?;
        Some(self.points.remove(index))
    }

    /// Swaps the entry with its immediate neighbor in the given direction.
    ///
    /// No-op at either boundary or for an unknown key; returns whether a
    /// swap happened.
    pub fn shift(&mut self, key: &WaypointKey, direction: Direction) -> bool {
        let Some(index) = self.points.iter().position(|p| p.key == *key) else {
            return false;
        };
        let neighbor = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < self.points.len() => index + 1,
            _ => return false,
        };
        self.points.swap(index, neighbor);
        true
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, key: &WaypointKey) -> bool {
        self.points.iter().any(|p| p.key == *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.points
    }

    pub fn clear(&mut self) -> Vec<Waypoint> {
        std::mem::take(&mut self.points)
    }
}
