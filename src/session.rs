//! Route-planning session: waypoint lifecycle, generation, assignment
//! context, and the map commands that keep the display in step.
//!
//! One session per route screen. Operations run to completion one at a
//! time (resolve, then mutate), so the store and the map never observe a
//! half-applied operation.

use std::fmt;

use crate::records::{Vehicle, WorkOrder};
use crate::route::{Route, compose};
use crate::stats::RouteStats;
use crate::traits::{Geocoder, MapCanvas, Router};
use crate::waypoint::{Direction, SourceRecord, Waypoint, WaypointKey, WaypointKind, WaypointStore};

/// Reserved layer identifier for the generated route line. Distinct from
/// every per-waypoint marker identifier, so regeneration replaces the
/// line instead of stacking overlays.
pub const ROUTE_LAYER: &str = "main-route";

const ROUTE_COLOR: &str = "#007aff";
const ROUTE_WIDTH: f64 = 6.0;
const POINT_ZOOM: f64 = 14.0;

/// Failures surfaced to the operator; each names the action that failed
/// and none is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Geocoding found nothing for the selected record (or the call
    /// failed); the stop was not added.
    AddressNotFound { label: String },
    /// The routing service produced no itinerary for the current stops.
    NoRoute,
    /// Generation was requested with fewer than two stops; no call was
    /// made.
    TooFewStops { have: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::AddressNotFound { label } => {
                write!(f, "could not resolve an address for {label}")
            }
            SessionError::NoRoute => {
                write!(f, "no driving itinerary could be produced for the selected stops")
            }
            SessionError::TooFewStops { have } => {
                write!(f, "route generation needs at least two stops ({have} in the list)")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// In-memory route-planning state over injected capabilities.
///
/// Discarded when the operator leaves the screen; nothing here persists.
#[derive(Debug)]
pub struct RoutingSession<G, R, M> {
    geocoder: G,
    router: R,
    canvas: M,
    store: WaypointStore,
    current: Option<Route>,
    work_order: Option<WorkOrder>,
    vehicle: Option<Vehicle>,
}

impl<G, R, M> RoutingSession<G, R, M>
where
    G: Geocoder,
    R: Router,
    M: MapCanvas,
{
    pub fn new(geocoder: G, router: R, canvas: M) -> Self {
        Self {
            geocoder,
            router,
            canvas,
            store: WaypointStore::new(),
            current: None,
            work_order: None,
            vehicle: None,
        }
    }

    /// Resolves the record's address and appends it as the last stop.
    ///
    /// A record already in the list is replaced and moved to the end, its
    /// old marker removed first. On resolution failure nothing is mutated
    /// and no marker is drawn.
    pub fn add_stop(&mut self, record: SourceRecord) -> Result<WaypointKey, SessionError> {
        let query = record.address().query();
        let Some(coordinates) = self.geocoder.geocode(&query) else {
            return Err(SessionError::AddressNotFound {
                label: record.label(),
            });
        };

        let waypoint = Waypoint::new(record, coordinates);
        let key = waypoint.key;
        let marker_id = key.marker_id();
        let label = waypoint.label.clone();

        if self.store.contains(&key) {
            self.canvas.remove_marker(&marker_id);
        }
        self.store.insert(waypoint);

        self.canvas
            .draw_marker(&marker_id, coordinates, key.kind.marker_color(), &label);
        self.canvas.center_on(coordinates, POINT_ZOOM);

        tracing::debug!(marker = %marker_id, "stop added");
        Ok(key)
    }

    /// Drops a stop and its marker; no-op for an unknown key.
    ///
    /// When fewer than two stops remain the current route is invalidated:
    /// its line is removed and statistics derive back to zero.
    pub fn remove_stop(&mut self, key: &WaypointKey) {
        if self.store.remove(key).is_some() {
            self.canvas.remove_marker(&key.marker_id());
        }
        if self.store.len() < 2 {
            self.invalidate_route();
        }
    }

    /// Swaps a stop with its neighbor; boundary moves are no-ops.
    ///
    /// An already-generated route is left in place until the next
    /// generation; its recorded stop keys show what it was built from.
    pub fn move_stop(&mut self, key: &WaypointKey, direction: Direction) -> bool {
        self.store.shift(key, direction)
    }

    /// Composes an itinerary over the current stops in list order and
    /// draws it on the reserved route layer.
    ///
    /// Any previously drawn line is removed up front; on failure the
    /// current route is cleared as well, so no stale line survives a
    /// failed regeneration.
    pub fn generate(&mut self) -> Result<&Route, SessionError> {
        let have = self.store.len();
        if have < 2 {
            return Err(SessionError::TooFewStops { have });
        }

        self.canvas.remove_path(ROUTE_LAYER);

        let Some(route) = compose(&self.router, self.store.as_slice()) else {
            self.current = None;
            return Err(SessionError::NoRoute);
        };

        tracing::info!(
            stops = route.stops.len(),
            distance_km = route.distance_km,
            duration_minutes = route.duration_minutes,
            "route generated"
        );

        self.canvas
            .draw_path(ROUTE_LAYER, &route.path, ROUTE_COLOR, ROUTE_WIDTH);
        if let Some(bounds) = route.path.bounds() {
            self.canvas.fit_bounds(bounds);
        }
        self.annotate_work_order();

        Ok(self.current.insert(route))
    }

    /// Attaches a work order to the session; does not touch the stop list
    /// or geometry. A previously assigned order loses its marker.
    pub fn assign_work_order(&mut self, order: WorkOrder) {
        if let Some(previous) = self.work_order.take() {
            self.canvas.remove_marker(&order_marker_key(&previous).marker_id());
        }
        self.work_order = Some(order);
    }

    pub fn clear_work_order(&mut self) {
        if let Some(previous) = self.work_order.take() {
            self.canvas.remove_marker(&order_marker_key(&previous).marker_id());
        }
    }

    /// Attaches a vehicle for capacity/labeling; never affects geometry.
    pub fn assign_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicle = Some(vehicle);
    }

    pub fn clear_vehicle(&mut self) {
        self.vehicle = None;
    }

    /// Clears stops, route, context and every drawing this session owns.
    pub fn reset(&mut self) {
        for waypoint in self.store.clear() {
            self.canvas.remove_marker(&waypoint.key.marker_id());
        }
        if self.current.take().is_some() {
            self.canvas.remove_path(ROUTE_LAYER);
        }
        if let Some(order) = self.work_order.take() {
            self.canvas.remove_marker(&order_marker_key(&order).marker_id());
        }
        self.vehicle = None;
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        self.store.as_slice()
    }

    pub fn current_route(&self) -> Option<&Route> {
        self.current.as_ref()
    }

    pub fn work_order(&self) -> Option<&WorkOrder> {
        self.work_order.as_ref()
    }

    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    pub fn stats(&self) -> RouteStats {
        RouteStats::summarize(self.current.as_ref(), self.store.len())
    }

    fn invalidate_route(&mut self) {
        if self.current.take().is_some() {
            self.canvas.remove_path(ROUTE_LAYER);
        }
    }

    /// Marks the assigned work order's site after a successful generation.
    ///
    /// Annotation only: resolution failure skips the marker and leaves the
    /// generated route untouched.
    fn annotate_work_order(&mut self) {
        let Some(order) = &self.work_order else {
            return;
        };

        let query = order.site_address().query();
        let Some(at) = self.geocoder.geocode(&query) else {
            tracing::warn!(order = order.id, "work order site address did not resolve");
            return;
        };

        let key = order_marker_key(order);
        let label = format!(
            "Order {}: {} (site: {})",
            order.id, order.service_role, order.work_site_supervisor
        );
        self.canvas.draw_marker(
            &key.marker_id(),
            at,
            WaypointKind::WorkOrder.marker_color(),
            &label,
        );
    }
}

fn order_marker_key(order: &WorkOrder) -> WaypointKey {
    WaypointKey::new(WaypointKind::WorkOrder, order.id)
}
