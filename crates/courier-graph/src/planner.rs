//! Delivery itinerary planning: depot → pickup → dropoff.
//!
//! A courier starts at the depot, rides to the pickup location, and delivers
//! to the dropoff.  The planner composes two shortest-path queries and
//! aggregates each leg's distance through the route map, reporting the legs
//! individually so an unreachable dropoff does not hide a perfectly good
//! depot→pickup leg.

use courier_core::Distance;

use crate::error::{GraphError, GraphResult};
use crate::router::Router;
use crate::store::RouteMap;

// ── Itinerary types ───────────────────────────────────────────────────────────

/// One leg of a delivery itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Locations visited in order, inclusive of both endpoints.  Empty when
    /// the leg is unreachable.
    pub path: Vec<String>,
    /// Total distance of the leg, or `None` when unreachable.
    pub distance: Option<Distance>,
}

impl Leg {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// A full itinerary for one order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryPlan {
    /// Depot → pickup.
    pub to_pickup: Leg,
    /// Pickup → dropoff.
    pub to_dropoff: Leg,
}

impl DeliveryPlan {
    /// Combined distance of both legs, or `None` when either leg is
    /// unreachable.  Never zero-by-default, never a partial sum.
    pub fn total(&self) -> Option<Distance> {
        match (self.to_pickup.distance, self.to_dropoff.distance) {
            (Some(a), Some(b)) => Some(a.saturating_add(b)),
            _ => None,
        }
    }
}

// ── Planning ──────────────────────────────────────────────────────────────────

/// Plan the shortest itinerary for an order.
///
/// Fails with [`GraphError::MissingDepot`] if `depot` is not on the map —
/// that is a configuration precondition, not a routing outcome.  An
/// unreachable pickup or dropoff is a normal result, reported per leg.
///
/// This is a pure query: the map is never modified.
pub fn plan_delivery<R: Router>(
    map: &RouteMap,
    router: &R,
    depot: &str,
    pickup: &str,
    dropoff: &str,
) -> GraphResult<DeliveryPlan> {
    if !map.has_location(depot) {
        return Err(GraphError::MissingDepot(depot.to_owned()));
    }
    Ok(DeliveryPlan {
        to_pickup: leg(map, router, depot, pickup),
        to_dropoff: leg(map, router, pickup, dropoff),
    })
}

fn leg<R: Router>(map: &RouteMap, router: &R, from: &str, to: &str) -> Leg {
    let path = router.shortest_path(map, from, to);
    // An empty path means "no route"; it must not be mistaken for the
    // zero-cost trivial path, so it aggregates to `None` rather than 0.
    let distance = if path.is_empty() {
        None
    } else {
        map.path_distance(&path)
    };
    Leg { path, distance }
}
