//! The dispatch facade: one route map, one order book, one router.
//!
//! `DispatchSystem` owns its `RouteMap` outright — there is no shared or
//! global graph — so independent systems (one per test, say) can never
//! observe each other's mutations.  Everything here runs synchronously on
//! the calling thread.

use courier_core::{Distance, Order, OrderId};
use courier_graph::{plan_delivery, DeliveryPlan, DijkstraRouter, GraphError, RouteMap, Router};

use crate::error::{DispatchError, DispatchResult};
use crate::orders::OrderBook;

/// Snapshot of dispatch counters, for display or monitoring.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemStatus {
    pub pending_orders: usize,
    pub completed_deliveries: usize,
    pub next_order_id: OrderId,
    pub location_count: usize,
    /// Known location names, sorted.
    pub locations: Vec<String>,
}

/// Coordinates the route map, the order book, and a routing engine.
///
/// `depot` is the couriers' home location.  It is *not* registered
/// automatically; add it like any other location, otherwise
/// [`optimize_route`](Self::optimize_route) reports a missing depot.
pub struct DispatchSystem<R = DijkstraRouter> {
    map: RouteMap,
    orders: OrderBook,
    router: R,
    depot: String,
}

impl DispatchSystem<DijkstraRouter> {
    /// A system routed by the default Dijkstra engine.
    pub fn new(depot: impl Into<String>) -> Self {
        Self::with_router(depot, DijkstraRouter)
    }
}

impl<R: Router> DispatchSystem<R> {
    /// A system with a custom routing engine.
    pub fn with_router(depot: impl Into<String>, router: R) -> Self {
        Self {
            map: RouteMap::new(),
            orders: OrderBook::new(),
            router,
            depot: depot.into(),
        }
    }

    // ── Map maintenance ───────────────────────────────────────────────────

    /// Register a location; `false` if it already existed.
    pub fn add_location(&mut self, name: &str) -> bool {
        self.map.add_location(name)
    }

    /// Connect two existing locations with a bidirectional route.
    pub fn add_route(&mut self, a: &str, b: &str, distance: Distance) -> DispatchResult<()> {
        self.map.add_route(a, b, distance)?;
        Ok(())
    }

    pub fn map(&self) -> &RouteMap {
        &self.map
    }

    pub fn depot(&self) -> &str {
        &self.depot
    }

    // ── Order lifecycle ───────────────────────────────────────────────────

    /// Queue a new order.  Both locations must already be on the map.
    pub fn place_order(&mut self, pickup: &str, dropoff: &str, price: f64) -> DispatchResult<OrderId> {
        for name in [pickup, dropoff] {
            if !self.map.has_location(name) {
                return Err(GraphError::UnknownLocation(name.to_owned()).into());
            }
        }
        Ok(self.orders.place(pickup.to_owned(), dropoff.to_owned(), price))
    }

    /// Deliver the oldest pending order; `None` if nothing is pending.
    pub fn process_next_order(&mut self) -> Option<&Order> {
        self.orders.process_next()
    }

    /// The most recently completed delivery, if any.
    pub fn last_completed(&self) -> Option<&Order> {
        self.orders.last_completed()
    }

    /// Undo the most recent delivery, requeueing the order for re-processing.
    pub fn revert_last_delivery(&mut self) -> Option<&Order> {
        self.orders.revert_last()
    }

    /// Pending orders, oldest first.
    pub fn pending_orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.pending()
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Plan the shortest itinerary for an order: depot → pickup → dropoff.
    ///
    /// Pure query — neither the map nor any order state changes.  Fails with
    /// [`DispatchError::OrderNotFound`] for an unknown ID and with a missing
    /// depot error when the configured depot is not on the map.  Unreachable
    /// legs are a normal outcome, reported inside the plan.
    pub fn optimize_route(&self, order_id: OrderId) -> DispatchResult<DeliveryPlan> {
        let order = self
            .orders
            .get(order_id)
            .ok_or(DispatchError::OrderNotFound(order_id))?;
        let plan = plan_delivery(&self.map, &self.router, &self.depot, &order.pickup, &order.dropoff)?;
        Ok(plan)
    }

    // ── Introspection ─────────────────────────────────────────────────────

    pub fn status(&self) -> SystemStatus {
        SystemStatus {
            pending_orders: self.orders.pending_count(),
            completed_deliveries: self.orders.completed_count(),
            next_order_id: self.orders.next_id(),
            location_count: self.map.location_count(),
            locations: self.map.locations().map(str::to_owned).collect(),
        }
    }
}
