//! Order intake and completion bookkeeping.
//!
//! Incoming orders wait in a FIFO queue; completed deliveries sit on a LIFO
//! stack so the most recent one is cheap to inspect or revert.  Every order
//! ever placed is also indexed by ID, so lookups work regardless of where an
//! order currently lives.
//!
//! The queue and stack hold only `OrderId`s; the index owns the records.

use std::collections::VecDeque;

use courier_core::{Order, OrderId};
use rustc_hash::FxHashMap;

/// FIFO intake queue plus LIFO completion stack, with an ID index over both.
#[derive(Debug)]
pub struct OrderBook {
    pending: VecDeque<OrderId>,
    completed: Vec<OrderId>,
    by_id: FxHashMap<OrderId, Order>,
    next_id: OrderId,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            completed: Vec::new(),
            by_id: FxHashMap::default(),
            next_id: OrderId::FIRST,
        }
    }

    // ── Intake ────────────────────────────────────────────────────────────

    /// Allocate an ID, record the order, and queue it at the back of the
    /// intake queue.  Location validation is the caller's job (the dispatch
    /// system checks the route map first).
    pub fn place(&mut self, pickup: String, dropoff: String, price: f64) -> OrderId {
        let id = self.next_id;
        self.next_id = self.next_id.next();
        self.by_id.insert(id, Order { id, pickup, dropoff, price });
        self.pending.push_back(id);
        id
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Pop the oldest pending order and push it onto the completion stack.
    ///
    /// Returns the delivered order, or `None` if nothing is pending.
    pub fn process_next(&mut self) -> Option<&Order> {
        let id = self.pending.pop_front()?;
        self.completed.push(id);
        self.by_id.get(&id)
    }

    /// The most recently completed delivery, without removing it.
    pub fn last_completed(&self) -> Option<&Order> {
        self.completed.last().and_then(|id| self.by_id.get(id))
    }

    /// Service recovery: pop the most recent completed delivery and requeue
    /// it at the back of the intake queue for re-processing.
    pub fn revert_last(&mut self) -> Option<&Order> {
        let id = self.completed.pop()?;
        self.pending.push_back(id);
        self.by_id.get(&id)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Look up any order by ID, whatever its status.
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.by_id.get(&id)
    }

    /// Pending orders in FIFO order (oldest first).
    pub fn pending(&self) -> impl Iterator<Item = &Order> {
        self.pending.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// The ID the next placed order will receive.
    pub fn next_id(&self) -> OrderId {
        self.next_id
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}
