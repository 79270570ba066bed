//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The planner and the dispatch layer call routing via the [`Router`] trait,
//! so applications can swap in a different algorithm (A*, bidirectional
//! search) without touching either.  The default [`DijkstraRouter`] is
//! plenty for hand-entered city maps.
//!
//! # No-path semantics
//!
//! "No path" is an empty `Vec`, not an error.  Routing from an unknown start
//! behaves the same way — lookups are lenient, matching the store's
//! `neighbors` semantics.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use courier_core::Distance;

use crate::store::RouteMap;

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine over a [`RouteMap`].
pub trait Router {
    /// Compute a shortest path from `start` to `end`, inclusive of both
    /// endpoints.
    ///
    /// Returns an empty vector when no path exists, including when either
    /// endpoint is unknown.  When several paths tie on total distance, any
    /// one of them may be returned; callers must not assume a particular
    /// tie-break.
    fn shortest_path(&self, map: &RouteMap, start: &str, end: &str) -> Vec<String>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm with a lazy-deletion binary heap.
///
/// A location may sit in the heap several times with stale distances; stale
/// entries are skipped when popped rather than removed eagerly (the std
/// `BinaryHeap` has no decrease-key).  The visited check at extraction time
/// makes this safe for non-negative weights.
#[derive(Debug, Default, Clone, Copy)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(&self, map: &RouteMap, start: &str, end: &str) -> Vec<String> {
        dijkstra(map, start, end)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(map: &RouteMap, start: &str, end: &str) -> Vec<String> {
    if !map.has_location(start) {
        return Vec::new();
    }

    // Tentative distance per location; a missing entry means "infinity".
    let mut dist: BTreeMap<&str, Distance> = BTreeMap::new();
    let mut prev: BTreeMap<&str, &str> = BTreeMap::new();
    let mut visited: BTreeSet<&str> = BTreeSet::new();

    // Min-heap: `Reverse` turns the std max-heap into a min-heap.  The name
    // is the secondary key, so equal-distance pops are deterministic.
    let mut heap: BinaryHeap<Reverse<(Distance, &str)>> = BinaryHeap::new();

    dist.insert(start, 0);
    heap.push(Reverse((0, start)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if !visited.insert(node) {
            continue; // stale heap entry
        }
        if node == end {
            break; // weights are non-negative, so `end` is final once popped
        }

        for (neighbor, weight) in map.neighbors(node) {
            let next_cost = cost.saturating_add(weight);
            if dist.get(neighbor).is_none_or(|&d| next_cost < d) {
                dist.insert(neighbor, next_cost);
                prev.insert(neighbor, node);
                heap.push(Reverse((next_cost, neighbor)));
            }
        }
    }

    reconstruct(&prev, start, end)
}

/// Walk predecessor links from `end` back to `start`, then reverse.
///
/// If the chain breaks before reaching `start` — `end` unreachable, `end`
/// unknown, or an inconsistent predecessor record — the result degrades to
/// the empty path.  A non-empty result therefore always begins at `start`
/// and ends at `end`.
fn reconstruct(prev: &BTreeMap<&str, &str>, start: &str, end: &str) -> Vec<String> {
    let mut path: Vec<String> = Vec::new();
    let mut current = end;
    loop {
        path.push(current.to_owned());
        if current == start {
            break;
        }
        match prev.get(current) {
            Some(&p) => current = p,
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
